//! CPU-simulated particles.
//!
//! Particles move by a fixed step every frame (not scaled by frame time) and
//! are recycled once they leave their area: rain wraps back to the top of the
//! unit cube, smoke restarts at its emitter.

use cgmath::{Vector3, Vector4};
use rand::Rng;

/// Rain starts at this height once it has fallen through the floor.
pub const RAIN_TOP: f32 = 1.0;
/// Drops at or below this height wrap back to [`RAIN_TOP`].
pub const RAIN_FLOOR: f32 = -1.0;

/// A simulated point that is drawn as one instance of its emitter's shape.
pub trait Particle {
    fn update(&mut self);
    fn offset(&self) -> Vector4<f32>;

    fn to_raw(&self) -> ParticleRaw {
        ParticleRaw {
            offset: self.offset().into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleRaw {
    pub offset: [f32; 4],
}

impl ParticleRaw {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 5,
                format: wgpu::VertexFormat::Float32x4,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rain {
    pub offset: Vector4<f32>,
    pub speed: Vector4<f32>,
}

impl Rain {
    pub fn new(offset: Vector4<f32>, speed: Vector4<f32>) -> Self {
        Self { offset, speed }
    }
}

impl Particle for Rain {
    fn update(&mut self) {
        self.offset += self.speed;
        if self.offset.y <= RAIN_FLOOR {
            self.offset.y = RAIN_TOP;
        }
    }

    fn offset(&self) -> Vector4<f32> {
        self.offset
    }
}

/// One coordinate on the 0.01 grid covering [-1.0, 0.99].
fn unit_grid_coordinate<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0..200u32) as f32 / 100.0 - 1.0
}

/// Scatter `amount` drops through the unit cube, all falling at `fall_speed`
/// per frame.
pub fn spawn_rain<R: Rng + ?Sized>(rng: &mut R, amount: usize, fall_speed: f32) -> Vec<Rain> {
    let speed = Vector4::new(0.0, -fall_speed, 0.0, 0.0);
    (0..amount)
        .map(|_| {
            let x = unit_grid_coordinate(rng);
            let y = unit_grid_coordinate(rng);
            let z = unit_grid_coordinate(rng);
            Rain::new(Vector4::new(x, y, z, 0.0), speed)
        })
        .collect()
}

/// A particle that drifts away from its origin and starts over once it leaves
/// the box spanned by `start` and `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoke {
    pub origin: Vector4<f32>,
    pub offset: Vector4<f32>,
    pub speed: Vector4<f32>,
    pub start: Vector4<f32>,
    pub end: Vector4<f32>,
}

impl Smoke {
    pub fn new(
        offset: Vector4<f32>,
        speed: Vector4<f32>,
        start: Vector4<f32>,
        end: Vector4<f32>,
    ) -> Self {
        Self {
            origin: offset,
            offset,
            speed,
            start,
            end,
        }
    }

    pub fn is_inside(&self) -> bool {
        let (o, s, e) = (self.offset, self.start, self.end);
        (s.x..=e.x).contains(&o.x) && (s.y..=e.y).contains(&o.y) && (s.z..=e.z).contains(&o.z)
    }
}

impl Particle for Smoke {
    fn update(&mut self) {
        self.offset += self.speed;
        if !self.is_inside() {
            self.offset = self.origin;
        }
    }

    fn offset(&self) -> Vector4<f32> {
        self.offset
    }
}

/// Puffs leaving an exhaust pipe at `pipe`, drifting up and back (towards -Z)
/// until they leave a box of `reach` behind the pipe.
///
/// Each puff starts somewhere along its own path, so the plume is already
/// full on the first frame instead of growing from a single point.
pub fn spawn_exhaust<R: Rng + ?Sized>(
    rng: &mut R,
    pipe: Vector3<f32>,
    reach: Vector3<f32>,
    amount: usize,
) -> Vec<Smoke> {
    let start = Vector4::new(pipe.x - reach.x, pipe.y - 0.05, pipe.z - reach.z, 0.0);
    let end = Vector4::new(pipe.x + reach.x, pipe.y + reach.y, pipe.z + 0.05, 0.0);
    (0..amount)
        .map(|_| {
            let speed = Vector4::new(
                rng.gen_range(-0.002..0.002),
                rng.gen_range(0.001..0.004),
                rng.gen_range(-0.008..-0.003),
                0.0,
            );
            let mut puff = Smoke::new(pipe.extend(0.0), speed, start, end);
            let head_start = rng.gen_range(0..60);
            for _ in 0..head_start {
                puff.update();
            }
            puff
        })
        .collect()
}
