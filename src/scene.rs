//! The car scene: where each part sits and how a frame is drawn.
//!
//! Placements are built as local transform chains with [`Instance`]
//! composition, so every repeated part is one mesh drawn once with several
//! instances.

use cgmath::{Deg, Vector3};
use rand::Rng;
use wgpu::util::DeviceExt;

use crate::{
    config::{RainConfig, SceneConfig, SmokeConfig},
    context::Context,
    data_structures::{
        instance::{Instance, InstanceRaw},
        model::{DrawMesh, Geometry, Mesh, SceneVertex},
        particle::{self, Rain, Smoke},
        texture::Texture,
    },
    pipelines::particle::{Emitter, ParticleStyle},
    resources::{
        car,
        texture::{diffuse_bind_group, diffuse_layout},
    },
};

/// Exhaust pipes sit under the rear bumper, one on each side.
pub const EXHAUST_PIPES: [[f32; 3]; 2] = [[0.3, -0.6, -1.55], [-0.3, -0.6, -1.55]];
/// How far a puff may drift sideways, up and back before it starts over.
pub const EXHAUST_REACH: [f32; 3] = [0.15, 0.5, 0.6];

pub fn body_placements() -> [Instance; 1] {
    [Instance::new()]
}

pub fn wheel_placements() -> [Instance; 4] {
    let front_right = Instance::scaled(0.5)
        * Instance::rotated_y(Deg(90.0))
        * Instance::translated(Vector3::new(0.1, -1.8, 1.1));
    let rear_right = &front_right * &Instance::translated(Vector3::new(2.0, 0.0, 0.0));
    let rear_left = &rear_right * &Instance::translated(Vector3::new(0.0, 0.0, -1.9));
    let front_left = &rear_left * &Instance::translated(Vector3::new(-2.0, 0.0, 0.0));
    [front_right, rear_right, rear_left, front_left]
}

/// Hub discs on the outside of each wheel. The left-hand pair is turned round
/// so it faces outwards too.
pub fn wheel_glass_placements() -> [Instance; 4] {
    let front_right = Instance::scaled(0.3)
        * Instance::rotated_y(Deg(90.0))
        * Instance::translated(Vector3::new(0.4, -2.75, 1.85));
    let rear_right = &front_right * &Instance::translated(Vector3::new(3.35, 0.0, 0.0));
    let rear_left = rear_right.clone()
        * Instance::translated(Vector3::new(0.0, 0.0, -3.75))
        * Instance::rotated_y(Deg(180.0))
        * Instance::translated(Vector3::new(-0.8, 0.0, 0.0));
    let front_left = &rear_left * &Instance::translated(Vector3::new(3.35, 0.0, 0.0));
    [front_right, rear_right, rear_left, front_left]
}

pub fn headlight_placements() -> [Instance; 2] {
    let right = Instance::scaled(0.2) * Instance::translated(Vector3::new(-1.9, -2.1, 0.1));
    let left = &right * &Instance::translated(Vector3::new(3.0, 0.0, 0.0));
    [right, left]
}

/// The lamp cube's transform for a light at `light_position`.
pub fn lamp_placement(light_position: Vector3<f32>) -> Instance {
    Instance::translated(light_position) * Instance::scaled(0.2)
}

/// One mesh and the instances it is drawn with.
#[derive(Debug)]
pub struct CarPart {
    pub mesh: Mesh,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
}

impl CarPart {
    pub fn new(
        device: &wgpu::Device,
        geometry: Geometry<'_, SceneVertex>,
        instances: &[Instance],
    ) -> Self {
        if let Some(index) = geometry.out_of_range_index() {
            log::warn!(
                "{} has index {index} past its {} vertices",
                geometry.name,
                geometry.vertices.len()
            );
        }
        let raw = instances.iter().map(Instance::to_raw).collect::<Vec<InstanceRaw>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Instance Buffer", geometry.name)),
            contents: bytemuck::cast_slice(&raw),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            mesh: geometry.upload(device),
            instance_buffer,
            instance_count: instances.len() as u32,
        }
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw_mesh_instanced(&self.mesh, 0..self.instance_count);
    }
}

pub struct CarScene {
    pub parts: Vec<CarPart>,
    pub lamp: Option<CarPart>,
    pub rain: Option<Emitter<Rain>>,
    pub smoke: Option<Emitter<Smoke>>,
    diffuse_bind_group: wgpu::BindGroup,
}

impl CarScene {
    pub fn new(ctx: &Context, config: &SceneConfig, diffuse: &Texture) -> Self {
        let device = &ctx.device;
        let layout = diffuse_layout(device);
        let diffuse_bind_group = diffuse_bind_group(device, &layout, diffuse);

        // Draw order: body, wheels, wheel glass, headlights.
        let parts = vec![
            CarPart::new(device, car::body(), &body_placements()),
            CarPart::new(device, car::wheel(), &wheel_placements()),
            CarPart::new(device, car::wheel_glass(), &wheel_glass_placements()),
            CarPart::new(device, car::headlight(), &headlight_placements()),
        ];

        let lamp = config.lamp.then(|| {
            let placement = lamp_placement(config.light_position.into());
            CarPart::new(device, car::lamp(), &[placement])
        });

        let mut rng = rand::thread_rng();
        let rain = config
            .rain
            .as_ref()
            .map(|rain| mk_rain(ctx, rain, &mut rng));
        let smoke = config
            .smoke
            .as_ref()
            .map(|smoke| mk_smoke(ctx, smoke, &mut rng));
        log::info!(
            "Scene ready: {} parts, {} rain drops, {} smoke puffs",
            parts.len(),
            rain.as_ref().map_or(0, Emitter::len),
            smoke.as_ref().map_or(0, Emitter::len),
        );

        Self {
            parts,
            lamp,
            rain,
            smoke,
            diffuse_bind_group,
        }
    }

    /// Records the whole frame: car parts, the lamp, then the particles.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, ctx: &'a Context) {
        render_pass.set_pipeline(&ctx.scene_pipeline);
        render_pass.set_bind_group(0, &self.diffuse_bind_group, &[]);
        render_pass.set_bind_group(1, &ctx.camera.bind_group, &[]);
        render_pass.set_bind_group(2, &ctx.light.bind_group, &[]);
        for part in &self.parts {
            part.draw(render_pass);
        }

        if let Some(lamp) = &self.lamp {
            render_pass.set_pipeline(&ctx.light.render_pipeline);
            render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
            render_pass.set_bind_group(1, &ctx.light.bind_group, &[]);
            lamp.draw(render_pass);
        }

        if self.rain.is_some() || self.smoke.is_some() {
            render_pass.set_pipeline(&ctx.particle_pipeline);
            render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
            if let Some(rain) = &self.rain {
                rain.draw(render_pass);
            }
            if let Some(smoke) = &self.smoke {
                smoke.draw(render_pass);
            }
        }
    }

    /// Advances every particle one step and uploads the new offsets for the
    /// next frame.
    pub fn update(&mut self, queue: &wgpu::Queue) {
        if let Some(rain) = &mut self.rain {
            rain.update_all();
            rain.write_to_buffer(queue);
        }
        if let Some(smoke) = &mut self.smoke {
            smoke.update_all();
            smoke.write_to_buffer(queue);
        }
    }
}

/// `amount` puffs shared between the exhaust pipes. The first pipe takes
/// whatever does not divide evenly.
pub fn spawn_smoke<R: Rng + ?Sized>(rng: &mut R, amount: usize) -> Vec<Smoke> {
    let per_pipe = amount / EXHAUST_PIPES.len();
    let remainder = amount % EXHAUST_PIPES.len();
    EXHAUST_PIPES
        .iter()
        .enumerate()
        .flat_map(|(i, &pipe)| {
            let count = if i == 0 { per_pipe + remainder } else { per_pipe };
            particle::spawn_exhaust(rng, pipe.into(), EXHAUST_REACH.into(), count)
        })
        .collect()
}

fn mk_rain<R: Rng + ?Sized>(ctx: &Context, config: &RainConfig, rng: &mut R) -> Emitter<Rain> {
    let drops = particle::spawn_rain(rng, config.amount, config.fall_speed);
    Emitter::new(
        &ctx.device,
        &ctx.particle_style_layout,
        car::rain_drop().upload(&ctx.device),
        ParticleStyle::new(config.color, config.drop_scale),
        drops,
    )
}

fn mk_smoke<R: Rng + ?Sized>(ctx: &Context, config: &SmokeConfig, rng: &mut R) -> Emitter<Smoke> {
    let puffs = spawn_smoke(rng, config.amount);
    Emitter::new(
        &ctx.device,
        &ctx.particle_style_layout,
        car::rain_drop().upload(&ctx.device),
        ParticleStyle::new(config.color, config.puff_scale),
        puffs,
    )
}
