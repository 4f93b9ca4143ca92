//! Instanced particle rendering.
//!
//! Every particle of an [`Emitter`] is drawn as one instance of the same small
//! shape: scaled by the emitter's style, then moved to the particle's offset.

use wgpu::util::DeviceExt;

use crate::data_structures::{
    model::{DrawMesh, Mesh, ShapeVertex, Vertex},
    particle::{Particle, ParticleRaw},
    texture,
};

/// Per-emitter colour and shape scale, bound at group 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleStyle {
    pub color: [f32; 4],
    // w is unused
    pub scale: [f32; 4],
}

impl ParticleStyle {
    pub fn new(color: [f32; 4], scale: [f32; 3]) -> Self {
        Self {
            color,
            scale: [scale[0], scale[1], scale[2], 1.0],
        }
    }
}

pub fn mk_style_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("particle_style_bind_group_layout"),
    })
}

/// Pipeline shared by all emitters: camera at group 0, style at group 1.
pub fn mk_render_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    style_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Particle Pipeline Layout"),
        bind_group_layouts: &[camera_bind_group_layout, style_bind_group_layout],
        ..Default::default()
    });
    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Particle Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("particle.wgsl").into()),
    };
    crate::pipelines::basic::mk_render_pipeline(
        device,
        &layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        Some(texture::Texture::DEPTH_FORMAT),
        &[ShapeVertex::desc(), ParticleRaw::desc()],
        shader,
    )
}

/// A fixed population of particles and the GPU state to draw them.
///
/// The population never grows after construction; particles that leave their
/// area are recycled by their own [`Particle::update`].
pub struct Emitter<P: Particle> {
    pub particles: Vec<P>,
    pub style: ParticleStyle,
    shape: Mesh,
    instance_buffer: wgpu::Buffer,
    style_bind_group: wgpu::BindGroup,
}

impl<P: Particle> Emitter<P> {
    pub fn new(
        device: &wgpu::Device,
        style_bind_group_layout: &wgpu::BindGroupLayout,
        shape: Mesh,
        style: ParticleStyle,
        particles: Vec<P>,
    ) -> Self {
        let raw = particles.iter().map(Particle::to_raw).collect::<Vec<_>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Particle Buffer", shape.name)),
            contents: bytemuck::cast_slice(&raw),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let style_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Style Buffer", shape.name)),
            contents: bytemuck::cast_slice(&[style]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let style_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: style_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: style_buffer.as_entire_binding(),
            }],
            label: Some("particle_style_bind_group"),
        });
        Self {
            particles,
            style,
            shape,
            instance_buffer,
            style_bind_group,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one step.
    pub fn update_all(&mut self) {
        self.particles.iter_mut().for_each(Particle::update);
    }

    pub fn write_to_buffer(&self, queue: &wgpu::Queue) {
        let raw = self.particles.iter().map(Particle::to_raw).collect::<Vec<_>>();
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&raw));
    }

    /// Expects the particle pipeline and the camera bind group to be set.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.particles.is_empty() {
            return;
        }
        render_pass.set_bind_group(1, &self.style_bind_group, &[]);
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw_mesh_instanced(&self.shape, 0..self.particles.len() as u32);
    }
}
