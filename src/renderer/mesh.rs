//! Instanced indexed meshes with a per-draw material (bind group 1).

use glam::Mat4;

use crate::gpu::buffer::TypedBuffer;
use crate::gpu::pipeline_helpers;
use crate::gpu::texture::ImageTexture;
use crate::scene::mesh_gen::{MeshData, MeshVertex};

/// Surface parameters for one mesh.
/// NOTE: Must match the WGSL `Material` layout exactly (48 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Linear RGBA base color, multiplied with the texture when one is bound.
    pub base_color: [f32; 4],
    /// Emissive color added after lighting.
    pub emissive: [f32; 4],
    /// Non-zero once an image texture is bound.
    pub use_texture: u32,
    /// Non-zero to skip lighting.
    pub unlit: u32,
    /// Padding to 16-byte alignment.
    pub _pad: [u32; 2],
}

impl MaterialUniform {
    /// Lit material with the given color.
    #[must_use]
    pub fn lit(color: [f32; 3]) -> Self {
        Self {
            base_color: [color[0], color[1], color[2], 1.0],
            emissive: [0.0; 4],
            use_texture: 0,
            unlit: 0,
            _pad: [0; 2],
        }
    }

    /// Material that ignores lighting.
    #[must_use]
    pub fn unlit(color: [f32; 3]) -> Self {
        Self {
            unlit: 1,
            ..Self::lit(color)
        }
    }
}

/// Model matrix per instance, vertex buffer slot 1.
pub(crate) type InstanceData = [[f32; 4]; 4];

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4
];

/// Vertex buffer layouts for `mesh.wgsl`.
pub(crate) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRIBUTES,
        },
        wgpu::VertexBufferLayout {
            array_stride: size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        },
    ]
}

/// Layout of bind group 1: material uniform, texture, sampler.
pub(crate) fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Material Bind Group Layout"),
        entries: &[
            pipeline_helpers::uniform_buffer(0, wgpu::ShaderStages::FRAGMENT),
            pipeline_helpers::texture_2d(1),
            pipeline_helpers::filtering_sampler(2),
        ],
    })
}

/// Shared GPU objects every [`MeshDraw`] binds against.
pub(crate) struct MaterialContext<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub layout: &'a wgpu::BindGroupLayout,
    pub sampler: &'a wgpu::Sampler,
    pub fallback: &'a ImageTexture,
}

/// One mesh: geometry, instance transforms and material.
pub(crate) struct MeshDraw {
    label: String,
    vertex_buffer: TypedBuffer<MeshVertex>,
    index_buffer: TypedBuffer<u32>,
    instances: TypedBuffer<InstanceData>,
    material: MaterialUniform,
    material_buffer: TypedBuffer<MaterialUniform>,
    bind_group: wgpu::BindGroup,
}

impl MeshDraw {
    /// Upload geometry and bind the fallback texture.
    pub fn new(
        ctx: &MaterialContext<'_>,
        label: &str,
        mesh: &MeshData,
        material: MaterialUniform,
    ) -> Self {
        let vertex_buffer = TypedBuffer::from_slice(
            ctx.device,
            &format!("{label} Vertices"),
            &mesh.vertices,
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = TypedBuffer::from_slice(
            ctx.device,
            &format!("{label} Indices"),
            &mesh.indices,
            wgpu::BufferUsages::INDEX,
        );
        let instances = TypedBuffer::with_capacity(
            ctx.device,
            &format!("{label} Instances"),
            1,
            wgpu::BufferUsages::VERTEX,
        );
        let material_buffer = TypedBuffer::from_slice(
            ctx.device,
            &format!("{label} Material"),
            &[material],
            wgpu::BufferUsages::UNIFORM,
        );
        let bind_group =
            Self::create_bind_group(ctx, label, material_buffer.buffer(), ctx.fallback);

        Self {
            label: label.to_owned(),
            vertex_buffer,
            index_buffer,
            instances,
            material,
            material_buffer,
            bind_group,
        }
    }

    fn create_bind_group(
        ctx: &MaterialContext<'_>,
        label: &str,
        material_buffer: &wgpu::Buffer,
        texture: &ImageTexture,
    ) -> wgpu::BindGroup {
        ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Material Bind Group")),
            layout: ctx.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: material_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(ctx.sampler),
                },
            ],
        })
    }

    /// Bind an image texture, replacing any previous one.
    pub fn set_texture(&mut self, ctx: &MaterialContext<'_>, texture: &ImageTexture) {
        self.material.use_texture = 1;
        let _ = self
            .material_buffer
            .write(ctx.device, ctx.queue, &[self.material]);
        self.bind_group =
            Self::create_bind_group(ctx, &self.label, self.material_buffer.buffer(), texture);
    }

    /// Replace the instance transforms. An empty slice hides the mesh.
    pub fn write_instances(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, models: &[Mat4]) {
        let data: Vec<InstanceData> = models.iter().map(Mat4::to_cols_array_2d).collect();
        let _ = self.instances.write(device, queue, &data);
    }

    /// Bind material, buffers and draw every instance.
    ///
    /// Caller must set the pipeline and bind group 0 before calling this.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_buffer.is_empty() || self.instances.is_empty() {
            return;
        }
        render_pass.set_bind_group(1, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.buffer().slice(..));
        render_pass.set_vertex_buffer(1, self.instances.buffer().slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.buffer().slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(
            0..self.index_buffer.len() as u32,
            0,
            0..self.instances.len() as u32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_matches_wgsl_size() {
        assert_eq!(size_of::<MaterialUniform>(), 48);
    }

    #[test]
    fn unlit_keeps_color() {
        let material = MaterialUniform::unlit([1.0, 0.5, 0.25]);
        assert_eq!(material.base_color, [1.0, 0.5, 0.25, 1.0]);
        assert_eq!(material.unlit, 1);
        assert_eq!(material.use_texture, 0);
    }

    #[test]
    fn vertex_layouts_cover_mesh_and_instance() {
        let [mesh, instance] = vertex_layouts();
        assert_eq!(mesh.array_stride, 32);
        assert_eq!(instance.array_stride, 64);
        assert_eq!(instance.step_mode, wgpu::VertexStepMode::Instance);
    }
}
