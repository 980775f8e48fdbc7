//! Debug helper lines: the XZ grid and the point-light marker.

use glam::Vec3;

use crate::gpu::buffer::TypedBuffer;
use crate::options::{LightingOptions, SceneOptions};
use crate::scene::mesh_gen::{self, LineVertex};

const GRID_CENTER_COLOR: [f32; 3] = [0.267, 0.267, 0.267];
const GRID_COLOR: [f32; 3] = [0.533, 0.533, 0.533];
const LIGHT_HELPER_RADIUS: f32 = 1.0;

const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Vertex buffer layout for `line.wgsl`.
pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &LINE_ATTRIBUTES,
    }
}

/// Build the helper line list: grid first, then the light marker.
pub(crate) fn helper_lines(scene: &SceneOptions, lighting: &LightingOptions) -> Vec<LineVertex> {
    let mut lines = mesh_gen::grid_lines(
        scene.grid_size,
        scene.grid_divisions,
        GRID_CENTER_COLOR,
        GRID_COLOR,
    );
    lines.extend(mesh_gen::octahedron_wireframe(
        Vec3::from_array(lighting.point_position),
        LIGHT_HELPER_RADIUS,
        lighting.point_color,
    ));
    lines
}

/// Static line list drawn only while helpers are visible.
pub(crate) struct HelperLines {
    vertices: TypedBuffer<LineVertex>,
}

impl HelperLines {
    pub fn new(device: &wgpu::Device, lines: &[LineVertex]) -> Self {
        Self {
            vertices: TypedBuffer::from_slice(
                device,
                "Helper Lines",
                lines,
                wgpu::BufferUsages::VERTEX,
            ),
        }
    }

    /// Caller must set the line pipeline and bind group 0 before calling this.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.vertices.is_empty() {
            return;
        }
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.draw(0..self.vertices.len() as u32, 0..1);
    }
}
