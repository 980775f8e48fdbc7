//! Per-frame uniforms shared by every pipeline (bind group 0).

use wgpu::util::DeviceExt;

use crate::camera::{CameraPose, CameraUniform, Projection};
use crate::gpu::pipeline_helpers;
use crate::options::LightingOptions;

/// Point light and ambient term.
/// NOTE: Must match the WGSL `LightingUniform` layout exactly (48 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// World-space light position.
    pub position: [f32; 3],
    /// Point light intensity.
    pub intensity: f32,
    /// Point light color.
    pub color: [f32; 3],
    /// Ambient intensity.
    pub ambient: f32,
    /// Ambient color.
    pub ambient_color: [f32; 3],
    /// Padding to 16-byte alignment.
    pub _pad: f32,
}

impl From<&LightingOptions> for LightingUniform {
    fn from(options: &LightingOptions) -> Self {
        Self {
            position: options.point_position,
            intensity: options.point_intensity,
            color: options.point_color,
            ambient: options.ambient_intensity,
            ambient_color: options.ambient_color,
            _pad: 0.0,
        }
    }
}

/// Camera and lighting uniform buffers with their bind group.
pub struct FrameUniforms {
    camera: CameraUniform,
    camera_buffer: wgpu::Buffer,
    _lighting_buffer: wgpu::Buffer,
    /// Layout of bind group 0.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group 0.
    pub bind_group: wgpu::BindGroup,
}

impl FrameUniforms {
    /// Allocate both buffers. Lighting is static after creation.
    #[must_use]
    pub fn new(device: &wgpu::Device, lighting: &LightingOptions) -> Self {
        let camera = CameraUniform::new();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lighting_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Buffer"),
            contents: bytemuck::cast_slice(&[LightingUniform::from(lighting)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[
                pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ),
                pipeline_helpers::uniform_buffer(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            camera,
            camera_buffer,
            _lighting_buffer: lighting_buffer,
            layout,
            bind_group,
        }
    }

    /// Upload the camera for this frame.
    pub fn update_camera(&mut self, queue: &wgpu::Queue, pose: &CameraPose, projection: &Projection) {
        self.camera.update_view_proj(pose, projection);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[self.camera]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_uniform_matches_wgsl_size() {
        assert_eq!(size_of::<LightingUniform>(), 48);
    }

    #[test]
    fn lighting_uniform_copies_options() {
        let uniform = LightingUniform::from(&LightingOptions::default());
        assert_eq!(uniform.position, [7.0, 15.0, 20.0]);
        assert_eq!(uniform.intensity, 1000.0);
        assert_eq!(uniform.ambient, 0.15);
    }
}
