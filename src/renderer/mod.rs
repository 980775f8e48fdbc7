//! wgpu renderer for the backdrop scene.
//!
//! One render pass per frame, cleared to black: the skybox (inside faces,
//! unlit), then the planet, stars and ship, then the debug helper lines when
//! they are visible. Everything shares the frame uniforms in bind group 0;
//! each mesh binds its own material in group 1.

mod frame;
mod lines;
mod mesh;
pub(crate) mod pipeline_util;

pub use frame::{FrameUniforms, LightingUniform};
use glam::Mat4;
pub use mesh::MaterialUniform;

use self::lines::HelperLines;
use self::mesh::{MaterialContext, MeshDraw};
use crate::assets::LoadedImage;
use crate::error::PlanetscapeError;
use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::{DepthTexture, ImageTexture};
use crate::scene::{mesh_gen, ObjectHandle, Scene, Transform};

const PLANET_SEGMENTS: (u32, u32) = (64, 32);
const SKYBOX_SEGMENTS: (u32, u32) = (60, 40);
const STAR_SEGMENTS: (u32, u32) = (24, 24);
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Owns every pipeline and GPU buffer needed to draw a [`Scene`].
pub struct SceneRenderer {
    frame: FrameUniforms,
    material_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    fallback_texture: ImageTexture,
    depth: DepthTexture,
    mesh_pipeline: wgpu::RenderPipeline,
    skybox_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    planet: MeshDraw,
    stars: MeshDraw,
    ship: MeshDraw,
    skybox: MeshDraw,
    helpers: HelperLines,
}

impl SceneRenderer {
    /// Compose shaders, build pipelines and upload the scene's static
    /// geometry and starfield.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Shader`] if a shader fails to compose.
    pub fn new(context: &RenderContext, scene: &Scene) -> Result<Self, PlanetscapeError> {
        let device = &context.device;
        let mut composer = ShaderComposer::new()?;
        let mesh_shader = composer.compose(
            device,
            "Mesh Shader",
            include_str!("../../assets/shaders/mesh.wgsl"),
            "mesh.wgsl",
        )?;
        let line_shader = composer.compose(
            device,
            "Line Shader",
            include_str!("../../assets/shaders/line.wgsl"),
            "line.wgsl",
        )?;

        let frame = FrameUniforms::new(device, scene.lighting());
        let material_layout = mesh::material_layout(device);
        let format = context.format();

        let mesh_buffers = mesh::vertex_layouts();
        let triangles = |cull_mode| wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode,
            ..Default::default()
        };
        let mesh_pipeline = pipeline_util::create_pipeline(
            device,
            "Mesh Pipeline",
            &mesh_shader,
            format,
            &[&frame.layout, &material_layout],
            &mesh_buffers,
            triangles(Some(wgpu::Face::Back)),
        );
        // The skybox is seen from inside.
        let skybox_pipeline = pipeline_util::create_pipeline(
            device,
            "Skybox Pipeline",
            &mesh_shader,
            format,
            &[&frame.layout, &material_layout],
            &mesh_buffers,
            triangles(Some(wgpu::Face::Front)),
        );
        let line_pipeline = pipeline_util::create_pipeline(
            device,
            "Helper Line Pipeline",
            &line_shader,
            format,
            &[&frame.layout],
            &[lines::vertex_layout()],
            wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
        );

        let sampler = pipeline_helpers::sphere_map_sampler(device, "Sphere Map Sampler");
        let fallback_texture = ImageTexture::white(device, &context.queue);
        let (width, height) = context.size();
        let depth = DepthTexture::new(device, width, height);

        let opts = scene.options();
        let ctx = MaterialContext {
            device,
            queue: &context.queue,
            layout: &material_layout,
            sampler: &sampler,
            fallback: &fallback_texture,
        };
        let planet = MeshDraw::new(
            &ctx,
            "Planet",
            &mesh_gen::uv_sphere(opts.planet_radius, PLANET_SEGMENTS.0, PLANET_SEGMENTS.1),
            MaterialUniform::lit(WHITE),
        );
        let mut stars = MeshDraw::new(
            &ctx,
            "Stars",
            &mesh_gen::uv_sphere(opts.star_radius, STAR_SEGMENTS.0, STAR_SEGMENTS.1),
            MaterialUniform::unlit(WHITE),
        );
        let ship = MeshDraw::new(
            &ctx,
            "Ship",
            &mesh_gen::octahedron(opts.ship_radius),
            MaterialUniform::lit(opts.ship_color),
        );
        let skybox = MeshDraw::new(
            &ctx,
            "Skybox",
            &mesh_gen::uv_sphere(opts.skybox_radius, SKYBOX_SEGMENTS.0, SKYBOX_SEGMENTS.1),
            MaterialUniform::unlit(WHITE),
        );

        let star_models: Vec<Mat4> = scene
            .stars()
            .iter()
            .map(|p| Mat4::from_translation(p.as_vec3()))
            .collect();
        stars.write_instances(device, &context.queue, &star_models);

        let helpers = HelperLines::new(device, &lines::helper_lines(opts, scene.lighting()));

        log::debug!(
            "scene renderer ready: {} stars, {}x{} surface",
            star_models.len(),
            width,
            height
        );

        Ok(Self {
            frame,
            material_layout,
            sampler,
            fallback_texture,
            depth,
            mesh_pipeline,
            skybox_pipeline,
            line_pipeline,
            planet,
            stars,
            ship,
            skybox,
            helpers,
        })
    }

    /// Recreate the depth attachment for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.depth = DepthTexture::new(device, width, height);
        }
    }

    /// Upload a decoded image as the texture of `handle`'s mesh. Returns
    /// `false` for objects that are never textured.
    pub fn set_texture(
        &mut self,
        context: &RenderContext,
        handle: ObjectHandle,
        image: &LoadedImage,
    ) -> bool {
        let label = format!("{handle:?} Texture");
        let ctx = MaterialContext {
            device: &context.device,
            queue: &context.queue,
            layout: &self.material_layout,
            sampler: &self.sampler,
            fallback: &self.fallback_texture,
        };
        let draw = match handle {
            ObjectHandle::Planet => &mut self.planet,
            ObjectHandle::Skybox => &mut self.skybox,
            ObjectHandle::Ship => return false,
        };
        let texture = ImageTexture::from_rgba(
            ctx.device,
            ctx.queue,
            &label,
            image.width,
            image.height,
            &image.rgba,
        );
        draw.set_texture(&ctx, &texture);
        true
    }

    /// Upload this frame's camera and transforms, then draw and present.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] if no swapchain texture could be
    /// acquired; nothing is drawn in that case.
    pub fn render(
        &mut self,
        context: &RenderContext,
        scene: &Scene,
    ) -> Result<(), wgpu::SurfaceError> {
        self.frame
            .update_camera(&context.queue, &scene.camera(), scene.projection());
        for handle in [ObjectHandle::Planet, ObjectHandle::Ship, ObjectHandle::Skybox] {
            let models: Vec<Mat4> = scene
                .transform(handle)
                .filter(|t| t.visible)
                .map(Transform::model_matrix)
                .into_iter()
                .collect();
            let draw = match handle {
                ObjectHandle::Planet => &mut self.planet,
                ObjectHandle::Ship => &mut self.ship,
                ObjectHandle::Skybox => &mut self.skybox,
            };
            draw.write_instances(&context.device, &context.queue, &models);
        }

        let output = context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.create_encoder();
        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            rp.set_bind_group(0, &self.frame.bind_group, &[]);

            rp.set_pipeline(&self.skybox_pipeline);
            self.skybox.draw(&mut rp);

            rp.set_pipeline(&self.mesh_pipeline);
            self.planet.draw(&mut rp);
            self.stars.draw(&mut rp);
            self.ship.draw(&mut rp);

            if scene.helpers_visible() {
                rp.set_pipeline(&self.line_pipeline);
                self.helpers.draw(&mut rp);
            }
        }
        context.submit(encoder);
        output.present();
        Ok(())
    }
}
