use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage, ShaderType,
};

use crate::error::PlanetscapeError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with `#import` support.
///
/// Pre-loads the shared WGSL modules at construction time. Consuming shaders use
/// `#import planetscape::module_name::item` to pull in shared code. The composer
/// produces `naga::Module` IR directly, skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules in dependency order.
const MODULES: &[ModuleDef] = &[
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/camera.wgsl"),
        file_path: "modules/camera.wgsl",
    },
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/lighting.wgsl"),
        file_path: "modules/lighting.wgsl",
    },
];

impl ShaderComposer {
    /// Create a composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Shader`] if a shared module fails to
    /// parse.
    pub fn new() -> Result<Self, PlanetscapeError> {
        let mut composer = Composer::default();

        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    PlanetscapeError::Shader(format!(
                        "failed to register shader module '{}': {e:?}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` directives)
    /// into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, PlanetscapeError> {
        let naga_module = self.compose_naga(source, file_path)?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu shader module.
    /// Useful for testing shader composition without a GPU device.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Shader`] if composition fails.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, PlanetscapeError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                PlanetscapeError::Shader(format!("failed to compose shader '{file_path}': {e}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        let shaders = [
            (include_str!("../../assets/shaders/mesh.wgsl"), "mesh.wgsl"),
            (include_str!("../../assets/shaders/line.wgsl"), "line.wgsl"),
        ];
        for (source, file_path) in shaders {
            let module = composer
                .compose_naga(source, file_path)
                .unwrap_or_else(|e| panic!("{e}"));
            assert!(module.entry_points.iter().any(|e| e.name == "vs_main"));
            assert!(module.entry_points.iter().any(|e| e.name == "fs_main"));
        }
    }

    #[test]
    fn broken_shader_reports_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let result = composer.compose_naga("fn broken( {", "broken.wgsl");
        assert!(matches!(result, Err(PlanetscapeError::Shader(_))));
    }
}
