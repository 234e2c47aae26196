use serde::{Deserialize, Serialize};

use crate::assets::manifest::AssetManifest;
use crate::assets::registry::AssetRegistry;
use crate::core::scene::Scene;
use crate::error::SceneResult;
use crate::procgen::rng::SceneRng;

/// Viewport size in physical pixels.
/// Line materials need it to convert their pixel widths into clip space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: f32,
    pub height: f32,
}

impl Resolution {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height. Falls back to 1.0 for a collapsed viewport.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Configuration for a scene, provided by the recipe.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Seed for every random draw made during assembly (default: 42).
    pub seed: u64,
    /// Viewport resolution handed to resolution-dependent generators.
    pub resolution: Resolution,
    /// Factor from the host's millisecond timestamp to scene time (default: 0.0002).
    pub time_scale: f32,
    /// Radius of the animated camera orbit (default: 5.0).
    pub camera_distance: f32,
    /// Whether the camera circles the origin on its own (default: true).
    pub animated_camera: bool,
    /// Maximum number of drawable nodes in the transform buffer (default: 256).
    pub max_nodes: usize,
    /// Maximum number of deformable surface vertices per frame (default: 4096).
    pub max_surface_vertices: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            resolution: Resolution::default(),
            time_scale: 0.0002,
            camera_distance: 5.0,
            animated_camera: true,
            max_nodes: 256,
            max_surface_vertices: 4096,
        }
    }
}

/// Everything a recipe may read while assembling its scene.
pub struct AssemblyContext<'a> {
    pub config: &'a SceneConfig,
    pub assets: &'a AssetRegistry,
    pub rng: SceneRng,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(config: &'a SceneConfig, assets: &'a AssetRegistry) -> Self {
        Self {
            config,
            assets,
            rng: SceneRng::new(config.seed),
        }
    }
}

/// The contract every scene must fulfill.
pub trait SceneRecipe {
    /// Return scene configuration. Called once before anything else.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Textures and meshes that must be resident before `assemble` runs.
    fn manifest(&self) -> AssetManifest;

    /// Build the full scene tree. Called exactly once, after the asset gate
    /// has opened. Any error aborts assembly as a whole.
    fn assemble(&mut self, ctx: &mut AssemblyContext) -> SceneResult<Scene>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_handles_zero_height() {
        assert_eq!(Resolution::new(800.0, 0.0).aspect(), 1.0);
        assert_eq!(Resolution::new(800.0, 400.0).aspect(), 2.0);
    }

    #[test]
    fn default_config_matches_reference_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.time_scale, 0.0002);
        assert_eq!(config.camera_distance, 5.0);
        assert!(config.animated_camera);
    }
}
