//! Static scenery far behind the solar system: stars, nebula clouds and the
//! cool fill light.

use glam::Vec3;

use crate::components::backdrop::{PointCloud, Sprite, SpriteCloud};
use crate::components::light::Light;
use crate::core::node::AnimatedNode;
use crate::core::transform::Transform;
use crate::error::{require_positive, SceneError, SceneResult};
use crate::procgen::color::hsl;
use crate::procgen::rng::SceneRng;

/// Inner radius of the star shell.
pub const STAR_SHELL_MIN: f32 = 25.0;
/// Outer radius of the star shell.
pub const STAR_SHELL_MAX: f32 = 50.0;

fn require_count(name: &'static str, count: usize) -> SceneResult<usize> {
    if count == 0 {
        return Err(SceneError::InvalidParameter { name, value: 0.0 });
    }
    Ok(count)
}

/// Uniform direction on the unit sphere.
fn random_direction(rng: &mut SceneRng) -> Vec3 {
    let theta = rng.angle();
    let phi = (2.0 * rng.unit() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// `num_stars` bluish-grey points on a shell between radius 25 and 50.
pub fn starfield(num_stars: usize, size: f32, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    let num_stars = require_count("num_stars", num_stars)?;
    let size = require_positive("size", size)?;

    let mut positions = Vec::with_capacity(num_stars);
    let mut colors = Vec::with_capacity(num_stars);
    for _ in 0..num_stars {
        let radius = rng.range(STAR_SHELL_MIN, STAR_SHELL_MAX);
        positions.push(random_direction(rng) * radius);
        colors.push(hsl(0.6, 0.2, rng.unit()));
    }

    Ok(AnimatedNode::group("starfield").with_drawable(PointCloud {
        positions,
        colors,
        size,
    }))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NebulaParams {
    pub hue: f32,
    pub num_sprites: usize,
    pub opacity: f32,
    /// Disc radius the sprites are scattered over.
    pub radius: f32,
    /// Sprite edge length in world units.
    pub size: f32,
    /// Depth of the disc along Z.
    pub z: f32,
}

impl NebulaParams {
    pub fn new(hue: f32, z: f32) -> Self {
        Self {
            hue,
            z,
            ..Self::default()
        }
    }
}

impl Default for NebulaParams {
    fn default() -> Self {
        Self {
            hue: 0.6,
            num_sprites: 10,
            opacity: 0.2,
            radius: 40.0,
            size: 80.0,
            z: -50.5,
        }
    }
}

/// A soft cloud of large translucent sprites on a disc at depth `z`.
pub fn nebula(params: NebulaParams, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    require_count("num_sprites", params.num_sprites)?;
    let radius = require_positive("radius", params.radius)?;
    require_positive("size", params.size)?;

    let sprites = (0..params.num_sprites)
        .map(|_| {
            let angle = rng.angle();
            let r = rng.range(0.0, radius);
            Sprite {
                position: Vec3::new(angle.cos() * r, angle.sin() * r, params.z),
                color: hsl(params.hue + rng.range(0.0, 0.1), 1.0, 0.5),
                opacity: params.opacity,
                size: params.size,
                rotation: rng.angle(),
            }
        })
        .collect();

    Ok(AnimatedNode::group("nebula").with_drawable(SpriteCloud { sprites }))
}

/// The blue directional fill light shining down from +Y.
pub fn fill_light() -> AnimatedNode {
    AnimatedNode::group("fill_light")
        .with_transform(Transform::new().with_position(Vec3::Y))
        .with_drawable(Light::directional(0x0099ff, 1.0))
}
