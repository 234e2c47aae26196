//! Planet table and decorations for the stylized solar system.
//!
//! Sizes and distances are scene units, hand-tuned for the camera orbit,
//! not astronomical ratios.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use orrery_engine::{AnimatedNode, Geometry, Material, MeshComponent, Transform};

/// Rock meshes instanced by the asteroid belt.
pub const ROCKS: [&str; 3] = ["Rock1", "Rock2", "Rock3"];

/// Belt sits between Mars (2.25) and Jupiter (2.75).
pub const BELT_DISTANCE: f32 = 2.5;
pub const BELT_ROCK_SIZE: f32 = 0.035;
/// Negative, like every planet's orbit rate.
pub const BELT_RATE: f32 = -0.02;

/// Moon orbit, relative to Earth.
pub const MOON_SIZE: f32 = 0.075;
pub const MOON_DISTANCE: f32 = 0.4;
pub const MOON_TEXTURE: &str = "moon.png";

/// Decoration riding along with a planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companion {
    None,
    Moon,
    Ring { radius: f32, tube: f32, tilted: bool },
}

/// One row of the planet table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetRow {
    pub texture: &'static str,
    pub size: f32,
    pub distance: f32,
    pub companion: Companion,
}

const fn row(texture: &'static str, size: f32, distance: f32, companion: Companion) -> PlanetRow {
    PlanetRow {
        texture,
        size,
        distance,
        companion,
    }
}

/// Inner planets, inside the asteroid belt.
pub const INNER: [PlanetRow; 4] = [
    row("mercury.png", 0.1, 1.25, Companion::None),
    row("venus.png", 0.2, 1.65, Companion::None),
    row("earth.png", 0.225, 2.0, Companion::Moon),
    row("mars.png", 0.15, 2.25, Companion::None),
];

/// Outer planets, beyond the asteroid belt.
pub const OUTER: [PlanetRow; 4] = [
    row("jupiter.png", 0.4, 2.75, Companion::None),
    row("saturn.png", 0.35, 3.25, Companion::Ring { radius: 0.6, tube: 0.15, tilted: true }),
    row("uranus.png", 0.3, 3.75, Companion::Ring { radius: 0.5, tube: 0.05, tilted: false }),
    row("neptune.png", 0.3, 4.25, Companion::None),
];

/// Every texture the table refers to, moon included.
pub fn textures() -> impl Iterator<Item = &'static str> {
    INNER
        .iter()
        .chain(OUTER.iter())
        .map(|p| p.texture)
        .chain(std::iter::once(MOON_TEXTURE))
}

/// A flattened torus ring around a planet.
pub fn planet_ring(tag: &str, radius: f32, tube: f32, tilted: bool) -> AnimatedNode {
    let rotation = if tilted { Vec3::new(FRAC_PI_2, 0.0, 0.0) } else { Vec3::ZERO };
    let geometry = Geometry::Torus {
        radius,
        tube,
        radial_segments: 8,
        tubular_segments: 64,
    };
    AnimatedNode::group(format!("{tag}_ring"))
        .with_transform(
            Transform::new()
                .with_rotation(rotation)
                .with_scale(Vec3::new(1.0, 1.0, 0.1)),
        )
        .with_drawable(MeshComponent::new(geometry, Material::standard()))
}
