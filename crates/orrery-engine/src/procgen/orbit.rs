//! Orbital placement: one orbit group per planet.
//!
//! The planet sits at a fixed offset inside its orbit group; the group spins
//! about its local Y axis at a fixed rate, carrying the planet (and anything
//! riding along with it, such as a moon's own orbit group) around the origin.

use glam::Vec3;

use crate::assets::registry::AssetRegistry;
use crate::components::material::Material;
use crate::components::mesh::MeshComponent;
use crate::core::node::AnimatedNode;
use crate::core::transform::Transform;
use crate::error::{require_non_negative, require_positive, SceneResult};
use crate::procgen::rng::SceneRng;

/// Scale of the Fresnel rim shell relative to its body.
pub const RIM_SCALE: f32 = 1.01;

/// Declarative description of one planet.
#[derive(Debug, Default)]
pub struct OrbitSpec {
    /// Body radius, > 0.
    pub size: f32,
    /// Orbit radius, >= 0.
    pub distance: f32,
    /// Texture name as listed in the asset manifest, e.g. `earth.png`.
    pub texture: String,
    /// Nodes that travel rigidly with the planet (moons, rings).
    pub children: Vec<AnimatedNode>,
    /// Give the orbit plane a random fixed tilt about X.
    pub tilt: bool,
}

impl OrbitSpec {
    pub fn new(size: f32, distance: f32, texture: impl Into<String>) -> Self {
        Self {
            size,
            distance,
            texture: texture.into(),
            children: Vec::new(),
            tilt: true,
        }
    }

    pub fn with_child(mut self, child: AnimatedNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_tilt(mut self, tilt: bool) -> Self {
        self.tilt = tilt;
        self
    }

    /// Tag stem derived from the texture name (`earth.png` → `earth`).
    pub fn name(&self) -> &str {
        self.texture
            .rsplit_once('.')
            .map_or(self.texture.as_str(), |(stem, _)| stem)
    }
}

/// Where on its orbit a body starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPlacement {
    pub angle: f32,
    pub distance: f32,
}

impl OrbitPlacement {
    pub fn new(angle: f32, distance: f32) -> SceneResult<Self> {
        Ok(Self {
            angle,
            distance: require_non_negative("distance", distance)?,
        })
    }

    /// Draw a uniform starting angle in [0, 2π).
    pub fn sample(distance: f32, rng: &mut SceneRng) -> SceneResult<Self> {
        let distance = require_non_negative("distance", distance)?;
        Ok(Self {
            angle: rng.angle(),
            distance,
        })
    }

    /// Offset from the orbit group's origin: (cos a·d, 0, sin a·d).
    pub fn offset(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        )
    }

    /// Move `node` onto the orbit, keeping its own height.
    pub fn place(&self, node: &mut AnimatedNode) {
        let offset = self.offset();
        let position = &mut node.transform_mut().position;
        position.x = offset.x;
        position.z = offset.z;
    }
}

/// Yaw of an orbit group at time `t`.
pub fn orbit_rotation(t: f32, rate: f32) -> f32 {
    t * rate
}

/// Wrap `body` and `riders` into a spinning orbit group.
///
/// The body and every rider are placed at `placement.offset()` inside the
/// group; the group's behaviour sets `rotation.y = t * rate`.
pub fn orbit_group(
    tag: impl Into<String>,
    placement: OrbitPlacement,
    rate: f32,
    mut body: AnimatedNode,
    riders: Vec<AnimatedNode>,
) -> AnimatedNode {
    let mut group = AnimatedNode::group(tag)
        .with_update(move |t, state| state.transform.rotation.y = orbit_rotation(t, rate));

    for mut rider in riders {
        placement.place(&mut rider);
        group.add(rider);
    }

    placement.place(&mut body);
    group.add(body);
    group
}

/// Build a textured planet inside its orbit group.
///
/// Draws, in order: the orbit tilt (when enabled), the starting angle, and
/// the revolution rate in [-1, 0).
pub fn planet(spec: OrbitSpec, assets: &AssetRegistry, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    let size = require_positive("size", spec.size)?;
    require_non_negative("distance", spec.distance)?;
    let map = assets.texture(&spec.texture)?;
    let name = spec.name().to_string();

    let tilt = if spec.tilt { rng.angle() } else { 0.0 };
    let placement = OrbitPlacement::sample(spec.distance, rng)?;
    let rate = rng.range(-1.0, 0.0);

    let rim = AnimatedNode::group(format!("{name}_rim"))
        .with_transform(Transform::new().with_uniform_scale(RIM_SCALE))
        .with_drawable(MeshComponent::sphere(Material::fresnel(0xffffff, 0x000000)));

    let body = AnimatedNode::group(name.clone())
        .with_transform(Transform::new().with_uniform_scale(size))
        .with_drawable(MeshComponent::sphere(Material::textured(map)))
        .with_child(rim);

    let mut group = orbit_group(format!("{name}_orbit"), placement, rate, body, spec.children);
    group.transform_mut().rotation.x = tilt;

    log::debug!(
        "planet {name}: distance {:.2}, angle {:.3}, rate {rate:.3}",
        placement.distance,
        placement.angle
    );
    Ok(group)
}
