//! Asteroid belt: instanced rocks scattered around a ring.
//!
//! Each rock mesh becomes one instanced batch. Instance matrices are baked
//! once at generation time; afterwards the batch only spins rigidly about Y.

use glam::{Mat4, Vec3};

use crate::api::types::MeshId;
use crate::components::mesh::InstancedMesh;
use crate::core::node::AnimatedNode;
use crate::error::{require_non_negative, require_positive, SceneError, SceneResult};
use crate::procgen::rng::SceneRng;

/// Smallest number of instances per batch.
pub const MIN_INSTANCES: u32 = 25;
/// Largest number of instances per batch.
pub const MAX_INSTANCES: u32 = 49;
/// Half-width of the radial scatter around the belt distance.
pub const RADIAL_JITTER: f32 = 0.05;
/// Half-width of the per-rock size variation.
pub const SIZE_JITTER: f32 = 0.025;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltParams {
    /// Belt radius from the origin.
    pub distance: f32,
    /// Mean rock scale.
    pub size: f32,
    /// Spin rate of the whole batch, radians per unit of scene time.
    /// Negative, so the belt turns the same way as the planets.
    pub rate: f32,
}

impl BeltParams {
    pub fn new(distance: f32, size: f32, rate: f32) -> SceneResult<Self> {
        Self { distance, size, rate }.validated()
    }

    /// Check every field; generators call this again since the fields are public.
    pub fn validated(self) -> SceneResult<Self> {
        if !rate_is_valid(self.rate) {
            return Err(SceneError::InvalidParameter {
                name: "rate",
                value: self.rate,
            });
        }
        Ok(Self {
            distance: require_non_negative("distance", self.distance)?,
            size: require_positive("size", self.size)?,
            rate: self.rate,
        })
    }
}

fn rate_is_valid(rate: f32) -> bool {
    rate.is_finite() && rate < 0.0
}

impl Default for BeltParams {
    /// The belt between Mars and Jupiter.
    fn default() -> Self {
        Self {
            distance: 2.5,
            size: 0.035,
            rate: -0.02,
        }
    }
}

/// Draw one rock's placement matrix.
fn rock_matrix(params: &BeltParams, rng: &mut SceneRng) -> Mat4 {
    let radius = rng.jitter(params.distance, RADIAL_JITTER);
    let angle = rng.angle();
    let position = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
    let rotation = rng.quaternion();
    let scale = rng.jitter(params.size, SIZE_JITTER).max(0.0);
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
}

/// One spinning batch of `mesh` with 25..=49 scattered instances.
pub fn belt_instance(
    tag: impl Into<String>,
    params: BeltParams,
    mesh: MeshId,
    rng: &mut SceneRng,
) -> SceneResult<AnimatedNode> {
    let params = params.validated()?;
    let count = rng.int_inclusive(MIN_INSTANCES, MAX_INSTANCES) as usize;
    let mut batch = InstancedMesh::new(mesh, count);
    for i in 0..count {
        batch.set_matrix_at(i, rock_matrix(&params, rng));
    }

    let rate = params.rate;
    Ok(AnimatedNode::group(tag)
        .with_drawable(batch)
        .with_update(move |t, state| state.transform.rotation.y = t * rate))
}

/// A belt group with one instanced batch per rock mesh part.
pub fn asteroid_belt(meshes: &[MeshId], params: BeltParams, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    if meshes.is_empty() {
        return Err(SceneError::InvalidParameter { name: "meshes", value: 0.0 });
    }
    let params = params.validated()?;
    let mut belt = AnimatedNode::group("asteroid_belt");
    for (i, &mesh) in meshes.iter().enumerate() {
        belt.add(belt_instance(format!("rocks_{i}"), params, mesh, rng)?);
    }
    log::debug!("asteroid belt: {} batches at distance {}", meshes.len(), params.distance);
    Ok(belt)
}
