//! Noise-displaced corona shell around the sun.
//!
//! Every frame each vertex is pushed along its outward normal by a 3D
//! gradient-noise sample. The sample point drifts smoothly with `t`
//! (`cos t`, `sin t`, `t` on the three axes), so the surface churns without
//! popping between frames.

use glam::Vec3;
use noise::{NoiseFn, Perlin};

use crate::components::material::{Material, Side};
use crate::components::mesh::SurfaceComponent;
use crate::core::node::AnimatedNode;
use crate::error::{require_positive, SceneResult};
use crate::procgen::icosphere::icosphere_normals;

/// Peak displacement as a fraction of the radius.
pub const CORONA_AMPLITUDE: f32 = 0.4;
/// Spatial frequency of the noise sample points.
pub const CORONA_FREQUENCY: f32 = 3.0;

/// Immutable generation-time state of a corona: radius, base normals, noise field.
pub struct CoronaSurface<N = Perlin> {
    radius: f32,
    normals: Vec<Vec3>,
    noise: N,
}

impl<N: NoiseFn<f64, 3>> CoronaSurface<N> {
    pub fn new(radius: f32, detail: u32, noise: N) -> SceneResult<Self> {
        Ok(Self {
            radius: require_positive("radius", radius)?,
            normals: icosphere_normals(detail),
            noise,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn vertex_count(&self) -> usize {
        self.normals.len()
    }

    /// Noise at the drifting sample point for `normal`, clamped to [-1, 1].
    pub fn sample(&self, normal: Vec3, t: f32) -> f32 {
        let p = normal * CORONA_FREQUENCY;
        let point = [
            (p.x + t.cos()) as f64,
            (p.y + t.sin()) as f64,
            (p.z + t) as f64,
        ];
        (self.noise.get(point) as f32).clamp(-1.0, 1.0)
    }

    /// Write the displaced vertices for time `t` into `out`.
    ///
    /// Each vertex lands at `n·radius·(1 + ns·0.4)`, so every length stays
    /// within `radius·(1 ± 0.4)`.
    pub fn displace(&self, t: f32, out: &mut [Vec3]) {
        for (slot, &n) in out.iter_mut().zip(self.normals.iter()) {
            let ns = self.sample(n, t);
            *slot = n * self.radius + n * (self.radius * ns * CORONA_AMPLITUDE);
        }
    }

    /// Displaced vertices for time `t`.
    pub fn displaced(&self, t: f32) -> Vec<Vec3> {
        let mut out = vec![Vec3::ZERO; self.normals.len()];
        self.displace(t, &mut out);
        out
    }

    /// Undisplaced sphere vertices.
    pub fn rest_positions(&self) -> Vec<Vec3> {
        self.normals.iter().map(|&n| n * self.radius).collect()
    }
}

impl<N: NoiseFn<f64, 3> + 'static> CoronaSurface<N> {
    /// Wrap the surface in a node that re-displaces its vertices every frame.
    pub fn into_node(self, tag: impl Into<String>, material: Material) -> AnimatedNode {
        let surface = SurfaceComponent::new(self.rest_positions(), material);
        AnimatedNode::group(tag)
            .with_drawable(surface)
            .with_update(move |t, state| {
                if let Some(surface) = state.drawable.as_mut().and_then(|d| d.as_surface_mut()) {
                    self.displace(t, &mut surface.positions);
                }
            })
    }
}

/// The reference corona: pale-yellow back-faced shell, Perlin noise.
pub fn corona(radius: f32, detail: u32, seed: u32) -> SceneResult<AnimatedNode> {
    let surface = CoronaSurface::new(radius, detail, Perlin::new(seed))?;
    log::debug!("corona: {} vertices at radius {radius}", surface.vertex_count());
    Ok(surface.into_node("corona", Material::basic(0xffff99, Side::Back)))
}
