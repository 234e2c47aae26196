use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::api::types::MeshId;
use crate::components::material::Material;

/// Geometry source for a mesh.
/// Procedural shapes are rebuilt by the host from these parameters;
/// `Asset` refers to geometry the host already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    /// Icosahedron with every edge split into `detail + 1` segments,
    /// projected onto a sphere of `radius`.
    Icosphere { radius: f32, detail: u32 },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Asset { mesh: MeshId },
}

/// A single mesh: geometry plus material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    /// Detail-6 unit icosphere, the shared body geometry of the scene.
    pub fn sphere(material: Material) -> Self {
        Self::new(Geometry::Icosphere { radius: 1.0, detail: 6 }, material)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
}

/// One draw batch sharing a loaded mesh across many independently placed copies.
///
/// The capacity is fixed at creation; instance matrices are assigned by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstancedMesh {
    pub mesh: MeshId,
    matrices: Vec<Mat4>,
}

impl InstancedMesh {
    /// Create a batch of `capacity` instances, all at identity.
    pub fn new(mesh: MeshId, capacity: usize) -> Self {
        Self {
            mesh,
            matrices: vec![Mat4::IDENTITY; capacity],
        }
    }

    /// Assign the transform of instance `index`. Out-of-range indices are ignored.
    pub fn set_matrix_at(&mut self, index: usize, matrix: Mat4) {
        if let Some(slot) = self.matrices.get_mut(index) {
            *slot = matrix;
        }
    }

    pub fn matrix_at(&self, index: usize) -> Option<Mat4> {
        self.matrices.get(index).copied()
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    /// Number of instances in the batch.
    pub fn count(&self) -> usize {
        self.matrices.len()
    }
}

/// A mesh whose vertex positions are rewritten every frame.
///
/// Vertices form a non-indexed triangle list, so the host can upload
/// `positions` verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceComponent {
    pub material: Material,
    pub vertex_count: usize,
    #[serde(skip)]
    pub positions: Vec<Vec3>,
}

impl SurfaceComponent {
    pub fn new(positions: Vec<Vec3>, material: Material) -> Self {
        Self {
            material,
            vertex_count: positions.len(),
            positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instanced_mesh_starts_at_identity() {
        let batch = InstancedMesh::new(MeshId(3), 4);
        assert_eq!(batch.count(), 4);
        assert_eq!(batch.matrix_at(0), Some(Mat4::IDENTITY));
        assert_eq!(batch.matrix_at(4), None);
    }

    #[test]
    fn set_matrix_at_ignores_out_of_range() {
        let mut batch = InstancedMesh::new(MeshId(0), 2);
        let m = Mat4::from_translation(Vec3::X);
        batch.set_matrix_at(1, m);
        batch.set_matrix_at(7, m);
        assert_eq!(batch.matrix_at(1), Some(m));
        assert_eq!(batch.count(), 2);
    }

    #[test]
    fn surface_skips_positions_when_serialized() {
        let surface = SurfaceComponent::new(vec![Vec3::X; 3], Material::standard());
        let json = serde_json::to_string(&surface).unwrap();
        assert!(json.contains(r#""vertex_count":3"#));
        assert!(!json.contains("positions"));
    }
}
