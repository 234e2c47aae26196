use std::collections::HashMap;

use crate::api::types::{MeshId, TextureId};
use crate::assets::manifest::AssetManifest;
use crate::error::{SceneError, SceneResult};

/// Registry of named textures and loaded mesh parts, built from an AssetManifest.
/// Provides name-based lookup for recipes during assembly.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    textures: HashMap<String, TextureId>,
    meshes: HashMap<String, Vec<MeshId>>,
    /// Mesh names in manifest order, so aggregate lookups are deterministic.
    mesh_order: Vec<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every manifest texture; meshes start with no parts.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let textures = manifest
            .textures
            .iter()
            .enumerate()
            .map(|(i, desc)| (desc.name.clone(), TextureId(i as u32)))
            .collect();
        let meshes = manifest
            .meshes
            .iter()
            .map(|desc| (desc.name.clone(), Vec::new()))
            .collect();
        let mesh_order = manifest.meshes.iter().map(|desc| desc.name.clone()).collect();
        Self {
            textures,
            meshes,
            mesh_order,
        }
    }

    /// Record the parts a mesh file resolved to.
    pub fn set_mesh_parts(&mut self, name: &str, parts: Vec<MeshId>) -> SceneResult<()> {
        match self.meshes.get_mut(name) {
            Some(slot) => {
                *slot = parts;
                Ok(())
            }
            None => Err(SceneError::UnknownMesh(name.to_string())),
        }
    }

    /// Look up a texture by name.
    pub fn texture(&self, name: &str) -> SceneResult<TextureId> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownTexture(name.to_string()))
    }

    /// Parts of one mesh file.
    pub fn mesh_parts(&self, name: &str) -> SceneResult<&[MeshId]> {
        self.meshes
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SceneError::UnknownMesh(name.to_string()))
    }

    /// Every loaded mesh part, grouped by file in manifest order.
    pub fn all_mesh_parts(&self) -> Vec<MeshId> {
        self.mesh_order
            .iter()
            .filter_map(|name| self.meshes.get(name))
            .flatten()
            .copied()
            .collect()
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn has_mesh(&self, name: &str) -> bool {
        self.meshes.contains_key(name)
    }
}
