//! "All assets ready" signal gating scene assembly.
//!
//! The host loads manifest entries asynchronously and reports each one as
//! it lands. The gate hands out the finished [`AssetRegistry`] exactly once,
//! after the last pending entry arrives. If something never arrives, the
//! gate never opens and the scene is never assembled.

use std::collections::HashSet;

use crate::api::types::MeshId;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::AssetRegistry;
use crate::error::{SceneError, SceneResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Pending {
    Texture(String),
    Mesh(String),
}

/// Tracks outstanding assets for one manifest.
#[derive(Debug)]
pub struct AssetGate {
    registry: Option<AssetRegistry>,
    pending: HashSet<Pending>,
    next_mesh_id: u32,
}

impl AssetGate {
    pub fn new(manifest: &AssetManifest) -> Self {
        let pending = manifest
            .textures
            .iter()
            .map(|t| Pending::Texture(t.name.clone()))
            .chain(manifest.meshes.iter().map(|m| Pending::Mesh(m.name.clone())))
            .collect();
        Self {
            registry: Some(AssetRegistry::from_manifest(manifest)),
            pending,
            next_mesh_id: 0,
        }
    }

    /// Report a texture as resident. Repeated reports are harmless.
    pub fn texture_loaded(&mut self, name: &str) -> SceneResult<()> {
        let known = self.registry.as_ref().is_some_and(|r| r.has_texture(name));
        if !known {
            return Err(SceneError::UnknownTexture(name.to_string()));
        }
        if self.pending.remove(&Pending::Texture(name.to_string())) {
            log::debug!("asset gate: texture {name} ready ({} pending)", self.pending.len());
        }
        Ok(())
    }

    /// Report a mesh file as loaded with `parts` mesh parts.
    ///
    /// Returns the ids allocated to those parts; the host keeps the mapping
    /// from id to its loaded geometry and material.
    pub fn mesh_loaded(&mut self, name: &str, parts: u32) -> SceneResult<Vec<MeshId>> {
        let registry = self
            .registry
            .as_mut()
            .filter(|r| r.has_mesh(name))
            .ok_or_else(|| SceneError::UnknownMesh(name.to_string()))?;

        let first = self.next_mesh_id;
        let end = first.checked_add(parts).ok_or(SceneError::InvalidParameter {
            name: "parts",
            value: parts as f32,
        })?;
        let ids: Vec<MeshId> = (first..end).map(MeshId).collect();
        registry.set_mesh_parts(name, ids.clone())?;
        self.next_mesh_id = end;

        if self.pending.remove(&Pending::Mesh(name.to_string())) {
            log::debug!(
                "asset gate: mesh {name} ready with {parts} parts ({} pending)",
                self.pending.len()
            );
        }
        Ok(ids)
    }

    /// Number of manifest entries still outstanding.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether every asset has arrived and the registry has not been taken yet.
    pub fn is_ready(&self) -> bool {
        self.pending.is_empty() && self.registry.is_some()
    }

    /// Take the completed registry. Yields `Some` once, when nothing is pending.
    pub fn take_ready(&mut self) -> Option<AssetRegistry> {
        if self.pending.is_empty() {
            self.registry.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> AssetManifest {
        AssetManifest::new()
            .with_texture("earth.png")
            .with_mesh("Rock1", "rocks/Rock1.obj")
            .with_mesh("Rock2", "rocks/Rock2.obj")
    }

    #[test]
    fn opens_only_after_last_asset() {
        let mut gate = AssetGate::new(&manifest());
        assert_eq!(gate.pending(), 3);

        gate.mesh_loaded("Rock2", 1).unwrap();
        assert!(gate.take_ready().is_none());
        gate.texture_loaded("earth.png").unwrap();
        assert!(gate.take_ready().is_none());
        gate.mesh_loaded("Rock1", 2).unwrap();

        assert!(gate.is_ready());
        let registry = gate.take_ready().expect("gate should open");
        assert_eq!(registry.all_mesh_parts().len(), 3);
    }

    #[test]
    fn yields_exactly_once() {
        let mut gate = AssetGate::new(&AssetManifest::new());
        assert!(gate.take_ready().is_some());
        assert!(gate.take_ready().is_none());
        assert!(!gate.is_ready());
    }

    #[test]
    fn mesh_ids_are_consecutive_across_files() {
        let mut gate = AssetGate::new(&manifest());
        assert_eq!(gate.mesh_loaded("Rock1", 2).unwrap(), vec![MeshId(0), MeshId(1)]);
        assert_eq!(gate.mesh_loaded("Rock2", 1).unwrap(), vec![MeshId(2)]);
    }

    #[test]
    fn unknown_assets_are_rejected() {
        let mut gate = AssetGate::new(&manifest());
        assert!(gate.texture_loaded("venus.png").is_err());
        assert!(gate.mesh_loaded("Rock9", 1).is_err());
        assert_eq!(gate.pending(), 3);
    }

    #[test]
    fn huge_part_counts_are_rejected() {
        let mut gate = AssetGate::new(&manifest());
        gate.mesh_loaded("Rock1", 2).unwrap();
        assert!(matches!(
            gate.mesh_loaded("Rock2", u32::MAX),
            Err(SceneError::InvalidParameter { name: "parts", .. })
        ));
        assert_eq!(gate.mesh_loaded("Rock2", 1).unwrap(), vec![MeshId(2)]);
    }

    #[test]
    fn never_opens_while_something_is_missing() {
        let mut gate = AssetGate::new(&manifest());
        gate.texture_loaded("earth.png").unwrap();
        gate.texture_loaded("earth.png").unwrap();
        gate.mesh_loaded("Rock1", 1).unwrap();
        assert!(!gate.is_ready());
        assert!(gate.take_ready().is_none());
    }
}
