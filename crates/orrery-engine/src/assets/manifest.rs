use serde::{Deserialize, Serialize};

use crate::error::SceneResult;

/// Asset manifest describing every texture and mesh file a scene needs.
/// Handed to the host as JSON so it knows what to fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Textures, indexed by position (`TextureId`).
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
    /// Mesh files. Each may resolve to several mesh parts once loaded.
    #[serde(default)]
    pub meshes: Vec<MeshDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name recipes refer to (e.g., "earth.png").
    pub name: String,
    /// Relative path the host loads it from (e.g., "textures/earth.png").
    pub path: String,
}

/// Describes a mesh file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshDescriptor {
    /// Name recipes refer to (e.g., "Rock1").
    pub name: String,
    /// Relative path to the mesh file (e.g., "rocks/Rock1.obj").
    pub path: String,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a texture served from `textures/<name>`.
    pub fn with_texture(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("textures/{name}");
        self.textures.push(TextureDescriptor { name, path });
        self
    }

    pub fn with_mesh(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.meshes.push(MeshDescriptor {
            name: name.into(),
            path: path.into(),
        });
        self
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Total number of files the host must deliver.
    pub fn asset_count(&self) -> usize {
        self.textures.len() + self.meshes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "textures": [
                { "name": "earth.png", "path": "textures/earth.png" }
            ],
            "meshes": [
                { "name": "Rock1", "path": "rocks/Rock1.obj" },
                { "name": "Rock2", "path": "rocks/Rock2.obj" }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 1);
        assert_eq!(manifest.meshes[1].path, "rocks/Rock2.obj");
        assert_eq!(manifest.asset_count(), 3);
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert_eq!(manifest.asset_count(), 0);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let err = AssetManifest::from_json(r#"{"textures": 3}"#).unwrap_err();
        assert!(matches!(err, crate::error::SceneError::Manifest(_)));
    }

    #[test]
    fn builder_round_trips_through_json() {
        let manifest = AssetManifest::new()
            .with_texture("mars.png")
            .with_mesh("Rock3", "rocks/Rock3.obj");
        assert_eq!(manifest.textures[0].path, "textures/mars.png");
        let back = AssetManifest::from_json(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(back, manifest);
    }
}
