use serde::{Deserialize, Serialize};

/// Handle to a texture resolved by the asset pipeline.
/// Index into the manifest's texture list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Handle to one loaded mesh part (geometry + material) owned by the host.
/// A single mesh file may resolve to several parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeshId(pub u32);
