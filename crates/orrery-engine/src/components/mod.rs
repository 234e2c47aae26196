pub mod backdrop;
pub mod light;
pub mod line;
pub mod material;
pub mod mesh;

use serde::Serialize;

pub use backdrop::{PointCloud, Sprite, SpriteCloud};
pub use light::Light;
pub use line::{LineComponent, LineMaterial};
pub use material::{Material, Rgb, Side};
pub use mesh::{Geometry, InstancedMesh, MeshComponent, SurfaceComponent};

/// What a node puts on screen. Nodes without a drawable are pure groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    Mesh(MeshComponent),
    Instanced(InstancedMesh),
    Surface(SurfaceComponent),
    Line(LineComponent),
    Points(PointCloud),
    Sprites(SpriteCloud),
    Light(Light),
}

impl Drawable {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Mesh(_) => "mesh",
            Drawable::Instanced(_) => "instanced",
            Drawable::Surface(_) => "surface",
            Drawable::Line(_) => "line",
            Drawable::Points(_) => "points",
            Drawable::Sprites(_) => "sprites",
            Drawable::Light(_) => "light",
        }
    }

    pub fn as_surface(&self) -> Option<&SurfaceComponent> {
        match self {
            Drawable::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_surface_mut(&mut self) -> Option<&mut SurfaceComponent> {
        match self {
            Drawable::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_instanced(&self) -> Option<&InstancedMesh> {
        match self {
            Drawable::Instanced(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineComponent> {
        match self {
            Drawable::Line(l) => Some(l),
            _ => None,
        }
    }
}

impl From<MeshComponent> for Drawable {
    fn from(mesh: MeshComponent) -> Self {
        Drawable::Mesh(mesh)
    }
}

impl From<InstancedMesh> for Drawable {
    fn from(batch: InstancedMesh) -> Self {
        Drawable::Instanced(batch)
    }
}

impl From<SurfaceComponent> for Drawable {
    fn from(surface: SurfaceComponent) -> Self {
        Drawable::Surface(surface)
    }
}

impl From<LineComponent> for Drawable {
    fn from(line: LineComponent) -> Self {
        Drawable::Line(line)
    }
}

impl From<PointCloud> for Drawable {
    fn from(points: PointCloud) -> Self {
        Drawable::Points(points)
    }
}

impl From<SpriteCloud> for Drawable {
    fn from(sprites: SpriteCloud) -> Self {
        Drawable::Sprites(sprites)
    }
}

impl From<Light> for Drawable {
    fn from(light: Light) -> Self {
        Drawable::Light(light)
    }
}
