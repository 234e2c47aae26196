use glam::Vec3;
use serde::Serialize;

use crate::components::material::Rgb;

/// Point sprites with per-point colours (the starfield).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Rgb>,
    /// Point size in world units.
    pub size: f32,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One camera-facing billboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub position: Vec3,
    pub color: Rgb,
    pub opacity: f32,
    pub size: f32,
    /// Roll around the view axis, radians.
    pub rotation: f32,
}

/// A batch of additive billboards (a nebula cloud).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteCloud {
    pub sprites: Vec<Sprite>,
}
