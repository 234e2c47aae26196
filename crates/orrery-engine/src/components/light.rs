//! Scene lights.
//!
//! Lights are ordinary drawables: a light parented to the sun travels with
//! it, and the host reads its world position from the transform buffer.

use serde::Serialize;

use crate::components::material::{hex_rgb, Rgb};

/// Light description, serialized for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    /// Omnidirectional light at the node's world position.
    Point {
        color: Rgb,
        intensity: f32,
        /// Cutoff distance; 0.0 means unlimited.
        distance: f32,
        decay: f32,
    },
    /// Parallel light shining from the node's position towards the origin.
    Directional { color: Rgb, intensity: f32 },
}

impl Light {
    /// Point light with unlimited range and physical (inverse-square) decay.
    pub fn point(hex: u32, intensity: f32) -> Self {
        Light::Point {
            color: hex_rgb(hex),
            intensity,
            distance: 0.0,
            decay: 2.0,
        }
    }

    pub fn directional(hex: u32, intensity: f32) -> Self {
        Light::Directional {
            color: hex_rgb(hex),
            intensity,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point { intensity, .. } | Light::Directional { intensity, .. } => *intensity,
        }
    }
}
