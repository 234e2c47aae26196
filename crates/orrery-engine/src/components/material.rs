use serde::Serialize;

use crate::api::types::TextureId;

/// Linear RGB triple, each channel in 0.0..=1.0.
pub type Rgb = [f32; 3];

/// Convert a packed `0xRRGGBB` value into an RGB triple.
pub fn hex_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Which faces a material draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Surface material, described for the host renderer to construct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Lit PBR-style material with optional colour map.
    Standard {
        map: Option<TextureId>,
        color: Rgb,
        emissive: Rgb,
    },
    /// Unlit flat colour.
    Basic { color: Rgb, side: Side },
    /// View-dependent rim glow: `rim` at grazing angles, `facing` head-on.
    Fresnel { rim: Rgb, facing: Rgb },
}

impl Material {
    pub fn standard() -> Self {
        Material::Standard {
            map: None,
            color: [1.0, 1.0, 1.0],
            emissive: [0.0, 0.0, 0.0],
        }
    }

    pub fn textured(map: TextureId) -> Self {
        Material::Standard {
            map: Some(map),
            color: [1.0, 1.0, 1.0],
            emissive: [0.0, 0.0, 0.0],
        }
    }

    pub fn emissive(hex: u32) -> Self {
        Material::Standard {
            map: None,
            color: [1.0, 1.0, 1.0],
            emissive: hex_rgb(hex),
        }
    }

    pub fn basic(hex: u32, side: Side) -> Self {
        Material::Basic {
            color: hex_rgb(hex),
            side,
        }
    }

    pub fn fresnel(rim_hex: u32, facing_hex: u32) -> Self {
        Material::Fresnel {
            rim: hex_rgb(rim_hex),
            facing: hex_rgb(facing_hex),
        }
    }
}
