use thiserror::Error;

/// Errors raised while building a scene.
///
/// Generators reject bad parameters up front instead of producing degenerate
/// geometry, and assembly propagates the first failure with `?` so a scene is
/// either built completely or not at all.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A generator parameter was negative, zero where a positive value is
    /// required, or not finite.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// A recipe referenced a texture the asset registry does not hold.
    #[error("unknown texture `{0}`")]
    UnknownTexture(String),

    /// A recipe referenced a mesh the asset registry does not hold.
    #[error("unknown mesh `{0}`")]
    UnknownMesh(String),

    /// The asset manifest could not be parsed.
    #[error("malformed asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Require `value > 0` (and finite).
pub fn require_positive(name: &'static str, value: f32) -> SceneResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidParameter { name, value })
    }
}

/// Require `value >= 0` (and finite).
pub fn require_non_negative(name: &'static str, value: f32) -> SceneResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(require_positive("size", 0.0).is_err());
        assert!(require_positive("size", f32::NAN).is_err());
        assert_eq!(require_positive("size", 0.5).unwrap(), 0.5);
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(require_non_negative("distance", 0.0).unwrap(), 0.0);
        assert!(require_non_negative("distance", -0.1).is_err());
        assert!(require_non_negative("distance", f32::INFINITY).is_err());
    }

    #[test]
    fn error_message_names_parameter() {
        let err = require_positive("size", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid parameter `size`: -1");
    }
}
