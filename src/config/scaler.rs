use crate::utils::error::{InferError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-feature standardization parameters fitted offline alongside the model.
/// Loaded fresh from disk on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Raw on-disk form; both fields must be present but serde alone cannot tell
/// us which one is missing, so they land as options first.
#[derive(Debug, Deserialize)]
struct RawScaler {
    mean: Option<Vec<f64>>,
    scale: Option<Vec<f64>>,
}

impl Scaler {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| InferError::ConfigError {
            message: format!("cannot read scaler file {}: {}", path.display(), e),
        })?;

        let parsed: RawScaler =
            serde_json::from_str(&raw).map_err(|e| InferError::ConfigError {
                message: format!("scaler file {} is malformed: {}", path.display(), e),
            })?;

        let mean = validate_required_field("mean", &parsed.mean)?.clone();
        let scale = validate_required_field("scale", &parsed.scale)?.clone();

        let scaler = Scaler { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Number of features this scaler describes.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Divisor actually applied for feature `i`; zero entries fall back to 1
    /// so standardization never divides by zero.
    pub fn effective_scale(&self, i: usize) -> f64 {
        let s = self.scale[i];
        if s == 0.0 {
            1.0
        } else {
            s
        }
    }
}

impl Validate for Scaler {
    fn validate(&self) -> Result<()> {
        if self.mean.len() != self.scale.len() {
            return Err(InferError::ConfigError {
                message: format!(
                    "scaler mean/scale length mismatch: {} vs {}",
                    self.mean.len(),
                    self.scale.len()
                ),
            });
        }
        Ok(())
    }
}
