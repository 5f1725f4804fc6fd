use crate::config::scaler::Scaler;
use crate::utils::error::{InferError, Result};

/// Standardize a raw feature row against the fitted scaler. Pure; the input
/// is left untouched and the scaled copy comes back as the f32 values the
/// model consumes. Lengths must agree exactly.
pub fn normalize(values: &[f64], scaler: &Scaler) -> Result<Vec<f32>> {
    if values.len() != scaler.len() {
        return Err(InferError::ShapeMismatchError {
            expected: scaler.len(),
            actual: values.len(),
        });
    }

    Ok(values
        .iter()
        .enumerate()
        .map(|(i, v)| ((v - scaler.mean[i]) / scaler.effective_scale(i)) as f32)
        .collect())
}
