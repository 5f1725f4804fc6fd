use crate::domain::model::Prediction;
use crate::utils::error::Result;
use ndarray::Array3;

/// Seam to the inference runtime. The engine only needs a model's required
/// input length and one forward pass over a (batch, features, channels)
/// tensor; tests substitute stubs here.
pub trait Model {
    fn input_len(&self) -> usize;

    fn predict(&self, input: Array3<f32>) -> Result<Prediction>;
}
