pub mod engine;
pub mod normalize;
pub mod sample;

pub use crate::domain::model::{FeatureVector, Prediction, PredictionReport};
pub use crate::domain::ports::Model;
pub use crate::utils::error::Result;
