pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::onnx::OnnxModel;
pub use config::scaler::Scaler;
pub use crate::core::engine::InferenceEngine;
pub use crate::core::normalize::normalize;
pub use crate::core::sample::sample_near_mean;
pub use domain::model::{FeatureVector, Prediction, PredictionReport, FEATURE_COUNT};
pub use domain::ports::Model;
pub use utils::error::{InferError, Result};
