use crate::config::scaler::Scaler;
use crate::core::normalize::normalize;
use crate::domain::model::{FeatureVector, PredictionReport};
use crate::domain::ports::Model;
use crate::utils::error::Result;
use ndarray::{Array1, Axis};

/// Drives one inference run: standardize the raw row, reshape it into the
/// (1 batch, N features, 1 channel) tensor the network expects, and delegate
/// the forward pass to the model port.
pub struct InferenceEngine<M: Model> {
    model: M,
    scaler: Scaler,
}

impl<M: Model> InferenceEngine<M> {
    pub fn new(model: M, scaler: Scaler) -> Self {
        Self { model, scaler }
    }

    pub fn run(&self, features: &FeatureVector) -> Result<PredictionReport> {
        tracing::debug!("Normalizing {} features", features.len());
        let scaled = normalize(features.values(), &self.scaler)?;

        let input = Array1::from(scaled)
            .insert_axis(Axis(0))
            .insert_axis(Axis(2));

        tracing::debug!("Running forward pass");
        let prediction = self.model.predict(input)?;

        Ok(PredictionReport {
            input: features.clone(),
            prediction,
        })
    }
}
