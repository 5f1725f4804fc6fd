use crate::utils::error::{InferError, Result};
use ndarray::{ArrayD, ArrayViewD};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Number of measurements one model input row carries.
pub const FEATURE_COUNT: usize = 15;

/// One ordered row of raw (unscaled) measurements.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Parse a comma-separated argument such as `0.12,0.34,0.56`.
    /// Every token must be numeric; whitespace around tokens is ignored.
    pub fn parse_csv(raw: &str) -> Result<Self> {
        let mut values = Vec::new();
        for token in raw.split(',') {
            let trimmed = token.trim();
            let value: f64 = trimmed
                .parse()
                .map_err(|_| InferError::InputFormatError {
                    token: trimmed.to_string(),
                })?;
            values.push(value);
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// A model run yields either one output tensor or an ordered set of them,
/// depending on how many outputs the loaded graph declares.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Single(ArrayD<f32>),
    Multiple(Vec<ArrayD<f32>>),
}

impl Prediction {
    /// Render as nested numeric arrays, one level per tensor axis.
    pub fn to_json(&self) -> Value {
        match self {
            Prediction::Single(tensor) => tensor_to_json(tensor),
            Prediction::Multiple(tensors) => {
                Value::Array(tensors.iter().map(tensor_to_json).collect())
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

fn tensor_to_json(tensor: &ArrayD<f32>) -> Value {
    fn view_to_json(view: ArrayViewD<'_, f32>) -> Value {
        if view.ndim() == 0 {
            // Non-finite values have no JSON number representation and render as null.
            return Value::from(view.first().copied().unwrap_or(f32::NAN) as f64);
        }
        Value::Array(view.outer_iter().map(view_to_json).collect())
    }
    view_to_json(tensor.view())
}

/// The resolved input together with what the model said about it.
#[derive(Debug, Clone)]
pub struct PredictionReport {
    pub input: FeatureVector,
    pub prediction: Prediction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn parse_csv_accepts_fifteen_numbers() {
        let raw = "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15";
        let features = FeatureVector::parse_csv(raw).unwrap();
        assert_eq!(features.len(), 15);
        assert_eq!(features.values()[0], 1.0);
        assert_eq!(features.values()[14], 15.0);
    }

    #[test]
    fn parse_csv_trims_whitespace() {
        let features = FeatureVector::parse_csv(" 1.5 , -2 ,3e2").unwrap();
        assert_eq!(features.values(), &[1.5, -2.0, 300.0]);
    }

    #[test]
    fn parse_csv_rejects_non_numeric_tokens() {
        let err = FeatureVector::parse_csv("1,abc,3").unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::InferError::InputFormatError { .. }
        ));
    }

    #[test]
    fn parse_csv_rejects_empty_tokens() {
        assert!(FeatureVector::parse_csv("1,,3").is_err());
    }

    #[test]
    fn display_renders_a_bracketed_list() {
        let features = FeatureVector::new(vec![1.0, 2.5]);
        assert_eq!(features.to_string(), "[1, 2.5]");
    }

    #[test]
    fn single_prediction_renders_nested_arrays() {
        let tensor = arr2(&[[0.5_f32, 1.5]]).into_dyn();
        let rendered = Prediction::Single(tensor).to_json();
        assert_eq!(rendered, serde_json::json!([[0.5, 1.5]]));
    }

    #[test]
    fn multiple_predictions_render_as_an_outer_array() {
        let a = arr2(&[[1.0_f32]]).into_dyn();
        let b = arr2(&[[2.0_f32, 3.0]]).into_dyn();
        let rendered = Prediction::Multiple(vec![a, b]).to_json();
        assert_eq!(rendered, serde_json::json!([[[1.0]], [[2.0, 3.0]]]));
    }
}
