use crate::domain::model::{Prediction, FEATURE_COUNT};
use crate::domain::ports::Model;
use crate::utils::error::{InferError, Result};
use ndarray::{Array3, Axis};
use ort::inputs;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::ValueType;
use std::path::Path;

/// A pretrained network behind the ONNX runtime. The graph is treated as a
/// black box: one fixed-shape input in, one or more output tensors out.
/// Loaded fresh per invocation; nothing is cached across runs.
pub struct OnnxModel {
    session: Session,
    input_len: usize,
}

impl OnnxModel {
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading model from {}", path.display());
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?
            .commit_from_file(path)?;

        let input_len = Self::declared_input_len(&session).unwrap_or(FEATURE_COUNT);
        Ok(Self { session, input_len })
    }

    /// Feature count from the graph's input metadata. The input is laid out
    /// as (batch, features, channels); a dynamic feature axis yields None.
    fn declared_input_len(session: &Session) -> Option<usize> {
        let input = session.inputs.first()?;
        match &input.input_type {
            ValueType::Tensor { dimensions, .. } => dimensions
                .get(1)
                .and_then(|d| usize::try_from(*d).ok())
                .filter(|d| *d > 0),
            _ => None,
        }
    }
}

impl Model for OnnxModel {
    fn input_len(&self) -> usize {
        self.input_len
    }

    fn predict(&self, input: Array3<f32>) -> Result<Prediction> {
        let features = input.len_of(Axis(1));
        if features != self.input_len {
            return Err(InferError::ShapeMismatchError {
                expected: self.input_len,
                actual: features,
            });
        }

        // Session metadata keeps the graph's declared output order; the run
        // result is indexed by those names so Multiple stays ordered.
        let output_names: Vec<String> = self
            .session
            .outputs
            .iter()
            .map(|output| output.name.clone())
            .collect();

        let outputs = self.session.run(inputs![input]?)?;

        let mut tensors = Vec::with_capacity(output_names.len());
        for name in &output_names {
            let tensor = outputs[name.as_str()].try_extract_tensor::<f32>()?;
            tensors.push(tensor.to_owned());
        }
        // The run's output values drop here; only the owned copies survive.

        if tensors.len() == 1 {
            Ok(Prediction::Single(tensors.remove(0)))
        } else {
            Ok(Prediction::Multiple(tensors))
        }
    }
}
