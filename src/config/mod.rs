pub mod scaler;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-infer")]
#[command(about = "Run one forward pass of a pretrained model over a scaled feature vector")]
pub struct CliConfig {
    /// Comma-separated feature values; omit to sample near the scaler mean
    #[arg(allow_hyphen_values = true)]
    pub features: Option<String>,

    #[arg(long, default_value = "model.onnx")]
    pub model: String,

    #[arg(long, default_value = "scaler.json")]
    pub scaler: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("model", &self.model)?;
        validate_path("scaler", &self.scaler)?;
        validate_file_extensions("model", &[self.model.clone()], &["onnx"])?;
        validate_file_extensions("scaler", &[self.scaler.clone()], &["json"])?;
        Ok(())
    }
}
