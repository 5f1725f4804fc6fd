use clap::Parser;
use small_infer::utils::{logger, validation::Validate};
use small_infer::{
    sample_near_mean, CliConfig, FeatureVector, InferError, InferenceEngine, OnnxModel, Result,
    Scaler, FEATURE_COUNT,
};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-infer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Inference failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        match &e {
            InferError::FeatureCountError { expected, actual } => {
                eprintln!(
                    "Input length is {} but model requires {} features.",
                    actual, expected
                );
            }
            _ => {
                eprintln!("Error: {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            }
        }

        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    // The scaler is needed up front either way: it parameterizes both
    // normalization and the no-argument sample fallback.
    let scaler = Scaler::load(Path::new(&config.scaler))?;

    let features = match &config.features {
        Some(csv) => FeatureVector::parse_csv(csv)?,
        None => {
            println!("No input provided, sampling near the scaler mean.");
            sample_near_mean(&scaler)
        }
    };

    // Checked before the model is even loaded, with its own exit code.
    if features.len() != FEATURE_COUNT {
        return Err(InferError::FeatureCountError {
            expected: FEATURE_COUNT,
            actual: features.len(),
        });
    }

    let model = OnnxModel::load(Path::new(&config.model))?;
    let engine = InferenceEngine::new(model, scaler);
    let report = engine.run(&features)?;

    println!("Raw input: {}", report.input);
    println!("Prediction result: {}", report.prediction.to_json_pretty()?);

    tracing::info!("✅ Inference completed successfully");
    Ok(())
}
