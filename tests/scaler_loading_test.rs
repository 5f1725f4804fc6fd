use small_infer::{InferError, Scaler};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_scaler(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("scaler.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_a_well_formed_scaler() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mean: Vec<f64> = (0..15).map(|i| i as f64).collect();
    let scale = vec![2.0; 15];
    let path = write_scaler(
        &dir,
        &serde_json::json!({ "mean": mean, "scale": scale }).to_string(),
    );

    let scaler = Scaler::load(&path)?;
    assert_eq!(scaler.len(), 15);
    assert_eq!(scaler.mean[3], 3.0);
    assert_eq!(scaler.effective_scale(0), 2.0);
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Scaler::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, InferError::ConfigError { .. }));
    assert_eq!(err.severity().exit_code(), 1);
}

#[test]
fn malformed_json_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_scaler(&dir, "{ not json");
    let err = Scaler::load(&path).unwrap_err();
    assert!(matches!(err, InferError::ConfigError { .. }));
}

#[test]
fn missing_mean_field_is_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write_scaler(&dir, r#"{ "scale": [1.0, 1.0] }"#);
    let err = Scaler::load(&path).unwrap_err();
    match err {
        InferError::MissingConfigError { field } => assert_eq!(field, "mean"),
        other => panic!("expected a missing-field error, got {:?}", other),
    }
}

#[test]
fn missing_scale_field_is_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write_scaler(&dir, r#"{ "mean": [1.0, 1.0] }"#);
    let err = Scaler::load(&path).unwrap_err();
    match err {
        InferError::MissingConfigError { field } => assert_eq!(field, "scale"),
        other => panic!("expected a missing-field error, got {:?}", other),
    }
}

#[test]
fn unequal_mean_and_scale_lengths_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_scaler(&dir, r#"{ "mean": [0.0, 0.0, 0.0], "scale": [1.0] }"#);
    let err = Scaler::load(&path).unwrap_err();
    assert!(matches!(err, InferError::ConfigError { .. }));
}

#[test]
fn zero_scale_entries_survive_loading_with_a_unit_fallback() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_scaler(&dir, r#"{ "mean": [1.0, 2.0], "scale": [0.0, 4.0] }"#);

    let scaler = Scaler::load(&path)?;
    assert_eq!(scaler.scale[0], 0.0);
    assert_eq!(scaler.effective_scale(0), 1.0);
    assert_eq!(scaler.effective_scale(1), 4.0);
    Ok(())
}
