use crate::utils::error::{InferError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(InferError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(InferError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| InferError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("model", "model.onnx").is_ok());
        assert!(validate_path("model", "").is_err());
        assert!(validate_path("model", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["model.onnx".to_string()];
        assert!(validate_file_extensions("model", &files, &["onnx"]).is_ok());

        let invalid_files = vec!["model.bin".to_string()];
        assert!(validate_file_extensions("model", &invalid_files, &["onnx"]).is_err());

        let no_extension = vec!["model".to_string()];
        assert!(validate_file_extensions("model", &no_extension, &["onnx"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(vec![1.0, 2.0]);
        assert!(validate_required_field("mean", &present).is_ok());

        let missing: Option<Vec<f64>> = None;
        let err = validate_required_field("mean", &missing).unwrap_err();
        assert!(err.to_string().contains("mean"));
    }
}
