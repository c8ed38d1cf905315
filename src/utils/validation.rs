use crate::domain::model::Feature;
use crate::utils::error::{DiabetesError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(DiabetesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(DiabetesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(DiabetesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(DiabetesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(DiabetesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiabetesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks a raw measurement the way the form widgets constrain it: finite,
/// non-negative, and whole for integer-stepped fields.
pub fn validate_measurement(feature: Feature, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DiabetesError::invalid_input(
            feature.name(),
            value,
            "must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(DiabetesError::invalid_input(
            feature.name(),
            value,
            "cannot be negative",
        ));
    }
    if feature.is_integer() && value.fract() != 0.0 {
        return Err(DiabetesError::invalid_input(
            feature.name(),
            value,
            "must be a whole number",
        ));
    }
    if feature.is_integer() && value > f64::from(u32::MAX) {
        return Err(DiabetesError::invalid_input(
            feature.name(),
            value,
            "is out of range",
        ));
    }
    Ok(())
}
