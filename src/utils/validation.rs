use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(AppError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(AppError::ConfigError {
            message: format!("{}: '{}' must be a bare file name", field_name, name),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AppError::ConfigError {
            message: format!("{}: value must be at least {}, got {}", field_name, min_value, value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::ConfigError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Presence check for visitor input: `None` and `""` are missing, anything else
/// (whitespace included) is kept verbatim.
pub fn validate_required_field<'a>(
    field: &'static str,
    message: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str> {
    match value.as_deref() {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::MissingField { field, message }),
    }
}

/// Runs every check and folds the failures into a single `ValidationError`.
pub fn collect_errors<I>(checks: I) -> Result<()>
where
    I: IntoIterator<Item = Result<()>>,
{
    let errors: Vec<String> = checks
        .into_iter()
        .filter_map(|check| check.err())
        .map(|err| err.user_friendly_message())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError { errors })
    }
}
