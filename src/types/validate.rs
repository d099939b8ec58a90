use crate::types::error::AppError;

/// Declarative checks run on a decoded request before any store call.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub(crate) fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub(crate) fn min_chars(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!("{field} must be at least {min} characters")));
    }
    Ok(())
}

pub(crate) fn email(field: &str, value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(format!("{field} is not a valid email address")));
    }
    Ok(())
}
