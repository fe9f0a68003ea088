use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors};

use crate::{entities::option_fields::OptionField, errors::AppError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "must not be empty"));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_calendar_date(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    parse_calendar_date(value)
        .map(|_| ())
        .ok_or_else(|| new_validation_error("invalid_date", "must be a calendar date (YYYY-MM-DD)"))
}

pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn validate_optional_url_field(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(url) = value {
        validate_url(url)?;
    }
    Ok(())
}

/// A required column may be left out of an update but never set to null.
pub fn patch_value<T>(
    value: &OptionField<T>,
    check: impl FnOnce(&T) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match value {
        OptionField::Unchanged => Ok(()),
        OptionField::SetToNull => Err(new_validation_error("null", "must not be null")),
        OptionField::SetToValue(v) => check(v),
    }
}

pub fn validate_required_patch(value: &OptionField<String>) -> Result<(), ValidationError> {
    patch_value(value, |v| not_blank(v))
}

pub fn validate_date_patch(value: &OptionField<String>) -> Result<(), ValidationError> {
    patch_value(value, |v| validate_calendar_date(v))
}

/// Unwraps a required field the validator has already checked.
pub fn present<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(field, format!("{field} is required")))
}

/// Blank optional strings are stored as null.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// Collapses the validator's unordered error map into the first failing
/// field, following the resource's declared field order.
pub fn first_field_error(errors: &ValidationErrors, field_order: &[&'static str]) -> AppError {
    let field_errors = errors.field_errors();

    let first = field_order
        .iter()
        .find_map(|name| field_errors.get(*name).map(|errs| (name.to_string(), *errs)))
        .or_else(|| {
            field_errors
                .iter()
                .next()
                .map(|(name, errs)| (name.to_string(), *errs))
        });

    match first {
        Some((field, errs)) => {
            let reason = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            let message = format!("{field} {reason}");
            AppError::validation(field, message)
        }
        None => AppError::validation("body", "Invalid request body"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fail() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("Go").is_ok());
    }

    #[test]
    fn only_http_urls_are_accepted() {
        assert!(validate_url("https://github.com/someone/repo").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn calendar_dates_must_exist() {
        assert!(validate_calendar_date("2025-01-15").is_ok());
        assert!(validate_calendar_date("2025-02-30").is_err());
        assert!(validate_calendar_date("15/01/2025").is_err());
    }

    #[test]
    fn normalize_optional_drops_blank_strings() {
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(normalize_optional(Some(" x ".into())), Some("x".into()));
        assert_eq!(normalize_optional(None), None);
    }

    #[test]
    fn first_field_error_follows_declared_order() {
        let mut errors = ValidationErrors::new();
        errors.add("tecnologias", new_validation_error("required", "is required"));
        errors.add("descricao", new_validation_error("required", "is required"));

        match first_field_error(&errors, &["titulo", "descricao", "tecnologias"]) {
            AppError::ValidationError(e) => {
                assert_eq!(e.field, "descricao");
                assert_eq!(e.message, "descricao is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
