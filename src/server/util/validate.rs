//! Request field validation shared by the services.
//!
//! Each helper returns `AppError::BadRequest` naming the offending field.

use crate::server::error::AppError;

/// Fails when `value` is empty or only whitespace.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{} is required", field)));
    }
    Ok(())
}

/// Fails when `value` is longer than `max` characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::bad_request(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Fails unless `value` is a `#RRGGBB` hex color.
pub fn hex_color(field: &str, value: &str) -> Result<(), AppError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(AppError::bad_request(format!(
            "{} must be a hex color like #5865F2",
            field
        )));
    }
    Ok(())
}

/// Fails when `value` is negative.
pub fn non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::bad_request(format!("{} must not be negative", field)));
    }
    Ok(())
}

/// Fails unless `name` is 1-32 characters of lowercase letters, digits, `-` or `_`.
pub fn command_name(name: &str) -> Result<(), AppError> {
    let valid = !name.is_empty()
        && name.len() <= 32
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

    if !valid {
        return Err(AppError::bad_request(
            "name must be 1-32 characters of a-z, 0-9, - or _",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_colors() {
        assert!(hex_color("color", "#5865F2").is_ok());
        assert!(hex_color("color", "#abcdef").is_ok());
    }

    #[test]
    fn rejects_malformed_colors() {
        for value in ["5865F2", "#5865F", "#5865F2A", "#GGGGGG", ""] {
            assert!(hex_color("color", value).is_err(), "{value}");
        }
    }

    #[test]
    fn validates_command_names() {
        assert!(command_name("rules").is_ok());
        assert!(command_name("faq_2-x").is_ok());
        assert!(command_name("").is_err());
        assert!(command_name("Rules").is_err());
        assert!(command_name("has space").is_err());
        assert!(command_name(&"a".repeat(33)).is_err());
    }

    #[test]
    fn rejects_blank_required_fields() {
        assert!(require_non_empty("email", "  ").is_err());
        assert!(require_non_empty("email", "a@b.c").is_ok());
    }

    #[test]
    fn bounds_numbers() {
        assert!(non_negative("cooldown", 0).is_ok());
        assert!(non_negative("cooldown", -1).is_err());
    }
}
