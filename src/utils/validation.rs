use crate::utils::error::{AccessorGenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AccessorGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AccessorGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AccessorGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Declaration affixes are spliced into the header pattern, so only word
/// characters are accepted. An empty affix is allowed.
pub fn validate_identifier_fragment(field_name: &str, value: &str) -> Result<()> {
    if let Some(bad) = value.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Err(AccessorGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unexpected character '{}', only word characters are allowed", bad),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AccessorGenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("file", "src/Foo.ts").is_ok());
        assert!(validate_path("file", "").is_err());
        assert!(validate_path("file", "a\0b").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("line", 1, 1).is_ok());
        assert!(validate_positive_number("line", 0, 1).is_err());
    }

    #[test]
    fn test_validate_identifier_fragment() {
        assert!(validate_identifier_fragment("declaration.prefix", "I").is_ok());
        assert!(validate_identifier_fragment("declaration.suffix", "").is_ok());
        assert!(validate_identifier_fragment("declaration.suffix", "Data_2").is_ok());

        let err = validate_identifier_fragment("declaration.suffix", "Data.*").unwrap_err();
        assert!(err.to_string().contains("declaration.suffix"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("render.indent", 2, 0, 8).is_ok());
        assert!(validate_range("render.indent", 9, 0, 8).is_err());
    }
}
