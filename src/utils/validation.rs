use crate::utils::error::{LawdeskError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(LawdeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid email address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LawdeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(LawdeskError::ConfigValidationError {
            field: field_name.to_string(),
            message: "List must contain at least one entry".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(LawdeskError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate value".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("submission.recipient", "contact@johnsmithlaw.com").is_ok());
        assert!(validate_email("submission.recipient", "contact@localhost").is_err());
        assert!(validate_email("submission.recipient", "").is_err());
        assert!(validate_email("submission.recipient", "a b@c.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("services.title", "Civil Law").is_ok());
        assert!(validate_non_empty_string("services.title", "   ").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("services.id", ["civil-law", "tax-law"]).is_ok());

        let err = validate_unique("services.id", ["civil-law", "civil-law"]).unwrap_err();
        assert!(matches!(
            err,
            LawdeskError::InvalidConfigValueError { ref value, .. } if value == "civil-law"
        ));
    }

    #[test]
    fn test_validate_non_empty_list() {
        let empty: [String; 0] = [];
        assert!(validate_non_empty_list("urgency_rules.keywords", &empty).is_err());
        assert!(validate_non_empty_list("urgency_rules.keywords", &["urgent"]).is_ok());
    }
}
