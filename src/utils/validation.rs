use crate::utils::error::{FunnelError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FunnelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FunnelError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FunnelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_text(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FunnelError::InvalidField {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if !re.is_match(value) {
        return Err(FunnelError::InvalidField {
            field: field_name.to_string(),
            reason: format!("Not a valid email address: {}", value),
        });
    }
    Ok(())
}

pub fn validate_min_length(field_name: &str, value: &str, min_chars: usize) -> Result<()> {
    if value.trim().chars().count() < min_chars {
        return Err(FunnelError::InvalidField {
            field: field_name.to_string(),
            reason: format!("Must be at least {} characters", min_chars),
        });
    }
    Ok(())
}

pub fn validate_required_option<'a>(
    field_name: &str,
    value: &'a Option<String>,
) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FunnelError::InvalidField {
            field: field_name.to_string(),
            reason: "Required field is missing".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog_endpoint", "https://example.com").is_ok());
        assert!(validate_url("catalog_endpoint", "http://example.com").is_ok());
        assert!(validate_url("catalog_endpoint", "").is_err());
        assert!(validate_url("catalog_endpoint", "invalid-url").is_err());
        assert!(validate_url("catalog_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "parent@example.com").is_ok());
        assert!(validate_email("email", "parent@example").is_err());
        assert!(validate_email("email", "not-an-email").is_err());
        assert!(validate_email("email", "two@at@signs.com").is_err());
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("goals", "improve grades").is_ok());
        assert!(validate_required_text("goals", "   ").is_err());
    }

    #[test]
    fn test_validate_required_option() {
        let present = Some("123".to_string());
        let blank = Some("  ".to_string());
        assert_eq!(validate_required_option("cvv", &present).unwrap(), "123");
        assert!(validate_required_option("cvv", &blank).is_err());
        assert!(validate_required_option("cvv", &None).is_err());
    }
}
