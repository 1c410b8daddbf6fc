use crate::utils::error::{Result, ScrapeError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> ScrapeError {
    ScrapeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// File extensions are stored with their leading dot, e.g. `.jpg`.
pub fn validate_extension(field_name: &str, ext: &str) -> Result<()> {
    if ext.len() < 2 || !ext.starts_with('.') {
        return Err(invalid(
            field_name,
            ext,
            "Extension must start with '.' followed by at least one character",
        ));
    }
    if ext.contains(['/', '\\', '\0']) {
        return Err(invalid(field_name, ext, "Extension contains path separators"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("set_urls", "https://pkmncards.com/set/base-set/").is_ok());
        assert!(validate_url("set_urls", "http://example.com").is_ok());
        assert!(validate_url("set_urls", "").is_err());
        assert!(validate_url("set_urls", "invalid-url").is_err());
        assert!(validate_url("set_urls", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "database/pkmn-images").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_secs", 20, 1).is_ok());
        assert!(validate_positive_number("timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("default_extension", ".jpg").is_ok());
        assert!(validate_extension("default_extension", "jpg").is_err());
        assert!(validate_extension("default_extension", ".").is_err());
        assert!(validate_extension("default_extension", "./x").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user_agent", "cardflow/1.0").is_ok());
        assert!(validate_non_empty_string("user_agent", "   ").is_err());
    }
}
