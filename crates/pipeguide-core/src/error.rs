//! Page error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the page can report. None of it is fatal: the page always
/// renders, falling back to defaults or dropping the failed action.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse page configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open {url}: {message}")]
    Navigation { url: String, message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn invalid_url(field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            field,
            reason: reason.to_string(),
        }
    }

    pub fn navigation(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Navigation {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Check if this is a configuration problem, which falls back to defaults
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::ConfigParse(_) | Error::ConfigInvalid { .. } | Error::InvalidUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config_invalid("breakpoint_px must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: breakpoint_px must be positive"
        );

        let err = Error::navigation("https://example.com", "popup blocked");
        assert_eq!(
            err.to_string(),
            "Failed to open https://example.com: popup blocked"
        );
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.is_config());
    }

    #[test]
    fn test_invalid_url_error() {
        let err = Error::invalid_url("links.android", "relative URL without a base");
        assert!(err.to_string().contains("links.android"));
        assert!(err.is_config());
    }

    #[test]
    fn test_navigation_is_not_config() {
        assert!(Error::config_invalid("x").is_config());
        assert!(!Error::navigation("u", "m").is_config());
    }
}
