use std::{env, time::Duration};

use thiserror::Error;

/// Default lifetime of upload URLs in seconds.
const DEFAULT_SIGNED_URL_EXPIRATION: u64 = 300;

/// Longest lifetime S3 accepts for a SigV4 presigned URL (one week).
pub const MAX_SIGNED_URL_EXPIRATION: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "SIGNED_URL_EXPIRATION must be between 1 and {MAX_SIGNED_URL_EXPIRATION} seconds, got {0}"
    )]
    ExpirationOutOfRange(u64),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entity store table holding todo records (default: "Todos")
    pub todos_table: String,
    /// Object store bucket holding attachments (default: "todos-attachments")
    pub images_bucket: String,
    /// Lifetime of pre-signed upload URLs in seconds (default: 300)
    pub signed_url_expiration_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - DynamoDB table name (default: "Todos")
    /// - `IMAGES_S3_BUCKET` - S3 bucket for attachments (default: "todos-attachments")
    /// - `SIGNED_URL_EXPIRATION` - Upload URL lifetime in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            todos_table: env::var("TODOS_TABLE").unwrap_or_else(|_| "Todos".to_string()),
            images_bucket: env::var("IMAGES_S3_BUCKET")
                .unwrap_or_else(|_| "todos-attachments".to_string()),
            signed_url_expiration_seconds: parse_expiration(
                env::var("SIGNED_URL_EXPIRATION").ok().as_deref(),
            ),
        }
    }

    /// Checks values that would otherwise fail on every request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seconds = self.signed_url_expiration_seconds;
        if seconds == 0 || seconds > MAX_SIGNED_URL_EXPIRATION {
            return Err(ConfigError::ExpirationOutOfRange(seconds));
        }
        Ok(())
    }

    /// Get the upload URL lifetime as a Duration.
    pub fn signed_url_expiration(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration_seconds)
    }
}

fn parse_expiration(raw: Option<&str>) -> u64 {
    match raw {
        None => DEFAULT_SIGNED_URL_EXPIRATION,
        Some(value) => value.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(
                value = %value,
                error = %e,
                default = DEFAULT_SIGNED_URL_EXPIRATION,
                "Ignoring unparseable SIGNED_URL_EXPIRATION"
            );
            DEFAULT_SIGNED_URL_EXPIRATION
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_expiration(seconds: u64) -> Config {
        Config {
            todos_table: "Todos".to_string(),
            images_bucket: "todos-attachments".to_string(),
            signed_url_expiration_seconds: seconds,
        }
    }

    #[test]
    fn test_signed_url_expiration_conversion() {
        let config = config_with_expiration(900);

        assert_eq!(config.signed_url_expiration(), Duration::from_secs(900));
    }

    #[test]
    fn test_default_values() {
        env::remove_var("TODOS_TABLE");
        env::remove_var("IMAGES_S3_BUCKET");
        env::remove_var("SIGNED_URL_EXPIRATION");

        let config = Config::from_env();

        assert_eq!(config.todos_table, "Todos");
        assert_eq!(config.images_bucket, "todos-attachments");
        assert_eq!(config.signed_url_expiration_seconds, 300);
    }

    #[test]
    fn test_parse_expiration() {
        assert_eq!(parse_expiration(None), 300);
        assert_eq!(parse_expiration(Some("900")), 900);
        assert_eq!(parse_expiration(Some("5m")), 300);
    }

    #[test]
    fn test_validate_expiration_range() {
        assert_eq!(config_with_expiration(300).validate(), Ok(()));
        assert_eq!(
            config_with_expiration(MAX_SIGNED_URL_EXPIRATION).validate(),
            Ok(())
        );
        assert_eq!(
            config_with_expiration(MAX_SIGNED_URL_EXPIRATION + 1).validate(),
            Err(ConfigError::ExpirationOutOfRange(604_801))
        );
        assert_eq!(
            config_with_expiration(0).validate(),
            Err(ConfigError::ExpirationOutOfRange(0))
        );
    }
}
