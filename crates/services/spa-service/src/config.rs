//! Spa service configuration.

use std::env;

use serde::Serialize;

use common::{LogFormat, ServiceConfig};

/// Spa service configuration.
#[derive(Debug, Clone, Serialize)]
pub struct SpaServiceConfig {
    /// Logging and service identity
    pub service: ServiceConfig,
    /// Enforce one account per email in the in-memory user store
    pub unique_user_email: bool,
    /// Variables whose values were rejected in favour of the default
    #[serde(skip)]
    pub ignored: Vec<String>,
}

impl SpaServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut ignored = Vec::new();

        let log_format = match var("SPA_SERVICE_LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>().unwrap_or_else(|err| {
                ignored.push(format!("SPA_SERVICE_LOG_FORMAT: {}", err));
                defaults.service.log_format
            }),
            None => defaults.service.log_format,
        };

        let unique_user_email = match var("SPA_SERVICE_UNIQUE_EMAIL") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                ignored.push(format!("SPA_SERVICE_UNIQUE_EMAIL: not a boolean '{}'", raw));
                defaults.unique_user_email
            }),
            None => defaults.unique_user_email,
        };

        Self {
            service: ServiceConfig {
                service_name: var("SPA_SERVICE_NAME").unwrap_or(defaults.service.service_name),
                log_level: var("SPA_SERVICE_LOG_LEVEL")
                    .or_else(|| var("LOG_LEVEL"))
                    .unwrap_or(defaults.service.log_level),
                log_format,
            },
            unique_user_email,
            ignored,
        }
    }
}

impl Default for SpaServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "spa-service".to_string(),
                ..ServiceConfig::default()
            },
            unique_user_email: true,
            ignored: Vec::new(),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpaServiceConfig::default();

        assert_eq!(config.service.service_name, "spa-service");
        assert_eq!(config.service.log_level, "info");
        assert!(config.unique_user_email);
    }

    #[test]
    fn test_from_vars_reads_overrides() {
        let config = SpaServiceConfig::from_vars(|key| match key {
            "SPA_SERVICE_NAME" => Some("spa-eu".to_string()),
            "LOG_LEVEL" => Some("debug".to_string()),
            "SPA_SERVICE_LOG_FORMAT" => Some("JSON".to_string()),
            "SPA_SERVICE_UNIQUE_EMAIL" => Some("no".to_string()),
            _ => None,
        });

        assert_eq!(config.service.service_name, "spa-eu");
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.service.log_format, LogFormat::Json);
        assert!(!config.unique_user_email);
        assert!(config.ignored.is_empty());
    }

    #[test]
    fn test_from_vars_records_rejected_values() {
        let config = SpaServiceConfig::from_vars(|key| match key {
            "SPA_SERVICE_LOG_FORMAT" => Some("jsno".to_string()),
            "SPA_SERVICE_UNIQUE_EMAIL" => Some("maybe".to_string()),
            _ => None,
        });

        assert_eq!(config.service.log_format, LogFormat::Pretty);
        assert!(config.unique_user_email);
        assert_eq!(config.ignored.len(), 2);
        assert!(config.ignored[0].contains("jsno"));
        assert!(config.ignored[1].contains("maybe"));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
