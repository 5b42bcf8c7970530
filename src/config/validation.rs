//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Directories are not required to exist: they are only read per request

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid listen address '{0}'")]
    InvalidListenAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("{0} must not be empty")]
    EmptyPath(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.http.bind_address().is_err() {
        errors.push(ValidationError::InvalidListenAddress(config.http.listen.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.http.templates_directory.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPath("http.templates_directory"));
    }
    if config.freeswitch.module_data_directory.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPath("freeswitch.module_data_directory"));
    }

    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero("http.request_timeout_secs"));
    }
    if config.http.max_body_size == 0 {
        errors.push(ValidationError::Zero("http.max_body_size"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.http.listen = "nowhere".into();
        config.http.templates_directory = PathBuf::new();
        config.http.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidListenAddress("nowhere".into()),
                ValidationError::EmptyPath("http.templates_directory"),
                ValidationError::Zero("http.request_timeout_secs"),
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "bad".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidMetricsAddress("bad".into())])
        );
    }
}
