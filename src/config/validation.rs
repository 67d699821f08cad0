use crate::config::types::{Config, OutputConfig, PoliteSettings};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_polite_settings(&config.polite)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates politeness settings
pub fn validate_polite_settings(settings: &PoliteSettings) -> Result<(), ConfigError> {
    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if settings.min_delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "min-delay-seconds must be >= 0, got {}",
            settings.min_delay_secs
        )));
    }

    if settings.max_delay_secs < settings.min_delay_secs {
        return Err(ConfigError::Validation(format!(
            "max-delay-seconds ({}) must be >= min-delay-seconds ({})",
            settings.max_delay_secs, settings.min_delay_secs
        )));
    }

    if settings.retries < 1 {
        return Err(ConfigError::Validation(format!(
            "retries must be >= 1, got {}",
            settings.retries
        )));
    }

    if settings.backoff_base_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "backoff-base-seconds must be >= 0, got {}",
            settings.backoff_base_secs
        )));
    }

    if settings.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-seconds must be >= 1, got {}",
            settings.timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
