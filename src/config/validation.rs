use crate::config::types::{ResolveConfig, RetryConfig, ScoringConfig};
use crate::ConfigError;

/// Validates the entire configuration
///
/// This is the only error class that aborts a resolution before any network
/// activity begins.
pub fn validate(config: &ResolveConfig) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 100, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.max_results == Some(0) {
        return Err(ConfigError::Validation(
            "max_results must be >= 1 when set".to_string(),
        ));
    }

    validate_retry(&config.retry)?;
    validate_scoring(&config.scoring)?;
    Ok(())
}

/// Validates retry configuration
fn validate_retry(retry: &RetryConfig) -> Result<(), ConfigError> {
    if retry.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "retry.max_attempts must be >= 1, got {}",
            retry.max_attempts
        )));
    }

    if retry.backoff_floor_secs > retry.backoff_ceiling_secs {
        return Err(ConfigError::Validation(format!(
            "retry.backoff_floor_secs ({}) must not exceed retry.backoff_ceiling_secs ({})",
            retry.backoff_floor_secs, retry.backoff_ceiling_secs
        )));
    }

    Ok(())
}

/// Validates scoring weights
fn validate_scoring(scoring: &ScoringConfig) -> Result<(), ConfigError> {
    let weights = [
        ("scoring.default_priority", scoring.default_priority),
        ("scoring.homepage_bonus", scoring.homepage_bonus),
        ("scoring.keyword_bonus", scoring.keyword_bonus),
        ("scoring.depth_penalty", scoring.depth_penalty),
    ];

    for (name, value) in weights {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Validation(format!(
                "{} must be a finite non-negative number, got {}",
                name, value
            )));
        }
    }

    if scoring.default_priority > 1.0 {
        return Err(ConfigError::Validation(format!(
            "scoring.default_priority must be within [0.0, 1.0], got {}",
            scoring.default_priority
        )));
    }

    Ok(())
}
