//! Configuration validation.
//!
//! Collects every violation into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::GsiConfig;
use helpers::validate_range;
use ts3gsi_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GsiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_transport(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_transport(errors: &mut Vec<String>, config: &GsiConfig) {
    validate_range(
        errors,
        "transport.timeout_ms",
        config.transport.timeout_ms,
        100,
        10_000,
    );
    validate_range(
        errors,
        "transport.connect_timeout_ms",
        config.transport.connect_timeout_ms,
        50,
        10_000,
    );
    if config.transport.connect_timeout_ms > config.transport.timeout_ms {
        errors.push(format!(
            "transport.connect_timeout_ms = {} exceeds transport.timeout_ms = {}",
            config.transport.connect_timeout_ms, config.transport.timeout_ms
        ));
    }
}
