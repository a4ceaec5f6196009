use super::configuration::Configuration;
use super::error::ValidationError;

/// Checks a parsed configuration before any interactive I/O happens.
///
/// Checks:
/// - Repeat count is positive, unless help was requested
pub fn validate(config: &Configuration) -> Result<(), ValidationError> {
    if !config.help_requested && config.repeat_count <= 0 {
        return Err(ValidationError::NonPositiveRepeatCount);
    }
    Ok(())
}
