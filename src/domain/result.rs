//! Result type alias for HealthPulse

use super::errors::HealthPulseError;

/// Result type alias for HealthPulse operations
///
/// # Examples
///
/// ```
/// use healthpulse::domain::result::Result;
/// use healthpulse::domain::errors::HealthPulseError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HealthPulseError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HealthPulseError>;
