//! Sensor error types and handling

use std::fmt;

/// Error types for sensor acquisition
///
/// Every variant is terminal for its stream within the current session;
/// there is no automatic retry policy. Errors are local to one stream and
/// never abort the other.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The sensor does not exist on this platform or access is blocked
    Unavailable { details: String },
    /// The user declined the runtime permission prompt
    PermissionDenied,
    /// The platform gave up waiting for the first fix
    Timeout { timeout_ms: u32 },
    /// Any other platform-reported failure
    Failure { details: String },
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Unavailable { details } => {
                write!(f, "sensor unavailable: {}", details)
            }
            SensorError::PermissionDenied => {
                write!(f, "permission denied by user")
            }
            SensorError::Timeout { timeout_ms } => {
                write!(f, "sensor timed out after {}ms", timeout_ms)
            }
            SensorError::Failure { details } => {
                write!(f, "sensor failure: {}", details)
            }
        }
    }
}

impl std::error::Error for SensorError {}

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;
