//! Sensor abstraction layer for the two platform streams
//!
//! This module is the seam between the guidance core and the platform's
//! geolocation and device-orientation APIs. Each stream is modeled as an
//! explicit subscription with a single next-sample entry point and (for the
//! orientation stream) a separate unsubscribe capability, so the
//! self-cancelling degraded-heading path is an explicit, testable
//! transition rather than a side-effecting listener removal.

pub mod traits;
pub mod error;
pub mod mock;

pub use traits::{
    HeadingField, OrientationSensor, PermissionDecision, PermissionPolicy, PositionSensor,
};
pub use error::{SensorError, SensorResult};
pub use mock::{MockOrientationSensor, MockPositionSensor};

/// Options for the one-shot fix and the continuous position subscription
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixOptions {
    /// Ask the platform for its high-accuracy positioning mode
    pub high_accuracy: bool,
    /// Maximum time the platform may spend on the first fix (ms)
    pub timeout_ms: u32,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
        }
    }
}
