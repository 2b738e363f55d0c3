//! Core data types for the guidance engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Raw orientation reading as delivered by the platform
///
/// A sample may carry up to two heading representations: a dedicated
/// compass-heading field (already referenced to magnetic north,
/// clockwise-positive) and a generic alpha angle that is only meaningful
/// when the sample is marked absolute. One major platform family never
/// populates the absolute flag correctly but does expose the compass field,
/// which is why both representations survive to this layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    /// Whether the alpha angle is referenced to an absolute frame
    pub absolute: bool,
    /// Generic orientation angle in degrees, if the platform reported one
    pub alpha: Option<f64>,
    /// Dedicated compass heading in degrees, if the platform exposes it
    pub compass_heading: Option<f64>,
}

impl OrientationSample {
    /// Sample carrying a dedicated compass heading
    pub fn compass(heading: f64) -> Self {
        Self {
            absolute: false,
            alpha: None,
            compass_heading: Some(heading),
        }
    }

    /// Sample carrying only an absolute alpha angle
    pub fn absolute_alpha(alpha: f64) -> Self {
        Self {
            absolute: true,
            alpha: Some(alpha),
            compass_heading: None,
        }
    }

    /// Sample with no usable heading data
    pub fn degraded() -> Self {
        Self {
            absolute: false,
            alpha: None,
            compass_heading: None,
        }
    }
}

/// Derived guidance output, replaced wholesale on every recomputation
///
/// This is the sole externally visible state of the fusion core. `rotation_deg`
/// is the angle the on-screen indicator must rotate so it points at the target,
/// normalized into [-180, 180]. It is only meaningful while `compass_available`
/// is true and retains its last computed value otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionSnapshot {
    /// Great-circle distance from observer to target (km, >= 0)
    pub distance_km: f64,
    /// Indicator rotation toward the target, degrees in [-180, 180]
    pub rotation_deg: f64,
    /// Whether a usable device heading is currently being fused
    pub compass_available: bool,
}

impl Default for FusionSnapshot {
    fn default() -> Self {
        Self {
            distance_km: 0.0,
            rotation_deg: 0.0,
            compass_available: false,
        }
    }
}

/// Identifies one of the two sensor streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorStream {
    Position,
    Orientation,
}

impl fmt::Display for SensorStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorStream::Position => write!(f, "position"),
            SensorStream::Orientation => write!(f, "orientation"),
        }
    }
}

/// Acquisition status of a single sensor stream
///
/// Transitions are driven solely by sensor callback outcomes:
/// Idle -> Acquiring on activation, Acquiring -> Active on the first
/// successful delivery, and any terminal error moves the stream to Failed
/// with a human-readable reason. Failed is terminal for the session; there
/// is no automatic retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamStatus {
    /// Stream has not been started
    Idle,
    /// Subscription or first fix is in flight
    Acquiring,
    /// Stream is delivering samples
    Active,
    /// Stream is error-blocked for the rest of the session
    Failed(String),
}

impl StreamStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, StreamStatus::Active)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StreamStatus::Failed(_))
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamStatus::Idle => write!(f, "idle"),
            StreamStatus::Acquiring => write!(f, "acquiring"),
            StreamStatus::Active => write!(f, "active"),
            StreamStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
