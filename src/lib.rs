//! Directional Guidance Engine
//!
//! Given a moving observer's geographic position and the device's physical
//! heading, this crate continuously computes the rotation angle needed to
//! point a fixed on-screen indicator toward a stationary target coordinate,
//! plus the great-circle distance to that target.
//!
//! The core is the sensor-fusion and geometry subsystem: two independent,
//! asynchronously-updating sensor streams (position, orientation) are
//! acquired through the [`sensors`] abstraction, reconciled by the
//! [`orchestrator`], and reduced by [`fusion`] into a single
//! distance/rotation pair. Presentation is a consumer of the resulting
//! [`FusionSnapshot`], not part of this crate.

pub mod core;
pub mod geometry;
pub mod fusion;
pub mod sensors;
pub mod orchestrator;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    FusionSnapshot, GeoPoint, OrientationSample, SensorStream, StreamStatus, EARTH_RADIUS_KM,
};
pub use fusion::{FusionState, HeadingOutcome};
pub use geometry::{bearing_deg, distance_km, wrap_relative_deg};
pub use orchestrator::{
    canonical_heading, Capabilities, FailureCallback, GuidanceOrchestrator, SnapshotCallback,
};
pub use sensors::{
    FixOptions, HeadingField, MockOrientationSensor, MockPositionSensor, OrientationSensor,
    PermissionDecision, PermissionPolicy, PositionSensor, SensorError, SensorResult,
};
pub use utils::{ConfigError, ConfigResult, GuidanceConfig};
