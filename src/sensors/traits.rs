//! Sensor trait definitions for position and orientation streams

use crate::core::types::{GeoPoint, OrientationSample};
use crate::sensors::{FixOptions, SensorResult};

/// Whether the platform gates orientation data behind a runtime permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionPolicy {
    /// Explicit user consent must be requested before subscribing
    Required,
    /// Orientation data is available without a prompt
    NotRequired,
}

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted,
    Denied,
}

/// Which heading representation this platform family populates reliably
///
/// One major platform family never sets the absolute flag on generic
/// orientation samples but does expose a dedicated compass-heading field.
/// The field is detected once at activation and drives heading
/// normalization for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingField {
    /// Prefer the dedicated compass-heading field
    CompassHeading,
    /// Only the generic alpha angle (gated on the absolute flag) is usable
    GenericAlpha,
}

/// Continuous position stream with a one-shot first fix
///
/// The stream has no teardown path: once subscribed it delivers fixes until
/// process end. `poll` is the single next-sample entry point; it returns
/// `None` when no sample is pending, and samples are yielded strictly in
/// arrival order.
pub trait PositionSensor {
    /// Request a single high-accuracy fix; resolves or fails exactly once
    fn request_fix(&mut self, opts: &FixOptions) -> SensorResult<GeoPoint>;

    /// Open the continuous subscription that follows the first fix
    fn subscribe(&mut self, opts: &FixOptions) -> SensorResult<()>;

    /// Next pending fix, if any
    fn poll(&mut self) -> Option<SensorResult<GeoPoint>>;
}

/// Continuous orientation stream with optional permission gating
///
/// Unlike the position stream this one can be torn down: the orchestrator
/// unsubscribes as soon as a sample arrives without usable heading data,
/// on the assumption that the sensor will not recover within the session.
pub trait OrientationSensor {
    /// Whether a runtime permission grant is required before subscribing
    fn permission_policy(&self) -> PermissionPolicy;

    /// Which heading representation this sensor populates
    fn heading_field(&self) -> HeadingField;

    /// Prompt the user for consent; must be called at most once per session
    fn request_permission(&mut self) -> SensorResult<PermissionDecision>;

    /// Open the continuous subscription
    fn subscribe(&mut self) -> SensorResult<()>;

    /// Next pending sample, if any; `None` once unsubscribed
    fn poll(&mut self) -> Option<OrientationSample>;

    /// Detach the subscription; no further samples will be delivered
    fn unsubscribe(&mut self);
}
