//! Acquisition orchestrator bridging raw sensors into the fusion core
//!
//! Owns the two sensor subscriptions, normalizes platform-specific heading
//! representations into one canonical heading value, tracks per-stream
//! acquisition status, and publishes derived snapshots and failure reasons
//! through registered callbacks.
//!
//! Both acquisitions are started together on [`GuidanceOrchestrator::activate`]
//! and run independently; a failure on one stream never aborts the other.
//! The host event loop drives delivery by calling
//! [`GuidanceOrchestrator::poll`], which drains pending samples from both
//! subscriptions in arrival order.

use crate::core::types::{FusionSnapshot, OrientationSample, SensorStream, StreamStatus};
use crate::fusion::{FusionState, HeadingOutcome};
use crate::sensors::{
    FixOptions, HeadingField, OrientationSensor, PermissionDecision, PermissionPolicy,
    PositionSensor, SensorError,
};
use crate::utils::GuidanceConfig;

/// Callback invoked with the new snapshot on every recomputation
pub type SnapshotCallback = Box<dyn Fn(&FusionSnapshot) + Send>;

/// Callback invoked with a human-readable reason when a stream fails
pub type FailureCallback = Box<dyn Fn(SensorStream, &str) + Send>;

/// Platform capabilities, detected once at activation
///
/// Represents the two axes of platform variance as a fixed strategy instead
/// of runtime feature-probing scattered through the update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether orientation data requires a runtime permission grant
    pub permission: PermissionPolicy,
    /// Which heading representation the platform populates reliably
    pub heading_field: HeadingField,
}

/// Extract the canonical heading from a raw orientation sample, if any
///
/// Precedence: the dedicated compass-heading field wins whenever it is
/// defined; a heading of exactly 0.0 (due north) is valid, so definedness is
/// tested rather than truthiness. The generic alpha angle is usable only
/// when the sample is marked absolute. `None` means the sample is degraded.
pub fn canonical_heading(sample: &OrientationSample, field: HeadingField) -> Option<f64> {
    let absolute_alpha = if sample.absolute { sample.alpha } else { None };

    match field {
        HeadingField::CompassHeading => sample.compass_heading.or(absolute_alpha),
        HeadingField::GenericAlpha => absolute_alpha,
    }
}

/// Orchestrator for the position and orientation acquisitions
pub struct GuidanceOrchestrator<P, O>
where
    P: PositionSensor,
    O: OrientationSensor,
{
    position: P,
    orientation: O,
    fusion: FusionState,
    capabilities: Capabilities,
    fix_options: FixOptions,
    position_status: StreamStatus,
    orientation_status: StreamStatus,
    activated: bool,
    snapshot_callbacks: Vec<SnapshotCallback>,
    failure_callbacks: Vec<FailureCallback>,
}

impl<P, O> GuidanceOrchestrator<P, O>
where
    P: PositionSensor,
    O: OrientationSensor,
{
    /// Create an orchestrator for a fixed target, reading platform
    /// capabilities from the orientation sensor once up front
    pub fn new(config: &GuidanceConfig, position: P, orientation: O) -> Self {
        let capabilities = Capabilities {
            permission: orientation.permission_policy(),
            heading_field: orientation.heading_field(),
        };

        Self {
            position,
            orientation,
            fusion: FusionState::new(config.target),
            capabilities,
            fix_options: config.fix_options(),
            position_status: StreamStatus::Idle,
            orientation_status: StreamStatus::Idle,
            activated: false,
            snapshot_callbacks: Vec::new(),
            failure_callbacks: Vec::new(),
        }
    }

    /// Register a callback for derived snapshot updates
    pub fn on_snapshot(&mut self, callback: SnapshotCallback) {
        self.snapshot_callbacks.push(callback);
    }

    /// Register a callback for stream failure messages
    pub fn on_failure(&mut self, callback: FailureCallback) {
        self.failure_callbacks.push(callback);
    }

    /// Current derived output
    pub fn snapshot(&self) -> &FusionSnapshot {
        self.fusion.snapshot()
    }

    /// Acquisition status of the position stream
    pub fn position_status(&self) -> &StreamStatus {
        &self.position_status
    }

    /// Acquisition status of the orientation stream
    pub fn orientation_status(&self) -> &StreamStatus {
        &self.orientation_status
    }

    /// Capabilities detected at construction
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Underlying position sensor
    pub fn position_sensor(&self) -> &P {
        &self.position
    }

    /// Underlying orientation sensor
    pub fn orientation_sensor(&self) -> &O {
        &self.orientation
    }

    /// Start both acquisitions
    ///
    /// The start order is not significant: the streams are independent and
    /// the fusion core tolerates either one running ahead of the other.
    /// Calling this more than once per session has no effect.
    pub fn activate(&mut self) {
        if self.activated {
            log::warn!("activate called twice; ignoring");
            return;
        }
        self.activated = true;

        self.start_position();
        self.start_orientation();
    }

    /// Drain pending samples from both subscriptions, in arrival order
    /// within each stream
    pub fn poll(&mut self) {
        self.poll_position();
        self.poll_orientation();
    }

    fn start_position(&mut self) {
        self.position_status = StreamStatus::Acquiring;
        log::info!(
            "requesting first position fix (high_accuracy={}, timeout={}ms)",
            self.fix_options.high_accuracy,
            self.fix_options.timeout_ms
        );

        let first_fix = match self.position.request_fix(&self.fix_options) {
            Ok(fix) => fix,
            Err(e) => {
                self.fail_stream(SensorStream::Position, &e);
                return;
            }
        };

        self.fusion.on_position_sample(first_fix);
        self.publish_snapshot();

        match self.position.subscribe(&self.fix_options) {
            Ok(()) => {
                self.position_status = StreamStatus::Active;
                log::debug!("position subscription open");
            }
            Err(e) => self.fail_stream(SensorStream::Position, &e),
        }
    }

    fn start_orientation(&mut self) {
        self.orientation_status = StreamStatus::Acquiring;

        if self.capabilities.permission == PermissionPolicy::Required {
            match self.orientation.request_permission() {
                Ok(PermissionDecision::Granted) => {
                    log::debug!("orientation permission granted");
                }
                Ok(PermissionDecision::Denied) => {
                    self.fail_stream(SensorStream::Orientation, &SensorError::PermissionDenied);
                    return;
                }
                Err(e) => {
                    self.fail_stream(SensorStream::Orientation, &e);
                    return;
                }
            }
        }

        match self.orientation.subscribe() {
            Ok(()) => {
                self.orientation_status = StreamStatus::Active;
                log::debug!("orientation subscription open");
            }
            Err(e) => self.fail_stream(SensorStream::Orientation, &e),
        }
    }

    fn poll_position(&mut self) {
        if !self.position_status.is_active() {
            return;
        }

        while let Some(result) = self.position.poll() {
            match result {
                Ok(fix) => {
                    self.fusion.on_position_sample(fix);
                    self.publish_snapshot();
                }
                Err(e) => {
                    self.fail_stream(SensorStream::Position, &e);
                    break;
                }
            }
        }
    }

    fn poll_orientation(&mut self) {
        if !self.orientation_status.is_active() {
            return;
        }

        while let Some(sample) = self.orientation.poll() {
            match canonical_heading(&sample, self.capabilities.heading_field) {
                Some(heading) => match self.fusion.on_heading_sample(heading) {
                    HeadingOutcome::Applied => self.publish_snapshot(),
                    HeadingOutcome::AwaitingPosition => {
                        log::debug!("heading sample before first position fix; no update");
                    }
                },
                None => {
                    // The sensor is assumed not to recover within this
                    // session; end the subscription here.
                    self.degrade_orientation();
                    break;
                }
            }
        }
    }

    fn degrade_orientation(&mut self) {
        self.fusion.on_heading_unavailable();
        self.orientation.unsubscribe();
        self.fail_stream(
            SensorStream::Orientation,
            &SensorError::Unavailable {
                details: "no usable heading in orientation sample".to_string(),
            },
        );
        self.publish_snapshot();
    }

    fn fail_stream(&mut self, stream: SensorStream, error: &SensorError) {
        let reason = error.to_string();
        log::warn!("{} stream failed: {}", stream, reason);

        match stream {
            SensorStream::Position => self.position_status = StreamStatus::Failed(reason.clone()),
            SensorStream::Orientation => {
                self.orientation_status = StreamStatus::Failed(reason.clone())
            }
        }

        for callback in &self.failure_callbacks {
            callback(stream, &reason);
        }
    }

    fn publish_snapshot(&self) {
        let snapshot = self.fusion.snapshot();
        for callback in &self.snapshot_callbacks {
            callback(snapshot);
        }
    }
}
