//! Sensor fusion state: current belief about observer position and heading
//!
//! `FusionState` owns the latest observer position and the latest canonical
//! device heading, and recomputes the derived [`FusionSnapshot`] on every
//! input change. Samples are last-write-wins with no buffering, smoothing,
//! or outlier rejection.
//!
//! Invocation is expected to be strictly sequential (one logical event
//! queue); nothing here synchronizes access. If the two acquisition
//! callbacks can run from different execution contexts, all entry points
//! must be wrapped in a single mutual-exclusion scope, since the rotation
//! computation reads both stored inputs.

use crate::core::types::{FusionSnapshot, GeoPoint};
use crate::geometry::{bearing_deg, distance_km, wrap_relative_deg};

/// Result of feeding a heading sample to the fusion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingOutcome {
    /// Heading was fused and the snapshot's rotation updated
    Applied,
    /// No observer position is known yet; the sample produced no update.
    /// Non-fatal: resolves itself once a position sample lands.
    AwaitingPosition,
}

/// Latest observer position and device heading, plus the derived snapshot
pub struct FusionState {
    target: GeoPoint,
    observer: Option<GeoPoint>,
    heading: Option<f64>,
    snapshot: FusionSnapshot,
}

impl FusionState {
    /// Create fusion state for a fixed target coordinate
    pub fn new(target: GeoPoint) -> Self {
        Self {
            target,
            observer: None,
            heading: None,
            snapshot: FusionSnapshot::default(),
        }
    }

    /// The fixed target this state points toward
    pub fn target(&self) -> &GeoPoint {
        &self.target
    }

    /// Current derived output
    pub fn snapshot(&self) -> &FusionSnapshot {
        &self.snapshot
    }

    /// Replace the observer position and recompute the snapshot
    ///
    /// The stored position is replaced unconditionally (last sample wins) and
    /// the distance to the target is recomputed. If a heading has already been
    /// fused, the rotation is recomputed against the new position as well;
    /// otherwise rotation and compass availability keep their prior values.
    pub fn on_position_sample(&mut self, p: GeoPoint) {
        self.observer = Some(p);
        self.snapshot.distance_km = distance_km(&p, &self.target);

        if let Some(h) = self.heading {
            self.snapshot.rotation_deg = self.relative_bearing(&p, h);
        }
    }

    /// Fuse a canonical heading in degrees clockwise from north
    ///
    /// Requires a stored observer position. Without one the sample is accepted
    /// for status tracking but produces no snapshot update, and the caller is
    /// told via [`HeadingOutcome::AwaitingPosition`].
    pub fn on_heading_sample(&mut self, h: f64) -> HeadingOutcome {
        let observer = match self.observer {
            Some(observer) => observer,
            None => return HeadingOutcome::AwaitingPosition,
        };

        self.heading = Some(h);
        self.snapshot.rotation_deg = self.relative_bearing(&observer, h);
        self.snapshot.compass_available = true;

        HeadingOutcome::Applied
    }

    /// Record that no usable heading will arrive on the current subscription
    ///
    /// Terminal for the orientation stream: the subscription is expected to
    /// detach itself after signalling this. Distance output is unaffected.
    pub fn on_heading_unavailable(&mut self) {
        self.heading = None;
        self.snapshot.compass_available = false;
    }

    fn relative_bearing(&self, observer: &GeoPoint, heading: f64) -> f64 {
        wrap_relative_deg(bearing_deg(observer, &self.target) - heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> GeoPoint {
        GeoPoint::new(37.551447, 127.047016)
    }

    fn observer() -> GeoPoint {
        GeoPoint::new(37.5000, 127.0000)
    }

    #[test]
    fn heading_before_position_produces_no_update() {
        let mut state = FusionState::new(target());

        let outcome = state.on_heading_sample(90.0);

        assert_eq!(outcome, HeadingOutcome::AwaitingPosition);
        assert!(!state.snapshot().compass_available);
        assert_eq!(state.snapshot().rotation_deg, 0.0);
        assert_eq!(state.snapshot().distance_km, 0.0);
    }

    #[test]
    fn position_then_heading_enables_compass() {
        let mut state = FusionState::new(target());

        state.on_heading_sample(90.0);
        state.on_position_sample(observer());
        assert!(!state.snapshot().compass_available);

        let outcome = state.on_heading_sample(90.0);

        assert_eq!(outcome, HeadingOutcome::Applied);
        assert!(state.snapshot().compass_available);
        assert!((-180.0..=180.0).contains(&state.snapshot().rotation_deg));
        assert!(state.snapshot().distance_km > 0.0);
    }

    #[test]
    fn target_ahead_yields_rotation_near_zero() {
        // Observer due south of the target, device pointing north
        let mut state = FusionState::new(target());
        state.on_position_sample(GeoPoint::new(37.5000, 127.047016));
        state.on_heading_sample(0.0);

        assert!(state.snapshot().rotation_deg.abs() < 0.5);
    }

    #[test]
    fn rotation_always_normalized() {
        let mut state = FusionState::new(target());
        state.on_position_sample(observer());

        let bearing = bearing_deg(&observer(), &target());

        let mut h = 0.0;
        while h < 360.0 {
            state.on_heading_sample(h);
            let r = state.snapshot().rotation_deg;

            assert!((-180.0..=180.0).contains(&r), "heading {} -> {}", h, r);

            // Undoing the heading subtraction must recover the bearing
            let recovered = ((r + h) % 360.0 + 360.0) % 360.0;
            let delta = (recovered - bearing).abs();
            assert!(delta < 1e-9 || (delta - 360.0).abs() < 1e-9);

            h += 7.5;
        }
    }

    #[test]
    fn duplicate_position_sample_leaves_snapshot_unchanged() {
        let mut state = FusionState::new(target());

        state.on_position_sample(observer());
        state.on_heading_sample(42.0);
        let before = *state.snapshot();

        state.on_position_sample(observer());

        assert_eq!(before, *state.snapshot());
    }

    #[test]
    fn position_update_recomputes_rotation_with_known_heading() {
        let mut state = FusionState::new(target());

        state.on_position_sample(observer());
        state.on_heading_sample(0.0);
        let first = state.snapshot().rotation_deg;

        // Move due south of the target; bearing collapses toward 0
        state.on_position_sample(GeoPoint::new(37.5000, 127.047016));

        let second = state.snapshot().rotation_deg;
        assert!(second.abs() < 0.5);
        assert!((first - second).abs() > 1.0);
        assert!(state.snapshot().compass_available);
    }

    #[test]
    fn heading_unavailable_clears_compass_but_not_distance() {
        let mut state = FusionState::new(target());

        state.on_position_sample(observer());
        state.on_heading_sample(10.0);
        let distance = state.snapshot().distance_km;

        state.on_heading_unavailable();

        assert!(!state.snapshot().compass_available);
        assert_eq!(state.snapshot().distance_km, distance);

        // A later position update must not resurrect the dead heading
        state.on_position_sample(GeoPoint::new(37.5100, 127.0100));
        assert!(!state.snapshot().compass_available);
    }
}
