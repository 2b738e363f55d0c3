//! Mock sensor implementations for testing and development

use crate::core::types::{GeoPoint, OrientationSample};
use crate::sensors::{
    FixOptions, HeadingField, OrientationSensor, PermissionDecision, PermissionPolicy,
    PositionSensor, SensorError, SensorResult,
};
use std::collections::VecDeque;

/// Mock position sensor backed by a queue of scripted fixes
pub struct MockPositionSensor {
    fix_result: SensorResult<GeoPoint>,
    subscribe_result: SensorResult<()>,
    updates: VecDeque<SensorResult<GeoPoint>>,
    subscribed: bool,
}

impl MockPositionSensor {
    /// Create a mock that resolves its first fix with the given point
    pub fn new(first_fix: GeoPoint) -> Self {
        Self {
            fix_result: Ok(first_fix),
            subscribe_result: Ok(()),
            updates: VecDeque::new(),
            subscribed: false,
        }
    }

    /// Create a mock whose first fix fails with the given error
    pub fn failing(error: SensorError) -> Self {
        Self {
            fix_result: Err(error),
            subscribe_result: Ok(()),
            updates: VecDeque::new(),
            subscribed: false,
        }
    }

    /// Make the continuous subscription fail with the given error
    pub fn fail_subscribe(&mut self, error: SensorError) {
        self.subscribe_result = Err(error);
    }

    /// Queue a position update for delivery through `poll`
    pub fn push_update(&mut self, fix: GeoPoint) {
        self.updates.push_back(Ok(fix));
    }

    /// Queue a stream error for delivery through `poll`
    pub fn push_error(&mut self, error: SensorError) {
        self.updates.push_back(Err(error));
    }

    /// Whether the continuous subscription has been opened
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Number of queued updates not yet delivered
    pub fn queued_update_count(&self) -> usize {
        self.updates.len()
    }
}

impl PositionSensor for MockPositionSensor {
    fn request_fix(&mut self, _opts: &FixOptions) -> SensorResult<GeoPoint> {
        self.fix_result.clone()
    }

    fn subscribe(&mut self, _opts: &FixOptions) -> SensorResult<()> {
        self.subscribe_result.clone()?;
        self.subscribed = true;
        Ok(())
    }

    fn poll(&mut self) -> Option<SensorResult<GeoPoint>> {
        if !self.subscribed {
            return None;
        }

        self.updates.pop_front()
    }
}

/// Mock orientation sensor backed by a queue of scripted samples
pub struct MockOrientationSensor {
    policy: PermissionPolicy,
    field: HeadingField,
    permission_result: SensorResult<PermissionDecision>,
    subscribe_result: SensorResult<()>,
    samples: VecDeque<OrientationSample>,
    subscribed: bool,
    permission_requests: u32,
    unsubscribe_count: u32,
}

impl MockOrientationSensor {
    /// Mock of the platform family with a dedicated compass-heading field
    /// behind a runtime permission prompt
    pub fn compass() -> Self {
        Self {
            policy: PermissionPolicy::Required,
            field: HeadingField::CompassHeading,
            permission_result: Ok(PermissionDecision::Granted),
            subscribe_result: Ok(()),
            samples: VecDeque::new(),
            subscribed: false,
            permission_requests: 0,
            unsubscribe_count: 0,
        }
    }

    /// Mock of the platform family exposing only the generic absolute alpha
    /// angle, with no permission prompt
    pub fn generic_alpha() -> Self {
        Self {
            policy: PermissionPolicy::NotRequired,
            field: HeadingField::GenericAlpha,
            permission_result: Ok(PermissionDecision::Granted),
            subscribe_result: Ok(()),
            samples: VecDeque::new(),
            subscribed: false,
            permission_requests: 0,
            unsubscribe_count: 0,
        }
    }

    /// Make the permission prompt resolve as denied
    pub fn deny_permission(&mut self) {
        self.permission_result = Ok(PermissionDecision::Denied);
    }

    /// Make the permission prompt fail outright
    pub fn fail_permission(&mut self, error: SensorError) {
        self.permission_result = Err(error);
    }

    /// Queue an orientation sample for delivery through `poll`
    pub fn push_sample(&mut self, sample: OrientationSample) {
        self.samples.push_back(sample);
    }

    /// How many times the permission prompt was shown
    pub fn permission_request_count(&self) -> u32 {
        self.permission_requests
    }

    /// How many times the subscription was detached
    pub fn unsubscribe_count(&self) -> u32 {
        self.unsubscribe_count
    }

    /// Whether the subscription is currently open
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Number of queued samples not yet delivered
    pub fn queued_sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl OrientationSensor for MockOrientationSensor {
    fn permission_policy(&self) -> PermissionPolicy {
        self.policy
    }

    fn heading_field(&self) -> HeadingField {
        self.field
    }

    fn request_permission(&mut self) -> SensorResult<PermissionDecision> {
        self.permission_requests += 1;
        self.permission_result.clone()
    }

    fn subscribe(&mut self) -> SensorResult<()> {
        self.subscribe_result.clone()?;
        self.subscribed = true;
        Ok(())
    }

    fn poll(&mut self) -> Option<OrientationSample> {
        if !self.subscribed {
            return None;
        }

        self.samples.pop_front()
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.unsubscribe_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_mock_delivers_in_order() {
        let mut sensor = MockPositionSensor::new(GeoPoint::new(1.0, 2.0));
        sensor.push_update(GeoPoint::new(3.0, 4.0));
        sensor.push_update(GeoPoint::new(5.0, 6.0));

        let opts = FixOptions::default();
        assert_eq!(sensor.request_fix(&opts).unwrap(), GeoPoint::new(1.0, 2.0));

        // Nothing is delivered before the subscription opens
        assert!(sensor.poll().is_none());

        sensor.subscribe(&opts).unwrap();
        assert_eq!(sensor.poll().unwrap().unwrap(), GeoPoint::new(3.0, 4.0));
        assert_eq!(sensor.poll().unwrap().unwrap(), GeoPoint::new(5.0, 6.0));
        assert!(sensor.poll().is_none());
    }

    #[test]
    fn orientation_mock_stops_after_unsubscribe() {
        let mut sensor = MockOrientationSensor::compass();
        sensor.push_sample(OrientationSample::compass(90.0));
        sensor.push_sample(OrientationSample::compass(180.0));

        sensor.subscribe().unwrap();
        assert!(sensor.poll().is_some());

        sensor.unsubscribe();
        assert!(sensor.poll().is_none());
        assert_eq!(sensor.unsubscribe_count(), 1);
        assert_eq!(sensor.queued_sample_count(), 1);
    }
}
