//! Demo harness for the guidance engine
//!
//! Wires mock sensors through the orchestrator and walks a scripted
//! observer toward the target, logging each derived snapshot. The real
//! presentation layer and platform bindings live outside this crate; this
//! binary only exercises the core against a plausible sample sequence.

use geopointer::{
    GeoPoint, GuidanceConfig, GuidanceOrchestrator, MockOrientationSensor, MockPositionSensor,
    OrientationSample,
};

fn main() {
    env_logger::init();

    let config = GuidanceConfig::default();
    log::info!(
        "target: {:.6}, {:.6}",
        config.target.latitude,
        config.target.longitude
    );

    let mut position = MockPositionSensor::new(GeoPoint::new(37.5000, 127.0000));
    position.push_update(GeoPoint::new(37.5150, 127.0150));
    position.push_update(GeoPoint::new(37.5300, 127.0300));
    position.push_update(GeoPoint::new(37.5450, 127.0440));

    let mut orientation = MockOrientationSensor::compass();
    orientation.push_sample(OrientationSample::compass(0.0));
    orientation.push_sample(OrientationSample::compass(35.0));
    orientation.push_sample(OrientationSample::compass(40.0));

    let mut engine = GuidanceOrchestrator::new(&config, position, orientation);

    engine.on_snapshot(Box::new(|snapshot| {
        if snapshot.compass_available {
            println!(
                "distance {:6.2} km | rotate {:+7.1} deg",
                snapshot.distance_km, snapshot.rotation_deg
            );
        } else {
            println!("distance {:6.2} km | compass unavailable", snapshot.distance_km);
        }
    }));

    engine.on_failure(Box::new(|stream, reason| {
        eprintln!("{} acquisition failed: {}", stream, reason);
    }));

    engine.activate();

    // Stand-in for the host event loop
    for _ in 0..4 {
        engine.poll();
    }

    let last = engine.snapshot();
    println!(
        "final: {:.2} km away, compass {}",
        last.distance_km,
        if last.compass_available { "ok" } else { "lost" }
    );
}
