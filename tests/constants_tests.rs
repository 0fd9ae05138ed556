// Host-side tests for layout/timing constants and their relationships.

use plane_carousel::core::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_positive() {
    assert!(IMAGE_DISTANCE > 0.0);
    assert!(PLANE_HEIGHT > 0.0);
    assert!(CAMERA_Z > 0.0);
    assert!(SLIDE_DURATION_SEC > 0.0);
    assert!(WHEEL_THROTTLE_MS > 0.0);
    assert!(WHEEL_DELTA_THRESHOLD > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Neighbours never overlap even for very wide images
    assert!(IMAGE_DISTANCE > PLANE_HEIGHT * 4.0);
    // Camera sits in front of the planes and inside the far plane
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
    // Window keeps one neighbour on each side
    assert_eq!(VISIBLE_RANGE / 2, 1);
    assert!((SLIDE_ROTATION_RAD.to_degrees() - 30.0).abs() < 1e-4);
}

#[test]
fn default_config_mirrors_constants() {
    let c = CarouselConfig::default();
    assert_eq!(c.image_distance, IMAGE_DISTANCE);
    assert_eq!(c.plane_height, PLANE_HEIGHT);
    assert_eq!(c.visible_range, VISIBLE_RANGE);
    assert_eq!(c.slide_duration, Duration::from_secs(1));
    assert_eq!(c.camera_z, CAMERA_Z);
    assert_eq!(c.ease, Ease::Power1Out);
}
