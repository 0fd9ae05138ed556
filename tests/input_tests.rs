// Host-side tests for input mapping and wheel throttling.

use plane_carousel::core::*;

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Prev));
    assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Next));
    assert_eq!(direction_for_key("ArrowUp"), None);
    assert_eq!(direction_for_key("a"), None);
    assert_eq!(direction_for_key(""), None);
}

#[test]
fn direction_step_and_sign_agree() {
    assert_eq!(Direction::Prev.step(), -1);
    assert_eq!(Direction::Next.step(), 1);
    assert_eq!(Direction::Prev.sign(), -1.0);
    assert_eq!(Direction::Next.sign(), 1.0);
}

#[test]
fn wheel_threshold_is_exclusive() {
    assert_eq!(direction_for_wheel(100.0, 100.0), None);
    assert_eq!(direction_for_wheel(-100.0, 100.0), None);
    assert_eq!(direction_for_wheel(100.5, 100.0), Some(Direction::Next));
    assert_eq!(direction_for_wheel(-150.0, 100.0), Some(Direction::Prev));
    assert_eq!(direction_for_wheel(0.0, 100.0), None);
}

#[test]
fn throttle_drops_calls_inside_window() {
    let mut t = Throttle::new(100.0);
    assert!(t.accept(1_000.0));
    assert!(!t.accept(1_050.0));
    assert!(!t.accept(1_099.9));
    assert!(t.accept(1_100.0));
    assert!(!t.accept(1_150.0));
}

#[test]
fn throttle_accepts_first_call_at_time_zero() {
    let mut t = Throttle::new(100.0);
    assert!(t.accept(0.0));
}

#[test]
fn wheel_ignores_nan_delta() {
    assert_eq!(direction_for_wheel(f64::NAN, 100.0), None);
    let mut gate = WheelGate::default();
    assert_eq!(gate.handle(f64::NAN, 0.0), None);
}

#[test]
fn rapid_double_wheel_handles_only_first() {
    let mut gate = WheelGate::default();
    assert_eq!(gate.handle(150.0, 5_000.0), Some(Direction::Next));
    assert_eq!(gate.handle(150.0, 5_040.0), None);
    assert_eq!(gate.handle(150.0, 5_100.0), Some(Direction::Next));
}

#[test]
fn small_wheel_delta_still_consumes_throttle_slot() {
    let mut gate = WheelGate::new(100.0, 100.0);
    assert_eq!(gate.handle(20.0, 0.0), None);
    // dropped by the throttle even though the delta is large
    assert_eq!(gate.handle(-300.0, 50.0), None);
    assert_eq!(gate.handle(-300.0, 120.0), Some(Direction::Prev));
}
