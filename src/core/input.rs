use super::constants::{WHEEL_DELTA_THRESHOLD, WHEEL_THROTTLE_MS};

/// Slide direction along the carousel axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }

    #[inline]
    pub fn sign(self) -> f32 {
        self.step() as f32
    }
}

#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Prev),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}

/// Direction for a horizontal wheel delta, if it is large enough to count.
#[inline]
pub fn direction_for_wheel(delta_x: f64, threshold: f64) -> Option<Direction> {
    if delta_x.is_nan() || delta_x.abs() <= threshold {
        return None;
    }
    Some(if delta_x > 0.0 {
        Direction::Next
    } else {
        Direction::Prev
    })
}

/// Leading-edge throttle: lets one call through, then drops everything for
/// `delay_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    delay_ms: f64,
    last_call_ms: Option<f64>,
}

impl Throttle {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last_call_ms: None,
        }
    }

    /// Returns true if a call at `now_ms` should be handled, and records it.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        match self.last_call_ms {
            Some(last) if now_ms - last < self.delay_ms => false,
            _ => {
                self.last_call_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Turns raw wheel events into slide requests.
#[derive(Clone, Copy, Debug)]
pub struct WheelGate {
    throttle: Throttle,
    threshold: f64,
}

impl Default for WheelGate {
    fn default() -> Self {
        Self::new(WHEEL_THROTTLE_MS, WHEEL_DELTA_THRESHOLD)
    }
}

impl WheelGate {
    pub fn new(throttle_ms: f64, threshold: f64) -> Self {
        Self {
            throttle: Throttle::new(throttle_ms),
            threshold,
        }
    }

    /// The throttle slot is consumed by any accepted event, even one whose
    /// delta is too small to slide.
    pub fn handle(&mut self, delta_x: f64, now_ms: f64) -> Option<Direction> {
        if !self.throttle.accept(now_ms) {
            return None;
        }
        direction_for_wheel(delta_x, self.threshold)
    }
}
