// Layout and timing defaults for the carousel.

// Scene layout
pub const IMAGE_DISTANCE: f32 = 120.0; // spacing between neighbouring planes along X
pub const PLANE_HEIGHT: f32 = 10.0; // every plane is this tall; width follows aspect ratio
pub const CAMERA_Z: f32 = 10.0; // camera distance reset on every set load

// Windowing
pub const VISIBLE_RANGE: usize = 3; // planes kept in the render set (offset = range / 2)

// Transitions
pub const SLIDE_DURATION_SEC: f32 = 1.0;
pub const SLIDE_ROTATION_RAD: f32 = std::f32::consts::FRAC_PI_6; // 30 degrees

// Wheel input
pub const WHEEL_THROTTLE_MS: f64 = 100.0;
pub const WHEEL_DELTA_THRESHOLD: f64 = 100.0;
