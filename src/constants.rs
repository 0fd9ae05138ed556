// Web-side constants: DOM hooks and render defaults.

// DOM
pub const MOUNT_ID: &str = "slider-container";
pub const BUTTON_SELECTOR: &str = "button";

// Clear colour behind the planes (white page background)
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

// Vertices for one textured quad (two triangles, generated in the shader)
pub const QUAD_VERTEX_COUNT: u32 = 6;

// Frame delta clamp; a backgrounded tab should not jump a whole transition
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
