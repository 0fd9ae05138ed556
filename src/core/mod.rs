//! Platform-independent carousel logic.
//!
//! Nothing in here touches the DOM or the GPU, so the whole module builds and
//! is tested on the host as well as on `wasm32`.

pub mod camera;
pub mod carousel;
pub mod constants;
pub mod error;
pub mod input;
pub mod plane;
pub mod registry;
pub mod tween;
pub mod window;

pub use camera::*;
pub use carousel::*;
pub use constants::*;
pub use error::CarouselError;
pub use input::*;
pub use plane::*;
pub use registry::*;
pub use tween::*;
pub use window::*;

// Shaders bundled as string constants
pub static PLANE_WGSL: &str = include_str!("../../shaders/plane.wgsl");
