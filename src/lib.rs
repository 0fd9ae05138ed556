//! 3D image carousel for the browser.
//!
//! The carousel logic lives in [`core`] and builds on every target. The
//! DOM/WebGPU front-end below is compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod loader;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod web_app;

#[cfg(target_arch = "wasm32")]
pub(crate) use web_app::AppWiring;
