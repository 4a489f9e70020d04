//! Platform bindings
//!
//! - `web`: canvas surface, keyboard listeners and the timer-driven loop
//! - `headless`: scripted runs over a recording surface (native builds, tests)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;
