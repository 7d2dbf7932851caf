//! Canvas client for Pong
//!
//! Hosts a `game_core::Match` in the browser: draws it on a 2D canvas,
//! maps keyboard events onto paddle controls and drives the simulation from
//! `requestAnimationFrame`.
//!
//! Key mapping is platform independent; everything touching the DOM is only
//! compiled for wasm32.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use app::PongClient;
