//! Skyhop library.
//!
//! Engine services (assets, audio, input, physics, rendering, frame timing)
//! and the platformer game built on them. The binary only wires these into
//! a window.

pub mod app;
pub mod config;
pub mod core;
pub mod engine;
pub mod game;
