//! Integration layer
//!
//! Wires the Elm runtime to the host:
//! - Runtime (translate, update, execute)
//! - App runner (history, playback clock, terminal)
//! - Rendering and per-loop coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
