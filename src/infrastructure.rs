//! Infrastructure layer
//!
//! This module handles the outside world:
//! - TUI foundation and event sources
//! - CLI argument processing and configuration
//! - Durable flags, navigation history and the playback clock
//! - The optional remote summary service

pub mod ai_client;
pub mod cli;
pub mod config;
pub mod history;
pub mod playback_timer;
pub mod storage;
pub mod tui;
