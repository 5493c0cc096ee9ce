//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components, one per screen plus header, status bar and modals
//! - Reusable widgets
//! - Configuration (styles, keybindings) and reading palettes

pub mod components;
pub mod config;
pub mod theme;
pub mod widgets;
