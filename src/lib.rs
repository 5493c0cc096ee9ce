//! # Eduletter - terminal reader and audiobook player
//!
//! A terminal client for an e-reading and audiobook catalog, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, including the path/view synchronizer
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (history, playback clock, storage, network)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! The current view is always derived from the current path. Screens ask for
//! a view change; the synchronizer guards the request, hands the new path to
//! the history and then writes the view store right away. Paths reported
//! back by the history are reconciled into the view when they disagree.
//!
//! ## Example Usage
//!
//! ```rust
//! use eduletter::{
//!     core::msg::navigation::NavigationMsg, domain::view::ViewState,
//!     infrastructure::config::Config, update, AppState, Cmd, Msg,
//! };
//!
//! let state = AppState::new(Config::default(), true);
//! let (state, _cmds) = update(
//!     Msg::Navigation(NavigationMsg::PathChanged("/profile".into())),
//!     state,
//! );
//! assert_eq!(state.view.get(), ViewState::Settings);
//!
//! // the path request goes out and the view is already written
//! let (state, cmds) = update(
//!     Msg::Navigation(NavigationMsg::RequestView(ViewState::Library)),
//!     state,
//! );
//! assert_eq!(cmds, vec![Cmd::Navigate { path: "/library".into() }]);
//! assert_eq!(state.view.get(), ViewState::Library);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, update and the navigation synchronizer
//! - [`domain`] - Catalog, views, preferences and canned content
//! - [`infrastructure`] - Config, storage, history, timers, terminal and HTTP
//! - [`integration`] - Runtime and app runner
//! - [`presentation`] - Components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
