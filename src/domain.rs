//! Domain logic
//!
//! This module contains the application's data and pure helpers:
//! - Catalog, book records and library shelves
//! - View identifiers and user preferences
//! - Canned AI, audio, premium and stats content
//! - Text formatting utilities

pub mod ai;
pub mod audio;
pub mod book;
pub mod catalog;
pub mod notice;
pub mod preferences;
pub mod premium;
pub mod shelf;
pub mod stats;
pub mod text;
pub mod view;
