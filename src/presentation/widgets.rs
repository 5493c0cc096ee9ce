//! Reusable UI widgets

pub mod progress_line;
pub mod tab_bar;
