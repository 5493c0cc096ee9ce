//! Path/view synchronization
//!
//! The history owns the current path. This module keeps the [`ViewStore`]
//! consistent with it in two directions:
//!
//! - **inbound**: every path reported by the history is reduced to a view with
//!   [`derive_view_from_path`] and written to the store only when it differs;
//! - **outbound**: every view change requested by a screen goes through
//!   [`Synchronizer::request_view_change`], which checks the guards, requests the
//!   canonical path at most once and only then writes the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{core::state::view::ViewStore, domain::book::Book, domain::view::ViewState};

pub const ROOT_PATH: &str = "/";
pub const LIBRARY_PATH: &str = "/library";
pub const PROFILE_PATH: &str = "/profile";
pub const READER_PREFIX: &str = "/reader";
pub const AUDIO_PREFIX: &str = "/audio";

/// Prefix table, checked in order.
const ROUTES: [(&str, ViewState); 4] = [
    (READER_PREFIX, ViewState::Reader),
    (AUDIO_PREFIX, ViewState::Audio),
    (PROFILE_PATH, ViewState::Settings),
    (LIBRARY_PATH, ViewState::Library),
];

/// Reason a navigation request was refused. The view is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GuardRejection {
    #[error("select a title from your library")]
    NoSelection,
    #[error("choose a title with an audio edition")]
    NoAudioEdition,
    #[error("this title requires Eduletter Premium")]
    PremiumRequired,
}

/// Read-only snapshot the guards are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavContext<'a> {
    pub selected: Option<&'a Book>,
    pub is_premium: bool,
}

impl<'a> NavContext<'a> {
    pub fn new(selected: Option<&'a Book>, is_premium: bool) -> Self {
        Self {
            selected,
            is_premium,
        }
    }
}

/// Maps any path to the view it addresses. Unknown paths map to the library.
pub fn derive_view_from_path(path: &str) -> ViewState {
    ROUTES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, view)| *view)
        .unwrap_or_default()
}

/// Extracts `{id}` from `/reader/{id}` or `/audio/{id}`.
pub fn entity_id_from_path(path: &str) -> Option<&str> {
    let rest = path
        .strip_prefix(READER_PREFIX)
        .or_else(|| path.strip_prefix(AUDIO_PREFIX))?;
    rest.strip_prefix('/')?
        .split('/')
        .next()
        .filter(|id| !id.is_empty())
}

/// Path a view is addressed by. Reader and audio need the selected title.
pub fn canonical_path(view: ViewState, selected: Option<&Book>) -> Option<String> {
    match view {
        ViewState::Reader => selected.map(|book| format!("{READER_PREFIX}/{}", book.id)),
        ViewState::Audio => selected.map(|book| format!("{AUDIO_PREFIX}/{}", book.id)),
        ViewState::Settings => Some(PROFILE_PATH.to_string()),
        ViewState::Library | ViewState::Ai | ViewState::Stats => Some(LIBRARY_PATH.to_string()),
    }
}

/// Guard table for outbound view changes.
pub fn check_guard(target: ViewState, ctx: &NavContext<'_>) -> Result<(), GuardRejection> {
    match target {
        ViewState::Reader => ctx.selected.map(|_| ()).ok_or(GuardRejection::NoSelection),
        ViewState::Audio => match ctx.selected {
            Some(book) if book.has_audio_edition => Ok(()),
            _ => Err(GuardRejection::NoAudioEdition),
        },
        ViewState::Library | ViewState::Settings | ViewState::Ai | ViewState::Stats => Ok(()),
    }
}

/// Guard for putting `book` in focus for `target`.
pub fn check_selection(
    book: &Book,
    target: ViewState,
    is_premium: bool,
) -> Result<(), GuardRejection> {
    if book.requires_premium && !is_premium {
        return Err(GuardRejection::PremiumRequired);
    }
    if target == ViewState::Audio && !book.has_audio_edition {
        return Err(GuardRejection::NoAudioEdition);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synchronizer {
    current_path: String,
    /// Path requested from the history but not yet reported back
    requested_path: Option<String>,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

impl Synchronizer {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            requested_path: None,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn requested_path(&self) -> Option<&str> {
        self.requested_path.as_deref()
    }

    /// The path the history will be at once pending requests land.
    fn effective_path(&self) -> &str {
        self.requested_path.as_deref().unwrap_or(&self.current_path)
    }

    /// Records a path reported by the history and returns the view it addresses.
    pub fn observe_path(&mut self, path: &str) -> ViewState {
        if self.requested_path.as_deref() == Some(path) {
            self.requested_path = None;
        }
        if self.current_path != path {
            self.current_path = path.to_string();
        }
        derive_view_from_path(path)
    }

    /// Writes `derived` into the store unless the store already shows it (or
    /// one of its panels). Returns whether a write happened.
    pub fn sync_view(&self, derived: ViewState, view: &mut ViewStore) -> bool {
        if view.get().surface() == derived {
            return false;
        }
        view.set(derived)
    }

    /// Returns the path to request from the history, or `None` when the
    /// history is already at (or already heading to) `path`.
    pub fn request_path(&mut self, path: String) -> Option<String> {
        if self.effective_path() == path {
            return None;
        }
        self.requested_path = Some(path.clone());
        Some(path)
    }

    /// Validates and applies a user-initiated view change.
    ///
    /// On success the returned path (if any) must be handed to the history; it
    /// is computed before the store is written. On rejection nothing changes.
    pub fn request_view_change(
        &mut self,
        target: ViewState,
        ctx: &NavContext<'_>,
        view: &mut ViewStore,
    ) -> Result<Option<String>, GuardRejection> {
        check_guard(target, ctx)?;
        let path = canonical_path(target, ctx.selected).ok_or(GuardRejection::NoSelection)?;

        let request = self.request_path(path);
        view.set(target);

        log::debug!(
            "view change to {target} accepted (path request: {:?})",
            request
        );
        Ok(request)
    }
}
