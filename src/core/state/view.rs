use crate::domain::view::ViewState;

/// Single source of truth for the active top-level view.
///
/// Only the navigation synchronizer writes it; screens read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStore {
    active: ViewState,
    /// Number of writes that actually changed the view
    revision: u64,
}

impl ViewStore {
    pub fn new(active: ViewState) -> Self {
        Self {
            active,
            revision: 0,
        }
    }

    pub fn get(&self) -> ViewState {
        self.active
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns whether the value changed. Writing the current value is a no-op.
    pub(crate) fn set(&mut self, view: ViewState) -> bool {
        if self.active == view {
            return false;
        }
        log::debug!("view: {} -> {}", self.active, view);
        self.active = view;
        self.revision += 1;
        true
    }
}
