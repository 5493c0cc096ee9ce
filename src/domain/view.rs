use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Top-level experience currently shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Library,
    Reader,
    Audio,
    Ai,
    Stats,
    Settings,
}

impl ViewState {
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Library => "Library",
            ViewState::Reader => "Reader",
            ViewState::Audio => "Audio",
            ViewState::Ai => "AI",
            ViewState::Stats => "Stats",
            ViewState::Settings => "Settings",
        }
    }

    /// Whether this view can only be shown with a selected title.
    pub fn requires_entity(&self) -> bool {
        matches!(self, ViewState::Reader | ViewState::Audio)
    }

    /// The view a path can address. AI and stats are panels of the library
    /// surface and share its path.
    pub fn surface(&self) -> ViewState {
        match self {
            ViewState::Ai | ViewState::Stats => ViewState::Library,
            other => *other,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_is_library() {
        assert_eq!(ViewState::default(), ViewState::Library);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(ViewState::Settings.to_string(), "settings");
        assert_eq!(ViewState::Ai.to_string(), "ai");
    }

    #[test]
    fn test_requires_entity() {
        let gated: Vec<ViewState> = ViewState::iter().filter(|v| v.requires_entity()).collect();
        assert_eq!(gated, vec![ViewState::Reader, ViewState::Audio]);
    }

    #[test]
    fn test_surface() {
        assert_eq!(ViewState::Ai.surface(), ViewState::Library);
        assert_eq!(ViewState::Stats.surface(), ViewState::Library);
        assert_eq!(ViewState::Reader.surface(), ViewState::Reader);
    }
}
