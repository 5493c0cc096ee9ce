pub mod ai;
pub mod entity;
pub mod library;
pub mod onboarding;
pub mod playback;
pub mod premium;
pub mod reader;
pub mod settings;
pub mod system;
pub mod view;

use crate::{
    core::navigation::{NavContext, Synchronizer},
    domain::{preferences::OnboardingPreferences, preferences::Theme, stats::ReadingStats},
    infrastructure::config::Config,
};

use ai::AiState;
use entity::EntityStore;
use library::LibraryState;
use onboarding::OnboardingState;
use playback::PlaybackState;
use premium::PremiumGate;
use reader::ReaderState;
use settings::SettingsState;
use system::SystemState;
use view::ViewStore;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: ViewStore,
    pub entity: EntityStore,
    pub navigation: Synchronizer,
    pub premium: PremiumGate,
    pub onboarding: OnboardingState,
    pub library: LibraryState,
    pub reader: ReaderState,
    pub playback: PlaybackState,
    pub settings: SettingsState,
    pub ai: AiState,
    pub stats: ReadingStats,
    /// Choices from the onboarding wizard, once completed
    pub preferences: Option<OnboardingPreferences>,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// `visited` is the onboarding latch read from durable storage.
    pub fn new(config: Config, visited: bool) -> Self {
        Self {
            onboarding: OnboardingState::new(visited),
            playback: PlaybackState::new(config.playback.skip_seconds),
            system: SystemState::new(config.notice_ticks),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Snapshot the navigation guards are evaluated against.
    pub fn nav_context(&self) -> NavContext<'_> {
        NavContext::new(self.entity.selected(), self.premium.is_premium())
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn current_path(&self) -> &str {
        self.navigation.current_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view::ViewState;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.view.get(), ViewState::Library);
        assert!(state.entity.selected().is_none());
        assert!(!state.premium.is_premium());
        assert!(!state.system.should_quit);
        assert_eq!(state.current_path(), "/");
    }

    #[test]
    fn test_new_respects_latch() {
        assert!(AppState::new(Config::default(), false).onboarding.is_active());
        assert!(!AppState::new(Config::default(), true).onboarding.is_active());
    }

    #[test]
    fn test_nav_context_reflects_stores() {
        let mut state = AppState::default();
        state.entity.set_selected(state.library.book("1").cloned());
        state.premium.upgrade();

        let ctx = state.nav_context();
        assert_eq!(ctx.selected.map(|b| b.id.as_str()), Some("1"));
        assert!(ctx.is_premium);
    }
}
