//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, domain::view::ViewState};

pub mod ai_panel;
pub mod audio;
pub mod header;
pub mod library;
pub mod onboarding;
pub mod premium_modal;
pub mod reader;
pub mod settings;
pub mod stats;
pub mod status_bar;

pub use ai_panel::AiPanelComponent;
pub use audio::AudioComponent;
pub use header::HeaderComponent;
pub use library::LibraryComponent;
pub use onboarding::OnboardingComponent;
pub use premium_modal::PremiumModalComponent;
pub use reader::ReaderComponent;
pub use settings::SettingsComponent;
pub use stats::StatsComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub library: LibraryComponent,
    pub reader: ReaderComponent,
    pub audio: AudioComponent,
    pub ai: AiPanelComponent,
    pub stats: StatsComponent,
    pub settings: SettingsComponent,
    pub onboarding: OnboardingComponent,
    pub premium_modal: PremiumModalComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// The active view is taken from the view store only; the path is shown
    /// but never consulted for what to draw.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        // [header, main area, status bar]
        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if state.onboarding.is_active() {
            self.onboarding.view(state, frame, header_area.union(main_area));
            self.status_bar.view(state, frame, status_area);
            return;
        }

        self.header.view(state, frame, header_area);
        match state.view.get() {
            ViewState::Library => self.library.view(state, frame, main_area),
            ViewState::Reader => self.reader.view(state, frame, main_area),
            ViewState::Audio => self.audio.view(state, frame, main_area),
            ViewState::Ai => self.ai.view(state, frame, main_area),
            ViewState::Stats => self.stats.view(state, frame, main_area),
            ViewState::Settings => self.settings.view(state, frame, main_area),
        }
        self.status_bar.view(state, frame, status_area);
        self.premium_modal.view(state, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use rstest::rstest;

    use super::*;
    use crate::{core::state::view::ViewStore, infrastructure::config::Config};

    fn render(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
        terminal.draw(|f| Components::new().render(f, state))?;
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect())
    }

    #[rstest]
    #[case(ViewState::Library, "Library · All")]
    #[case(ViewState::Audio, "Chapters")]
    #[case(ViewState::Ai, "AI assistant")]
    #[case(ViewState::Stats, "Reading stats")]
    #[case(ViewState::Settings, "Font size")]
    fn test_renders_active_view(
        #[case] view: ViewState,
        #[case] expected: &str,
    ) -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::default(), true);
        state.view = ViewStore::new(view);
        assert!(render(&state)?.contains(expected));
        Ok(())
    }

    #[test]
    fn test_onboarding_replaces_views() -> color_eyre::Result<()> {
        let state = AppState::new(Config::default(), false);
        let content = render(&state)?;
        assert!(content.contains("Welcome to Eduletter"));
        assert!(!content.contains("1 Library"));
        Ok(())
    }

    #[test]
    fn test_premium_modal_overlays() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::default(), true);
        state.premium.request_upsell();
        assert!(render(&state)?.contains("Eduletter Premium"));
        Ok(())
    }
}
