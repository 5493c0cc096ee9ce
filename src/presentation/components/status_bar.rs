//! Status bar component
//!
//! Shows the active notice, or key hints for the current view.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{notice::NoticeLevel, view::ViewState},
    infrastructure::tui::Frame,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        frame.render_widget(Clear, area);

        let line = match state.system.notice() {
            Some(notice) => {
                let key = match notice.level {
                    NoticeLevel::Info => "notice_info",
                    NoticeLevel::Success => "notice_success",
                    NoticeLevel::Error => "notice_error",
                };
                Line::styled(notice.text.clone(), styles.style(key))
            }
            None => Line::styled(self.hints(state), styles.style("muted")),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Key hints for the current view.
    pub fn hints(&self, state: &AppState) -> &'static str {
        if state.onboarding.is_active() {
            return "q quit";
        }
        match state.view.get() {
            ViewState::Library => "enter read · a listen · tab section · g genre · f favorite · q quit",
            ViewState::Reader => "←→ page · +/- margin · t theme · a listen · esc library",
            ViewState::Audio => "space play · ←→ skip · ↑↓ chapter · s speed · +/- volume",
            ViewState::Ai => "←→ tab · ↑↓ chapter · r summarize · esc library",
            ViewState::Stats => "esc library · backspace back",
            ViewState::Settings => "↑↓ select · ←→ change · enter toggle · esc library",
        }
    }
}
