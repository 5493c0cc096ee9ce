//! Header component
//!
//! View tabs on the left; current path and subscription badge on the right.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState, domain::view::ViewState, infrastructure::tui::Frame,
    presentation::widgets::tab_bar::TabBarWidget,
};

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let badge = self.badge(state);
        let path = state.current_path();
        let right_width = (badge.chars().count() + path.chars().count() + 3) as u16;

        let [tabs_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        let titles: Vec<&str> = ViewState::iter().map(|view| view.title()).collect();
        let selected = ViewState::iter()
            .position(|view| view == state.view.get())
            .unwrap_or(0);
        let tabs = TabBarWidget::new(titles, selected)
            .style(styles.style("header_inactive"))
            .highlight_style(styles.style("header_active"));
        frame.render_widget(tabs, tabs_area);

        let right = Line::from(vec![
            Span::styled(path.to_string(), styles.style("path")),
            Span::raw("  "),
            Span::styled(badge, styles.style("premium_badge")),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(right), right_area);
    }

    pub fn badge(&self, state: &AppState) -> &'static str {
        if state.premium.is_premium() {
            "★ Premium"
        } else {
            "Free"
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn test_badge_follows_subscription() {
        let mut state = AppState::new(Config::default(), true);
        let header = HeaderComponent::new();
        assert_eq!(header.badge(&state), "Free");
        state.premium.upgrade();
        assert_eq!(header.badge(&state), "★ Premium");
    }

    #[test]
    fn test_renders_tabs_and_path() -> color_eyre::Result<()> {
        let state = AppState::new(Config::default(), true);
        let mut terminal = Terminal::new(TestBackend::new(100, 1))?;
        terminal.draw(|f| HeaderComponent::new().view(&state, f, f.area()))?;

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("1 Library"));
        assert!(content.contains("6 Settings"));
        assert!(content.contains('/'));
        Ok(())
    }
}
