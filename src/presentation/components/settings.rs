//! Settings component

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{settings::SettingsState, AppState},
    infrastructure::tui::Frame,
};

#[derive(Debug, Clone, Default)]
pub struct SettingsComponent;

impl SettingsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let settings = &state.settings;
        let width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = SettingsState::items()
            .map(|item| {
                let label = item.to_string();
                let value = settings.value_label(item);
                let gap = width.saturating_sub(label.chars().count() + value.chars().count());
                ListItem::new(format!("{label}{}{value}", " ".repeat(gap)))
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(" Settings "))
            .highlight_style(styles.style("highlight"));
        let mut list_state = ListState::default().with_selected(Some(settings.cursor()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
