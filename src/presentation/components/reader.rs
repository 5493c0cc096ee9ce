//! Reader component
//!
//! One page of the open title in the reading palette, with page progress.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, infrastructure::tui::Frame, presentation::theme::Palette,
    presentation::widgets::progress_line::ProgressLine,
};

#[derive(Debug, Clone, Default)]
pub struct ReaderComponent;

impl ReaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(state.reader.theme);
        let Some(book) = state.entity.selected() else {
            frame.render_widget(
                Paragraph::new("Select a title from your library").centered(),
                area,
            );
            return;
        };

        let block = Block::bordered()
            .title(format!(" {} · {} ", book.title, book.author))
            .style(palette.page());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [page_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let margin = u16::from(state.reader.margin) * 2;
        let text_area = page_area.inner(Margin {
            horizontal: margin.min(page_area.width / 3),
            vertical: 1,
        });
        let page = book
            .pages()
            .get(state.reader.page())
            .map(String::as_str)
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(page)
                .style(palette.page())
                .wrap(Wrap { trim: true }),
            text_area,
        );

        let label = format!(
            "Page {}/{}",
            state.reader.page() + 1,
            state.reader.total_pages().max(1)
        );
        frame.render_widget(
            ProgressLine::new(&label, state.reader.percent()).style(palette.accent()),
            footer_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::infrastructure::config::Config;

    fn render(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 20))?;
        terminal.draw(|f| ReaderComponent::new().view(state, f, f.area()))?;
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect())
    }

    #[test]
    fn test_renders_open_title() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::default(), true);
        let book = state.library.book("2").cloned();
        if let Some(book) = &book {
            state.reader.open(book);
        }
        state.entity.set_selected(book);

        let content = render(&state)?;
        assert!(content.contains("Mindfulness for Beginners"));
        assert!(content.contains("Page 1/"));
        Ok(())
    }

    #[test]
    fn test_renders_placeholder_without_selection() -> color_eyre::Result<()> {
        let state = AppState::new(Config::default(), true);
        assert!(render(&state)?.contains("Select a title"));
        Ok(())
    }
}
