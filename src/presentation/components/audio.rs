//! Audio player component

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{audio::CHAPTERS, text::format_duration},
    infrastructure::tui::Frame,
    presentation::widgets::progress_line::ProgressLine,
};

#[derive(Debug, Clone, Default)]
pub struct AudioComponent;

impl AudioComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let playback = &state.playback;
        let title = state
            .entity
            .selected()
            .map(|book| format!(" {} · narrated by {} ", book.title, book.author))
            .unwrap_or_else(|| " Audio ".to_string());

        let block = Block::bordered().title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [status_area, progress_area, chapters_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let chapter = playback.current_chapter();
        let status = vec![
            Line::from(vec![
                Span::raw(if playback.is_playing() { "▶ Playing  " } else { "⏸ Paused  " }),
                Span::styled(
                    format!("Chapter {}: {}", chapter.number, chapter.title),
                    Style::default().bold(),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} / {}   Speed {}x   Volume {}%",
                    format_duration(playback.position()),
                    format_duration(playback.duration()),
                    playback.speed(),
                    playback.volume()
                ),
                styles.style("muted"),
            )),
        ];
        frame.render_widget(Paragraph::new(status), status_area);
        frame.render_widget(
            ProgressLine::new("", playback.percent()).style(styles.style("progress")),
            progress_area,
        );

        let items: Vec<ListItem> = CHAPTERS
            .iter()
            .map(|c| {
                ListItem::new(format!(
                    "{:>2}. {:<32} {}",
                    c.number,
                    c.title,
                    format_duration(c.duration)
                ))
            })
            .collect();
        let current = CHAPTERS.iter().position(|c| c.number == chapter.number);
        let list = List::new(items)
            .block(Block::new().borders(Borders::TOP).title(" Chapters "))
            .highlight_style(styles.style("highlight"));
        let mut list_state = ListState::default().with_selected(current);
        frame.render_stateful_widget(list, chapters_area, &mut list_state);
    }
}
