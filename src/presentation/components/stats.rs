//! Reading statistics panel

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::text::format_minutes, infrastructure::tui::Frame,
    presentation::widgets::progress_line::ProgressLine,
};

#[derive(Debug, Clone, Default)]
pub struct StatsComponent;

impl StatsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let stats = &state.stats;
        let block = Block::bordered().title(" Reading stats ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [summary_area, weekly_area, lists_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(inner);

        let summary = vec![
            Line::from(format!(
                "Streak {} days   Completed {}   Time {}   Speed {} wpm",
                stats.reading_streak,
                stats.books_completed,
                format_minutes(stats.total_minutes),
                stats.average_speed
            )),
            Line::from(Span::styled(
                format!(
                    "Weekly goal: {} of {} minutes",
                    stats.weekly_progress, stats.weekly_goal
                ),
                styles.style("muted"),
            )),
        ];
        frame.render_widget(Paragraph::new(summary), summary_area);
        frame.render_widget(
            ProgressLine::new("This week", stats.weekly_percent()).style(styles.style("progress")),
            weekly_area,
        );

        let [genres_area, achievements_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(lists_area);

        let genres: Vec<ListItem> = stats
            .genres
            .iter()
            .map(|genre| ListItem::new(format!("{:<12} {:>3}", genre.name, genre.count)))
            .collect();
        frame.render_widget(
            List::new(genres).block(Block::new().borders(Borders::TOP).title(" Genres ")),
            genres_area,
        );

        let achievements: Vec<ListItem> = stats
            .achievements
            .iter()
            .map(|a| {
                let style = if a.unlocked {
                    Style::default()
                } else {
                    styles.style("muted")
                };
                let mark = if a.unlocked { "✓" } else { "·" };
                ListItem::new(Line::styled(
                    format!("{mark} {} - {}", a.name, a.description),
                    style,
                ))
            })
            .collect();
        let title = format!(
            " Achievements {}/{} ",
            stats.unlocked_count(),
            stats.achievements.len()
        );
        frame.render_widget(
            List::new(achievements).block(Block::new().borders(Borders::TOP).title(title)),
            achievements_area,
        );
    }
}
