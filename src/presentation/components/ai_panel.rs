//! AI assistant panel
//!
//! Tabs for chapter summaries, the concept map and recommendations. A summary
//! fetched from the remote service is shown above the built-in one.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::{ai::AiTab, AppState},
    domain::ai::{concept_name, Recommendation, COMPLEMENTARY, CONCEPTS, RELATIONSHIPS, SIMILAR},
    infrastructure::tui::Frame,
};

#[derive(Debug, Clone, Default)]
pub struct AiPanelComponent;

impl AiPanelComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::bordered().title(" AI assistant ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !state.premium.is_premium() {
            let prompt = vec![
                Line::from("AI insights are part of Eduletter Premium".bold()),
                Line::from(Span::styled("press p to see the plans", styles.style("muted"))),
            ];
            frame.render_widget(Paragraph::new(prompt).centered(), inner);
            return;
        }

        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        let tabs = Tabs::new(AiTab::iter().map(|tab| tab.to_string()))
            .select(state.ai.tab.index())
            .highlight_style(styles.style("highlight"));
        frame.render_widget(tabs, tabs_area);

        let lines = match state.ai.tab {
            AiTab::Summaries => self.summary_lines(state),
            AiTab::Concepts => self.concept_lines(),
            AiTab::Recommendations => self.recommendation_lines(),
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);
    }

    fn summary_lines(&self, state: &AppState) -> Vec<Line<'static>> {
        let styles = &state.config.config.styles;
        let chapter = state.ai.chapter();
        let mut lines = vec![Line::from(
            format!("Chapter {}: {}", chapter.chapter, chapter.title).bold(),
        )];

        if state.ai.is_loading() {
            lines.push(Line::from(Span::styled(
                "Generating summary…",
                styles.style("muted"),
            )));
        }
        if let Some(remote) = state.ai.remote_summary() {
            lines.push(Line::from(remote.summary.clone()));
            lines.push(Line::from(Span::styled(
                format!("generated {}", remote.generated_at.format("%Y-%m-%d %H:%M")),
                styles.style("muted"),
            )));
        } else {
            lines.push(Line::from(chapter.summary));
        }

        lines.push(Line::default());
        lines.push(Line::from("Key points".bold()));
        lines.extend(
            chapter
                .key_points
                .iter()
                .map(|point| Line::from(format!("• {point}"))),
        );
        lines
    }

    fn concept_lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = CONCEPTS
            .iter()
            .map(|concept| {
                let connections: Vec<&str> = concept
                    .connections
                    .iter()
                    .filter_map(|id| concept_name(*id))
                    .collect();
                Line::from(vec![
                    Span::styled(concept.name, Style::default().bold()),
                    Span::raw(format!(" → {}", connections.join(", "))),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from("Relationships".bold()));
        lines.extend(RELATIONSHIPS.iter().map(|r| Line::from(format!("• {r}"))));
        lines
    }

    fn recommendation_lines(&self) -> Vec<Line<'static>> {
        let section = |title: &'static str, recs: &[Recommendation]| {
            let mut lines = vec![Line::from(title.bold())];
            lines.extend(recs.iter().map(|rec| {
                Line::from(format!("{:>3}%  {} · {}", rec.score, rec.title, rec.author))
            }));
            lines
        };
        let mut lines = section("Similar titles", &SIMILAR);
        lines.push(Line::default());
        lines.extend(section("Complementary reading", &COMPLEMENTARY));
        lines
    }
}
