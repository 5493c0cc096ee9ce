//! Onboarding wizard
//!
//! Full-screen; shown instead of the regular views until completed once.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::{onboarding::OnboardingStep, AppState},
    domain::preferences::{Language, PreferredFormat, ReadingGoal, Theme, INTERESTS},
    infrastructure::tui::Frame,
};

#[derive(Debug, Clone, Default)]
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let onboarding = &state.onboarding;
        let step = onboarding.step();

        let block = Block::bordered().title(format!(
            " Welcome to Eduletter · step {}/{}: {step} ",
            step.index() + 1,
            OnboardingStep::count()
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let draft = onboarding.draft();
        let lines: Vec<Line> = match step {
            OnboardingStep::Welcome => vec![
                Line::from("Your library of books and audiobooks, in the terminal.".bold()),
                Line::default(),
                Line::from("A few questions to tailor the experience."),
            ],
            OnboardingStep::Theme => options(Theme::iter(), draft.theme),
            OnboardingStep::Language => options(Language::iter(), draft.language),
            OnboardingStep::Goal => options(ReadingGoal::iter(), draft.reading_goal),
            OnboardingStep::Format => options(PreferredFormat::iter(), draft.preferred_format),
            OnboardingStep::Interests => INTERESTS
                .iter()
                .enumerate()
                .map(|(i, interest)| {
                    let mark = if draft.has_interest(interest) { "[x]" } else { "[ ]" };
                    let line = Line::from(format!("{mark} {interest}"));
                    if i == onboarding.cursor() {
                        line.style(styles.style("highlight"))
                    } else {
                        line
                    }
                })
                .collect(),
        };
        frame.render_widget(Paragraph::new(lines), body_area.inner(Margin::new(2, 1)));

        let hint = match step {
            OnboardingStep::Interests => "↑↓ move · space toggle · enter next · esc back",
            OnboardingStep::Format => "↑↓ choose · enter finish · esc back",
            _ => "↑↓ choose · enter next · esc back",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, styles.style("muted"))),
            hint_area,
        );
    }
}

fn options<T>(all: impl Iterator<Item = T>, selected: T) -> Vec<Line<'static>>
where
    T: PartialEq + ToString,
{
    all.map(|option| {
        if option == selected {
            Line::from(format!("● {}", option.to_string()).bold())
        } else {
            Line::from(format!("○ {}", option.to_string()))
        }
    })
    .collect()
}
