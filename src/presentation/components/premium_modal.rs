//! Premium upsell modal

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::premium::{FEATURES, PLANS},
    infrastructure::tui::Frame,
};

#[derive(Debug, Clone, Default)]
pub struct PremiumModalComponent;

impl PremiumModalComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.premium.is_modal_open() {
            return;
        }
        let styles = &state.config.config.styles;
        let popup = centered(area, 70, 20);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .title(" Eduletter Premium ")
            .border_style(styles.style("modal_border"));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines: Vec<Line> = FEATURES
            .iter()
            .map(|(name, description)| {
                Line::from(vec![
                    Span::styled(format!("✓ {name}: "), Style::default().bold()),
                    Span::raw(*description),
                ])
            })
            .collect();
        lines.push(Line::default());

        for (i, plan) in PLANS.iter().enumerate() {
            let mut text = format!("{} {}{}", plan.name, plan.price, plan.period);
            if let Some(savings) = plan.savings {
                text.push_str(&format!(" · {savings}"));
            }
            if plan.popular {
                text.push_str(" · most popular");
            }
            let line = if i == state.premium.selected_plan() {
                Line::styled(format!("▸ {text}"), styles.style("highlight"))
            } else {
                Line::from(format!("  {text}"))
            };
            lines.push(line);
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "←→ choose plan · enter subscribe · esc close",
            styles.style("muted"),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

/// Rect of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
