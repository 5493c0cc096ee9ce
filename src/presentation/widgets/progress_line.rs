use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// One-line progress indicator: `label ███████░░░░ 45%`.
#[derive(Clone, Debug)]
pub struct ProgressLine<'a> {
    label: &'a str,
    percent: u16,
    style: Style,
}

impl<'a> ProgressLine<'a> {
    pub fn new(label: &'a str, percent: u16) -> Self {
        Self {
            label,
            percent: percent.min(100),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Filled cells for a bar of `width` cells.
    pub fn filled(&self, width: u16) -> u16 {
        ((u32::from(width) * u32::from(self.percent)) / 100) as u16
    }
}

impl<'a> Widget for ProgressLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.height == 0 {
            return;
        }
        let suffix = format!(" {:>3}%", self.percent);
        let label = if self.label.is_empty() {
            String::new()
        } else {
            format!("{} ", self.label)
        };
        let reserved = (label.chars().count() + suffix.len()) as u16;
        let bar_width = area.width.saturating_sub(reserved);
        let filled = self.filled(bar_width);

        let line = Line::from(vec![
            Span::raw(label),
            Span::styled("█".repeat(filled as usize), self.style),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled) as usize),
                Style::default().dim(),
            ),
            Span::raw(suffix),
        ]);
        line.render(area, buf);
    }
}
