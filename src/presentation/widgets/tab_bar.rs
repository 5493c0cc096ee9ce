use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// Row of numbered tabs, one per top-level view.
#[derive(Clone, Debug)]
pub struct TabBarWidget<'a> {
    titles: Vec<&'a str>,
    selected: usize,
    style: Style,
    highlight_style: Style,
}

impl<'a> TabBarWidget<'a> {
    pub fn new(titles: Vec<&'a str>, selected: usize) -> Self {
        Self {
            titles,
            selected,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Titles prefixed with the digit that selects them.
    pub fn labels(&self) -> Vec<String> {
        self.titles
            .iter()
            .enumerate()
            .map(|(i, title)| format!("{} {title}", i + 1))
            .collect()
    }
}

impl<'a> Widget for TabBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = ratatui::widgets::Tabs::new(self.labels())
            .select(self.selected)
            .style(self.style)
            .highlight_style(self.highlight_style);

        tabs.render(area, buf);
    }
}
