//! Library component
//!
//! Section tabs and the shelves of the active section on the left, details
//! of the highlighted title on the right. `My library` is laid out as a grid.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{
        book::Book,
        shelf::{LibrarySection, Shelf},
    },
    infrastructure::tui::Frame,
    presentation::widgets::progress_line::ProgressLine,
};

const GRID_CELL_WIDTH: u16 = 26;
const GRID_CELL_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct LibraryComponent;

impl LibraryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);

        self.view_list(state, frame, list_area);
        if let Some(book) = state.library.highlighted() {
            self.view_details(state, book, frame, detail_area);
        }
    }

    fn view_list(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let section = state.library.section();
        let shelves = state.library.shelves();

        let title = match section {
            LibrarySection::MyLibrary => format!(
                " Library · {} ({}) ",
                state.library.filter().label(),
                shelves.iter().map(|shelf| shelf.books.len()).sum::<usize>()
            ),
            other => format!(" Library · {other} "),
        };
        let block = Block::bordered().title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tabs_area, shelves_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
        let tabs = Tabs::new(LibrarySection::iter().map(|s| s.to_string()))
            .select(section.index())
            .style(styles.style("header_inactive"))
            .highlight_style(styles.style("header_active"));
        frame.render_widget(tabs, tabs_area);

        match section {
            LibrarySection::MyLibrary => {
                let books: Vec<&Book> = shelves.into_iter().flat_map(|s| s.books).collect();
                self.view_grid(state, &books, frame, shelves_area);
            }
            _ => self.view_shelves(state, &shelves, frame, shelves_area),
        }
    }

    /// Shelf headers followed by their titles. Headers are not selectable, so
    /// the cursor is mapped onto list rows.
    fn view_shelves(&self, state: &AppState, shelves: &[Shelf<'_>], frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut items = Vec::new();
        let mut selected = None;
        let mut index = 0;
        for shelf in shelves {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} ({})", shelf.title, shelf.books.len()),
                styles.style("muted").add_modifier(Modifier::BOLD),
            ))));
            for book in &shelf.books {
                if index == state.library.cursor() {
                    selected = Some(items.len());
                }
                items.push(ListItem::new(self.book_line(state, book)));
                index += 1;
            }
        }

        let list = List::new(items).highlight_style(styles.style("highlight"));
        let mut list_state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn view_grid(&self, state: &AppState, books: &[&Book], frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let columns = usize::from((area.width / GRID_CELL_WIDTH).max(1));
        let rows = usize::from((area.height / GRID_CELL_HEIGHT).max(1));
        let cursor = state.library.cursor();
        let first_row = (cursor / columns).saturating_sub(rows - 1);

        for (index, book) in books
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(rows * columns)
        {
            let (row, column) = (index / columns - first_row, index % columns);
            let cell = Rect::new(
                area.x + column as u16 * GRID_CELL_WIDTH,
                area.y + row as u16 * GRID_CELL_HEIGHT,
                GRID_CELL_WIDTH,
                GRID_CELL_HEIGHT,
            )
            .intersection(area);

            let title_style = if index == cursor {
                styles.style("highlight")
            } else if book.requires_premium {
                styles.style("premium_title")
            } else {
                Style::default()
            };
            let lines = vec![
                Line::from(Span::styled(book.title.clone(), title_style)),
                Line::from(Span::styled(
                    format!("{} {}", self.markers(book), book.author),
                    styles.style("muted"),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), cell);
        }
    }

    fn book_line(&self, state: &AppState, book: &Book) -> Line<'static> {
        let styles = &state.config.config.styles;
        let title_style = if book.requires_premium {
            styles.style("premium_title")
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{} ", self.markers(book))),
            Span::styled(book.title.clone(), title_style),
            Span::styled(format!("  {}", book.author), styles.style("muted")),
        ])
    }

    fn view_details(&self, state: &AppState, book: &Book, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::bordered().title(" Details ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [text_area, progress_area, _rest] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let mut lines = vec![
            Line::from(book.title.clone().bold()),
            Line::from(book.author.clone()),
            Line::from(Span::styled(
                format!("{} · ★ {:.1}", book.genre, book.rating),
                styles.style("muted"),
            )),
            Line::default(),
        ];
        if book.requires_premium {
            lines.push(Line::from(Span::styled(
                "Premium title",
                styles.style("premium_badge"),
            )));
        }
        if book.has_audio_edition {
            lines.push(Line::from("Audio edition available"));
        }
        if book.is_downloaded {
            lines.push(Line::from(Span::styled(
                "Downloaded",
                styles.style("muted"),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);
        frame.render_widget(
            ProgressLine::new("Read", u16::from(book.progress)).style(styles.style("progress")),
            progress_area,
        );
    }

    /// Three fixed-width marker cells: favorite, premium, audio.
    pub fn markers(&self, book: &Book) -> String {
        [
            if book.is_favorite { '♥' } else { ' ' },
            if book.requires_premium { '◆' } else { ' ' },
            if book.has_audio_edition { '♪' } else { ' ' },
        ]
        .iter()
        .collect()
    }
}
