use crate::{
    core::msg::reader::ReaderMsg,
    domain::{
        book::Book,
        preferences::{cycle, Theme},
    },
};

pub const MIN_MARGIN: u16 = 0;
pub const MAX_MARGIN: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderState {
    book_id: Option<String>,
    page: usize,
    total_pages: usize,
    /// Horizontal padding around the page, in cells
    pub margin: u16,
    pub theme: Theme,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            book_id: None,
            page: 0,
            total_pages: 0,
            margin: 2,
            theme: Theme::default(),
        }
    }
}

impl ReaderState {
    /// Binds the reader to `book`. Reopening the same title keeps the page.
    pub fn open(&mut self, book: &Book) {
        if self.book_id.as_deref() != Some(book.id.as_str()) {
            self.book_id = Some(book.id.clone());
            self.page = 0;
        }
        self.total_pages = book.pages().len();
        self.page = self.page.min(self.total_pages.saturating_sub(1));
    }

    pub fn book_id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Reading progress through the open title, in percent.
    pub fn percent(&self) -> u16 {
        if self.total_pages == 0 {
            return 0;
        }
        (((self.page + 1) * 100) / self.total_pages) as u16
    }

    pub fn update(&mut self, msg: ReaderMsg) {
        match msg {
            ReaderMsg::NextPage => {
                if self.page + 1 < self.total_pages {
                    self.page += 1;
                }
            }
            ReaderMsg::PreviousPage => {
                self.page = self.page.saturating_sub(1);
            }
            ReaderMsg::IncreaseMargin => {
                self.margin = (self.margin + 1).min(MAX_MARGIN);
            }
            ReaderMsg::DecreaseMargin => {
                self.margin = self.margin.saturating_sub(1);
            }
            ReaderMsg::CycleTheme => {
                self.theme = cycle(self.theme);
            }
        }
    }
}
