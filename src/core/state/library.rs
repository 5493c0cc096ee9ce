use crate::{
    core::msg::library::LibraryMsg,
    domain::{
        book::Book,
        catalog::{Catalog, GenreFilter},
        notice::Notice,
        shelf::{LibrarySection, Shelf},
    },
};

/// Library screen: a section tab and a cursor over the titles of its
/// shelves, read top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryState {
    pub catalog: Catalog,
    section: LibrarySection,
    cursor: usize,
    filter: GenreFilter,
}

impl LibraryState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            section: LibrarySection::default(),
            cursor: 0,
            filter: GenreFilter::All,
        }
    }

    pub fn section(&self) -> LibrarySection {
        self.section
    }

    pub fn shelves(&self) -> Vec<Shelf<'_>> {
        self.catalog.shelves(self.section, &self.filter)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> &GenreFilter {
        &self.filter
    }

    /// Titles in cursor order. A title on several shelves appears once per shelf.
    pub fn visible(&self) -> Vec<&Book> {
        self.shelves()
            .into_iter()
            .flat_map(|shelf| shelf.books)
            .collect()
    }

    /// Title under the cursor.
    pub fn highlighted(&self) -> Option<&Book> {
        self.visible().get(self.cursor).copied()
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.catalog.get(id)
    }

    /// Handles messages that only touch the library. Returns the updated title
    /// when its favorite flag changed, and a notice to surface.
    pub fn update(&mut self, msg: LibraryMsg) -> (Option<Book>, Option<Notice>) {
        match msg {
            LibraryMsg::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                (None, None)
            }
            LibraryMsg::CursorDown => {
                let len = self.visible().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                (None, None)
            }
            // The genre filter only applies to the full title list
            LibraryMsg::CycleGenre => {
                self.filter = self.catalog.next_filter(&self.filter);
                self.section = LibrarySection::MyLibrary;
                self.cursor = 0;
                (None, None)
            }
            LibraryMsg::NextSection => {
                self.section = self.section.next();
                self.cursor = 0;
                (None, None)
            }
            LibraryMsg::PreviousSection => {
                self.section = self.section.previous();
                self.cursor = 0;
                (None, None)
            }
            LibraryMsg::ToggleFavorite(id) => match self.catalog.toggle_favorite(&id) {
                Some(favorite) => {
                    let book = self.catalog.get(&id).cloned();
                    let title = book.as_ref().map(|b| b.title.clone()).unwrap_or_default();
                    let notice = if favorite {
                        Notice::success(format!("Added \"{title}\" to favorites"))
                    } else {
                        Notice::info(format!("Removed \"{title}\" from favorites"))
                    };
                    (book, Some(notice))
                }
                None => (None, Some(Notice::error(format!("Unknown title {id}")))),
            },
            // Opening a title goes through navigation
            LibraryMsg::Open(_) | LibraryMsg::Play(_) => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cursor_is_clamped() {
        let mut library = LibraryState::default();
        library.update(LibraryMsg::CursorUp);
        assert_eq!(library.cursor(), 0);

        for _ in 0..50 {
            library.update(LibraryMsg::CursorDown);
        }
        assert_eq!(library.cursor(), library.catalog.len() - 1);
    }

    #[test]
    fn test_cycle_genre_resets_cursor() {
        let mut library = LibraryState::default();
        library.update(LibraryMsg::CursorDown);
        library.update(LibraryMsg::CycleGenre);

        assert_eq!(library.cursor(), 0);
        assert!(matches!(library.filter(), GenreFilter::Genre(_)));
        let genre = library.filter().label().to_string();
        assert!(library.visible().iter().all(|b| b.genre == genre));
    }

    #[test]
    fn test_sections_reset_cursor() {
        let mut library = LibraryState::default();
        library.update(LibraryMsg::CursorDown);
        library.update(LibraryMsg::NextSection);

        assert_eq!(library.section(), LibrarySection::Home);
        assert_eq!(library.cursor(), 0);

        library.update(LibraryMsg::PreviousSection);
        library.update(LibraryMsg::PreviousSection);
        assert_eq!(library.section(), LibrarySection::Authors);
    }

    #[rstest]
    #[case(LibrarySection::MyLibrary, 0, "1")]
    #[case(LibrarySection::MyLibrary, 1, "2")]
    // continue reading is 1, 2, 3, 5, 6; the pick of the month follows
    #[case(LibrarySection::Home, 5, "1")]
    #[case(LibrarySection::Home, 6, "3")]
    #[case(LibrarySection::Categories, 2, "10")]
    #[case(LibrarySection::Authors, 1, "7")]
    fn test_cursor_walks_shelves_in_order(
        #[case] section: LibrarySection,
        #[case] steps: usize,
        #[case] expected: &str,
    ) {
        let mut library = LibraryState::default();
        while library.section() != section {
            library.update(LibraryMsg::NextSection);
        }
        for _ in 0..steps {
            library.update(LibraryMsg::CursorDown);
        }
        assert_eq!(library.highlighted().map(|b| b.id.as_str()), Some(expected));
    }

    #[test]
    fn test_cycle_genre_returns_to_full_list() {
        let mut library = LibraryState::default();
        library.update(LibraryMsg::NextSection);
        library.update(LibraryMsg::CycleGenre);

        assert_eq!(library.section(), LibrarySection::MyLibrary);
        assert_eq!(library.shelves().len(), 1);
    }

    #[test]
    fn test_toggle_favorite_returns_updated_book() {
        let mut library = LibraryState::default();
        let before = library.book("2").map(|b| b.is_favorite);

        let (book, notice) = library.update(LibraryMsg::ToggleFavorite("2".into()));

        let book = book.expect("favorite toggle should return the title");
        assert_eq!(Some(!book.is_favorite), before);
        assert!(notice.is_some());
    }

    #[test]
    fn test_toggle_unknown_favorite() {
        let mut library = LibraryState::default();
        let (book, notice) = library.update(LibraryMsg::ToggleFavorite("nope".into()));
        assert_eq!(book, None);
        assert!(notice.is_some_and(|n| n.is_error()));
    }
}
