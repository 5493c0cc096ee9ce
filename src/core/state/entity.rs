use crate::domain::book::Book;

/// Holds the title currently in focus. No validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    selected: Option<Book>,
}

impl EntityStore {
    pub fn set_selected(&mut self, book: Option<Book>) {
        self.selected = book;
    }

    pub fn selected(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|book| book.id.as_str())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Keeps the focused copy in step with catalog edits (e.g. favorites).
    pub fn refresh(&mut self, book: &Book) {
        if let Some(selected) = self.selected.as_mut() {
            if selected.id == book.id {
                *selected = book.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = EntityStore::default();
        assert_eq!(store.selected(), None);

        let book = Book::new("7", "Title", "Author");
        store.set_selected(Some(book.clone()));
        assert_eq!(store.selected(), Some(&book));
        assert_eq!(store.selected_id(), Some("7"));

        store.clear();
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_refresh_only_touches_same_id() {
        let mut store = EntityStore::default();
        store.set_selected(Some(Book::new("1", "One", "A")));

        let mut other = Book::new("2", "Two", "B");
        other.is_favorite = true;
        store.refresh(&other);
        assert_eq!(store.selected_id(), Some("1"));
        assert!(!store.selected().is_some_and(|b| b.is_favorite));

        let mut same = Book::new("1", "One", "A");
        same.is_favorite = true;
        store.refresh(&same);
        assert!(store.selected().is_some_and(|b| b.is_favorite));
    }
}
