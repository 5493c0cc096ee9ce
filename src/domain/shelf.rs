//! Library sections and the shelves they are made of

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::domain::book::Book;

/// Tabs of the library screen. The full title list comes first so the
/// library opens on every title.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum LibrarySection {
    #[default]
    #[strum(to_string = "My library")]
    MyLibrary,
    Home,
    Categories,
    Authors,
}

impl LibrarySection {
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }

    pub fn index(self) -> usize {
        Self::iter().position(|s| s == self).unwrap_or(0)
    }
}

/// A titled row of books.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf<'a> {
    pub title: String,
    pub books: Vec<&'a Book>,
}

impl<'a> Shelf<'a> {
    pub fn new(title: impl Into<String>, books: Vec<&'a Book>) -> Self {
        Self {
            title: title.into(),
            books,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
