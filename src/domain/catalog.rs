//! Built-in catalog
//!
//! The application ships with a fixed, in-memory list of titles. Genres are
//! derived from the titles in catalog order and drive the library filter.
//! The shelf queries keep catalog order among equal keys.

use serde::{Deserialize, Serialize};

use crate::domain::{
    book::Book,
    shelf::{LibrarySection, Shelf},
};

/// Lowest rating that makes the "top rated" shelf.
pub const TOP_RATED_MIN: f32 = 4.7;

/// Library filter: every title, or a single genre.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(genre) => &book.genre == genre,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GenreFilter::All => "All",
            GenreFilter::Genre(genre) => genre,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_books())
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Distinct genres in order of first appearance.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for book in &self.books {
            if !genres.contains(&book.genre.as_str()) {
                genres.push(&book.genre);
            }
        }
        genres
    }

    /// The filter that follows `current` when cycling: All, then each genre, then All again.
    pub fn next_filter(&self, current: &GenreFilter) -> GenreFilter {
        let genres = self.genres();
        let next = match current {
            GenreFilter::All => genres.first(),
            GenreFilter::Genre(genre) => genres
                .iter()
                .position(|g| *g == genre.as_str())
                .and_then(|index| genres.get(index + 1)),
        };
        next.map(|genre| GenreFilter::Genre(genre.to_string()))
            .unwrap_or_default()
    }

    pub fn filtered(&self, filter: &GenreFilter) -> Vec<&Book> {
        self.books.iter().filter(|book| filter.matches(book)).collect()
    }

    /// Titles with any reading progress.
    pub fn continue_reading(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.is_started()).collect()
    }

    pub fn monthly_picks(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.is_monthly_pick).collect()
    }

    pub fn new_releases(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.is_new_release).collect()
    }

    /// Titles with a read count, most read first.
    pub fn most_read(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.iter().filter(|book| book.read_count > 0).collect();
        books.sort_by(|a, b| b.read_count.cmp(&a.read_count));
        books
    }

    /// Titles rated at least [`TOP_RATED_MIN`], best first.
    pub fn top_rated(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.rating >= TOP_RATED_MIN)
            .collect();
        books.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        books
    }

    /// Distinct authors in order of first appearance.
    pub fn authors(&self) -> Vec<&str> {
        let mut authors: Vec<&str> = Vec::new();
        for book in &self.books {
            if !authors.contains(&book.author.as_str()) {
                authors.push(&book.author);
            }
        }
        authors
    }

    /// One shelf per genre.
    pub fn by_genre(&self) -> Vec<Shelf<'_>> {
        self.genres()
            .into_iter()
            .map(|genre| {
                Shelf::new(
                    genre,
                    self.books.iter().filter(|book| book.genre == genre).collect(),
                )
            })
            .collect()
    }

    /// One shelf per author.
    pub fn by_author(&self) -> Vec<Shelf<'_>> {
        self.authors()
            .into_iter()
            .map(|author| {
                Shelf::new(
                    author,
                    self.books.iter().filter(|book| book.author == author).collect(),
                )
            })
            .collect()
    }

    /// The home page. Most read and top rated always show; the other shelves
    /// only when they have titles.
    pub fn home_shelves(&self) -> Vec<Shelf<'_>> {
        [
            non_empty(Shelf::new("Continue reading", self.continue_reading())),
            non_empty(Shelf::new("Pick of the month", self.monthly_picks())),
            Some(Shelf::new("Most read", self.most_read())),
            Some(Shelf::new("Top rated", self.top_rated())),
            non_empty(Shelf::new("New releases", self.new_releases())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Shelves of a library section. `My library` is a single shelf of the
    /// titles matching `filter`.
    pub fn shelves(&self, section: LibrarySection, filter: &GenreFilter) -> Vec<Shelf<'_>> {
        match section {
            LibrarySection::MyLibrary => vec![Shelf::new(filter.label(), self.filtered(filter))],
            LibrarySection::Home => self.home_shelves(),
            LibrarySection::Categories => self.by_genre(),
            LibrarySection::Authors => self.by_author(),
        }
    }

    /// Flips the favorite mark of `id` and returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let book = self.books.iter_mut().find(|book| book.id == id)?;
        book.is_favorite = !book.is_favorite;
        Some(book.is_favorite)
    }
}

fn non_empty(shelf: Shelf<'_>) -> Option<Shelf<'_>> {
    (!shelf.is_empty()).then_some(shelf)
}

fn builtin_books() -> Vec<Book> {
    vec![
        Book {
            id: "1".into(),
            title: "The Art of Digital War".into(),
            author: "Marcus Chen".into(),
            genre: "Technology".into(),
            progress: 45,
            rating: 4.8,
            requires_premium: true,
            has_audio_edition: true,
            is_downloaded: true,
            is_favorite: true,
            read_count: 1245,
            is_monthly_pick: true,
            is_new_release: false,
            content: None,
        },
        Book {
            id: "2".into(),
            title: "Mindfulness for Beginners".into(),
            author: "Ana Sofía López".into(),
            genre: "Wellness".into(),
            progress: 78,
            rating: 4.6,
            requires_premium: false,
            has_audio_edition: true,
            is_downloaded: false,
            is_favorite: false,
            read_count: 890,
            is_monthly_pick: false,
            is_new_release: false,
            content: Some(vec![
                "Mindfulness starts with a single breath. Notice the air coming in and going out, without trying to change it.".into(),
                "When the mind wanders, and it will, gently return your attention to the breath. This returning is the practice itself.".into(),
                "Bring the same attention to everyday tasks: washing dishes, walking, listening. Presence is a skill that grows with repetition.".into(),
            ]),
        },
        Book {
            id: "3".into(),
            title: "Artificial Intelligence Explained".into(),
            author: "Dr. Roberto Martínez".into(),
            genre: "Science".into(),
            progress: 12,
            rating: 4.9,
            requires_premium: true,
            has_audio_edition: false,
            is_downloaded: false,
            is_favorite: true,
            read_count: 2134,
            is_monthly_pick: false,
            is_new_release: true,
            content: None,
        },
        Book {
            id: "4".into(),
            title: "History of the Future".into(),
            author: "Elena Rodríguez".into(),
            genre: "History".into(),
            progress: 0,
            rating: 4.7,
            requires_premium: false,
            has_audio_edition: true,
            is_downloaded: true,
            is_favorite: false,
            read_count: 567,
            is_monthly_pick: false,
            is_new_release: false,
            content: None,
        },
        Book {
            id: "5".into(),
            title: "Basic Molecular Cooking".into(),
            author: "Chef Gabriel Santos".into(),
            genre: "Gastronomy".into(),
            progress: 33,
            rating: 4.5,
            requires_premium: true,
            has_audio_edition: false,
            is_downloaded: false,
            is_favorite: false,
            read_count: 423,
            is_monthly_pick: false,
            is_new_release: false,
            content: None,
        },
        Book {
            id: "6".into(),
            title: "Time Travel".into(),
            author: "Prof. David Kim".into(),
            genre: "Physics".into(),
            progress: 67,
            rating: 4.8,
            requires_premium: false,
            has_audio_edition: true,
            is_downloaded: true,
            is_favorite: true,
            read_count: 1876,
            is_monthly_pick: false,
            is_new_release: false,
            content: None,
        },
        Book {
            id: "7".into(),
            title: "The Marketing Revolution".into(),
            author: "Marcus Chen".into(),
            genre: "Business".into(),
            progress: 0,
            rating: 4.7,
            requires_premium: true,
            has_audio_edition: true,
            is_downloaded: false,
            is_favorite: false,
            read_count: 945,
            is_monthly_pick: false,
            is_new_release: false,
            content: None,
        },
        Book {
            id: "8".into(),
            title: "Secrets of the Mind".into(),
            author: "Dr. Roberto Martínez".into(),
            genre: "Psychology".into(),
            progress: 0,
            rating: 4.9,
            requires_premium: false,
            has_audio_edition: false,
            is_downloaded: false,
            is_favorite: false,
            read_count: 1567,
            is_monthly_pick: false,
            is_new_release: false,
            content: None,
        },
        Book {
            id: "9".into(),
            title: "The Last Kingdom".into(),
            author: "Elena Rodríguez".into(),
            genre: "Fiction".into(),
            progress: 0,
            rating: 4.6,
            requires_premium: true,
            has_audio_edition: true,
            is_downloaded: false,
            is_favorite: false,
            read_count: 789,
            is_monthly_pick: false,
            is_new_release: true,
            content: None,
        },
        Book {
            id: "10".into(),
            title: "Yoga for Life".into(),
            author: "Ana Sofía López".into(),
            genre: "Wellness".into(),
            progress: 0,
            rating: 4.5,
            requires_premium: false,
            has_audio_edition: true,
            is_downloaded: false,
            is_favorite: false,
            read_count: 634,
            is_monthly_pick: false,
            is_new_release: false,
            content: None,
        },
    ]
}
