use serde::{Deserialize, Serialize};

/// A title in the catalog.
///
/// `has_audio_edition` and `requires_premium` are the two attributes the
/// navigation guards look at; everything else is presentation data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Reading progress in percent (0-100)
    pub progress: u8,
    pub rating: f32,
    pub requires_premium: bool,
    pub has_audio_edition: bool,
    pub is_downloaded: bool,
    pub is_favorite: bool,
    /// Readers who opened the title; ranks the "most read" shelf
    pub read_count: u32,
    pub is_monthly_pick: bool,
    pub is_new_release: bool,
    /// Pre-paginated text; titles without content fall back to the sample text
    pub content: Option<Vec<String>>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_audio(mut self, has_audio_edition: bool) -> Self {
        self.has_audio_edition = has_audio_edition;
        self
    }

    pub fn with_premium(mut self, requires_premium: bool) -> Self {
        self.requires_premium = requires_premium;
        self
    }

    pub fn with_content(mut self, pages: Vec<String>) -> Self {
        self.content = Some(pages);
        self
    }

    /// Pages to show in the reader.
    pub fn pages(&self) -> &[String] {
        match &self.content {
            Some(pages) if !pages.is_empty() => pages.as_slice(),
            _ => SAMPLE_PAGES.as_slice(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.progress > 0
    }
}

lazy_static::lazy_static! {
    static ref SAMPLE_PAGES: Vec<String> = [
        "In today's vast digital universe, strategy and tactics have evolved beyond traditional battlefields. Companies now compete for attention, data and consumer trust on terrain that changes constantly.",
        "The first law of digital warfare is to know your terrain. The digital landscape is not just the internet; it is a complex ecosystem of platforms, algorithms, data and human behaviour interacting in unpredictable ways.",
        "The tools of the modern digital warrior include data analysis, artificial intelligence, automation and, above all, the ability to adapt quickly to change. Speed of decision matters more than ever.",
        "Information is power, but information that is processed and applied intelligently is the real competitive advantage. In this era, whoever controls the data and knows how to read it controls the future.",
        "Defence in the digital world needs an entirely new mindset. High walls are not enough; you have to build systems that evolve, learn and respond to threats that do not exist yet.",
        "The human element is still the most unpredictable and powerful factor in any digital strategy. Technology amplifies human abilities, but it cannot replace intuition, creativity and wisdom.",
    ]
    .iter()
    .map(|page| page.to_string())
    .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_guard_attributes() {
        let book = Book::new("1", "Title", "Author")
            .with_audio(true)
            .with_premium(true);

        assert_eq!(book.id, "1");
        assert!(book.has_audio_edition);
        assert!(book.requires_premium);
        assert!(!book.is_started());
    }

    #[test]
    fn test_pages_fall_back_to_sample_text() {
        let book = Book::new("1", "Title", "Author");
        assert_eq!(book.pages().len(), 6);

        let empty = Book::new("2", "Title", "Author").with_content(vec![]);
        assert_eq!(empty.pages().len(), 6);

        let custom = Book::new("3", "Title", "Author").with_content(vec!["only page".into()]);
        assert_eq!(custom.pages(), ["only page".to_string()]);
    }
}
