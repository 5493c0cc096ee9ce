use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[strum(to_string = "Español")]
    Es,
    #[strum(to_string = "English")]
    En,
    #[strum(to_string = "Français")]
    Fr,
    #[strum(to_string = "Português")]
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize)]
pub enum ReadingGoal {
    #[strum(to_string = "Casual (15 min/day)")]
    Casual,
    #[default]
    #[strum(to_string = "Moderate (30 min/day)")]
    Moderate,
    #[strum(to_string = "Intensive (1h+/day)")]
    Intensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize)]
pub enum PreferredFormat {
    #[strum(to_string = "Text")]
    Text,
    #[strum(to_string = "Audio")]
    Audio,
    #[default]
    #[strum(to_string = "Text and audio")]
    Both,
}

pub const INTERESTS: [&str; 16] = [
    "Technology",
    "Science",
    "History",
    "Philosophy",
    "Art",
    "Music",
    "Business",
    "Health",
    "Cooking",
    "Travel",
    "Sports",
    "Literature",
    "Psychology",
    "Personal Growth",
    "Education",
    "Environment",
];

/// Choices collected by the onboarding wizard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnboardingPreferences {
    pub theme: Theme,
    pub language: Language,
    pub interests: Vec<String>,
    pub reading_goal: ReadingGoal,
    pub preferred_format: PreferredFormat,
}

impl OnboardingPreferences {
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(index) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(index);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }
}

/// Returns the variant after `current`, wrapping around.
pub fn cycle<T>(current: T) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + 1) % all.len()]
}

/// Returns the variant before `current`, wrapping around.
pub fn cycle_back<T>(current: T) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + all.len() - 1) % all.len()]
}
