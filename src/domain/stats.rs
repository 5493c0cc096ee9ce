//! Reading statistics shown on the stats panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreCount {
    pub name: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingStats {
    pub reading_streak: u32,
    pub books_completed: u32,
    pub total_minutes: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    /// Words per minute
    pub average_speed: u32,
    pub genres: Vec<GenreCount>,
    pub achievements: Vec<Achievement>,
}

impl ReadingStats {
    /// Weekly goal completion in percent, capped at 100.
    pub fn weekly_percent(&self) -> u16 {
        if self.weekly_goal == 0 {
            return 100;
        }
        ((self.weekly_progress * 100 / self.weekly_goal).min(100)) as u16
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }
}

impl Default for ReadingStats {
    fn default() -> Self {
        Self {
            reading_streak: 7,
            books_completed: 23,
            total_minutes: 2847,
            weekly_goal: 150,
            weekly_progress: 120,
            average_speed: 285,
            genres: vec![
                GenreCount {
                    name: "Technology",
                    count: 8,
                },
                GenreCount {
                    name: "Science",
                    count: 6,
                },
                GenreCount {
                    name: "History",
                    count: 5,
                },
                GenreCount {
                    name: "Wellness",
                    count: 4,
                },
            ],
            achievements: vec![
                Achievement {
                    name: "Steady Reader",
                    description: "7 days in a row",
                    unlocked: true,
                },
                Achievement {
                    name: "Explorer",
                    description: "5 different genres",
                    unlocked: true,
                },
                Achievement {
                    name: "Speedster",
                    description: "300+ words per minute",
                    unlocked: false,
                },
                Achievement {
                    name: "Marathoner",
                    description: "50 books completed",
                    unlocked: false,
                },
            ],
        }
    }
}
