//! Audio edition metadata used by the player.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub number: u32,
    pub title: &'static str,
    /// Length in seconds
    pub duration: u32,
}

pub const CHAPTERS: [Chapter; 6] = [
    Chapter {
        number: 1,
        title: "Introduction to Digital Art",
        duration: 547,
    },
    Chapter {
        number: 2,
        title: "Fundamental Principles",
        duration: 612,
    },
    Chapter {
        number: 3,
        title: "Advanced Strategies",
        duration: 789,
    },
    Chapter {
        number: 4,
        title: "Putting It Into Practice",
        duration: 634,
    },
    Chapter {
        number: 5,
        title: "Case Studies",
        duration: 723,
    },
    Chapter {
        number: 6,
        title: "The Digital Future",
        duration: 542,
    },
];

pub const SPEEDS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Index of 1.0x in [`SPEEDS`].
pub const NORMAL_SPEED_INDEX: usize = 2;

pub fn total_duration() -> u32 {
    CHAPTERS.iter().map(|chapter| chapter.duration).sum()
}

/// Chapter playing at `position` seconds. Positions past the end map to the last chapter.
pub fn chapter_at(position: u32) -> &'static Chapter {
    let mut start = 0;
    for chapter in CHAPTERS.iter() {
        if position < start + chapter.duration {
            return chapter;
        }
        start += chapter.duration;
    }
    &CHAPTERS[CHAPTERS.len() - 1]
}

/// Start offset of chapter `number` (1-based) in seconds.
pub fn chapter_start(number: u32) -> u32 {
    CHAPTERS
        .iter()
        .take_while(|chapter| chapter.number < number)
        .map(|chapter| chapter.duration)
        .sum()
}

/// Milliseconds between one-second progress ticks at `speed`.
pub fn tick_interval_ms(speed: f64) -> u64 {
    if speed <= 0.0 {
        return 1000;
    }
    (1000.0 / speed).round() as u64
}
