use crate::{
    core::{cmd::Cmd, msg::playback::PlaybackMsg},
    domain::{
        audio::{self, Chapter, NORMAL_SPEED_INDEX, SPEEDS},
        book::Book,
    },
};

pub const DEFAULT_SKIP_SECONDS: u32 = 30;
pub const VOLUME_STEP: u8 = 10;

/// Simulated audio playback. The position advances one second per timer tick;
/// the timer itself is owned by the runner and driven by the returned commands.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    book_id: Option<String>,
    is_playing: bool,
    /// Seconds from the start of the audio edition
    position: u32,
    duration: u32,
    speed_index: usize,
    volume: u8,
    skip_seconds: u32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_SECONDS)
    }
}

impl PlaybackState {
    pub fn new(skip_seconds: u32) -> Self {
        Self {
            book_id: None,
            is_playing: false,
            position: 0,
            duration: audio::total_duration(),
            speed_index: NORMAL_SPEED_INDEX,
            volume: 70,
            skip_seconds,
        }
    }

    pub fn book_id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn speed(&self) -> f64 {
        SPEEDS[self.speed_index]
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn current_chapter(&self) -> &'static Chapter {
        audio::chapter_at(self.position)
    }

    /// Playback progress in percent.
    pub fn percent(&self) -> u16 {
        if self.duration == 0 {
            return 0;
        }
        ((u64::from(self.position) * 100) / u64::from(self.duration)) as u16
    }

    pub fn set_speed(&mut self, speed: f64) {
        if let Some(index) = SPEEDS.iter().position(|s| (*s - speed).abs() < f64::EPSILON) {
            self.speed_index = index;
        }
    }

    /// Binds the player to `book`. A different title starts from the beginning.
    pub fn load(&mut self, book: &Book) -> Vec<Cmd> {
        if self.book_id.as_deref() == Some(book.id.as_str()) {
            return vec![];
        }
        let cmds = self.stop();
        self.book_id = Some(book.id.clone());
        self.position = 0;
        cmds
    }

    /// Releases the timer. The position is kept.
    pub fn stop(&mut self) -> Vec<Cmd> {
        if self.is_playing {
            self.is_playing = false;
            vec![Cmd::StopPlaybackTimer]
        } else {
            vec![]
        }
    }

    fn start(&mut self) -> Vec<Cmd> {
        if self.position >= self.duration {
            self.position = 0;
        }
        self.is_playing = true;
        vec![self.timer_cmd()]
    }

    fn timer_cmd(&self) -> Cmd {
        Cmd::StartPlaybackTimer {
            interval_ms: audio::tick_interval_ms(self.speed()),
        }
    }

    fn seek(&mut self, position: u32) {
        self.position = position.min(self.duration);
    }

    pub fn update(&mut self, msg: PlaybackMsg) -> Vec<Cmd> {
        match msg {
            PlaybackMsg::TogglePlay => {
                if self.book_id.is_none() {
                    return vec![];
                }
                if self.is_playing {
                    self.stop()
                } else {
                    self.start()
                }
            }
            PlaybackMsg::Tick => {
                // late tick from a timer that is being torn down
                if !self.is_playing {
                    return vec![];
                }
                self.position = (self.position + 1).min(self.duration);
                if self.position >= self.duration {
                    log::info!("playback finished");
                    self.stop()
                } else {
                    vec![]
                }
            }
            PlaybackMsg::SkipForward => {
                self.seek(self.position.saturating_add(self.skip_seconds));
                vec![]
            }
            PlaybackMsg::SkipBackward => {
                self.seek(self.position.saturating_sub(self.skip_seconds));
                vec![]
            }
            PlaybackMsg::CycleSpeed => {
                self.speed_index = (self.speed_index + 1) % SPEEDS.len();
                if self.is_playing {
                    // restart the timer with the new interval
                    vec![self.timer_cmd()]
                } else {
                    vec![]
                }
            }
            PlaybackMsg::VolumeUp => {
                self.volume = self.volume.saturating_add(VOLUME_STEP).min(100);
                vec![]
            }
            PlaybackMsg::VolumeDown => {
                self.volume = self.volume.saturating_sub(VOLUME_STEP);
                vec![]
            }
            PlaybackMsg::NextChapter => {
                let current = self.current_chapter().number;
                if (current as usize) < audio::CHAPTERS.len() {
                    self.seek(audio::chapter_start(current + 1));
                }
                vec![]
            }
            PlaybackMsg::PreviousChapter => {
                let current = self.current_chapter().number;
                self.seek(audio::chapter_start(current.saturating_sub(1).max(1)));
                vec![]
            }
            PlaybackMsg::Stop => self.stop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn loaded() -> PlaybackState {
        let mut playback = PlaybackState::default();
        playback.load(&Book::new("1", "Title", "Author").with_audio(true));
        playback
    }

    #[test]
    fn test_toggle_without_title_is_noop() {
        let mut playback = PlaybackState::default();
        assert!(playback.update(PlaybackMsg::TogglePlay).is_empty());
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_play_pause_acquires_and_releases_timer() {
        let mut playback = loaded();

        let cmds = playback.update(PlaybackMsg::TogglePlay);
        assert_eq!(cmds, vec![Cmd::StartPlaybackTimer { interval_ms: 1000 }]);
        assert!(playback.is_playing());

        let cmds = playback.update(PlaybackMsg::TogglePlay);
        assert_eq!(cmds, vec![Cmd::StopPlaybackTimer]);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_tick_while_paused_is_ignored() {
        let mut playback = loaded();
        playback.update(PlaybackMsg::Tick);
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn test_tick_advances_and_finishes() {
        let mut playback = loaded();
        playback.update(PlaybackMsg::TogglePlay);
        playback.update(PlaybackMsg::Tick);
        assert_eq!(playback.position(), 1);

        playback.seek(playback.duration() - 1);
        let cmds = playback.update(PlaybackMsg::Tick);

        assert_eq!(cmds, vec![Cmd::StopPlaybackTimer]);
        assert!(!playback.is_playing());
        assert_eq!(playback.position(), playback.duration());
        assert_eq!(playback.percent(), 100);
    }

    #[test]
    fn test_play_after_finish_restarts() {
        let mut playback = loaded();
        playback.seek(playback.duration());
        playback.update(PlaybackMsg::TogglePlay);
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn test_skip_is_clamped() {
        let mut playback = loaded();
        playback.update(PlaybackMsg::SkipBackward);
        assert_eq!(playback.position(), 0);
        playback.update(PlaybackMsg::SkipForward);
        assert_eq!(playback.position(), DEFAULT_SKIP_SECONDS);

        playback.seek(playback.duration() - 5);
        playback.update(PlaybackMsg::SkipForward);
        assert_eq!(playback.position(), playback.duration());
    }

    #[test]
    fn test_speed_change_restarts_running_timer() {
        let mut playback = loaded();
        assert!(playback.update(PlaybackMsg::CycleSpeed).is_empty());
        assert_eq!(playback.speed(), 1.25);

        let cmds = playback.update(PlaybackMsg::TogglePlay);
        assert_eq!(cmds, vec![Cmd::StartPlaybackTimer { interval_ms: 800 }]);

        let cmds = playback.update(PlaybackMsg::CycleSpeed);
        assert_eq!(cmds, vec![Cmd::StartPlaybackTimer { interval_ms: 667 }]);
    }

    #[test]
    fn test_volume_steps() {
        let mut playback = loaded();
        for _ in 0..5 {
            playback.update(PlaybackMsg::VolumeUp);
        }
        assert_eq!(playback.volume(), 100);
        for _ in 0..20 {
            playback.update(PlaybackMsg::VolumeDown);
        }
        assert_eq!(playback.volume(), 0);
    }

    #[test]
    fn test_chapter_navigation() {
        let mut playback = loaded();
        playback.update(PlaybackMsg::NextChapter);
        assert_eq!(playback.current_chapter().number, 2);
        assert_eq!(playback.position(), 547);

        playback.update(PlaybackMsg::PreviousChapter);
        assert_eq!(playback.current_chapter().number, 1);
        playback.update(PlaybackMsg::PreviousChapter);
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn test_loading_other_title_stops_and_rewinds() {
        let mut playback = loaded();
        playback.update(PlaybackMsg::TogglePlay);
        playback.update(PlaybackMsg::Tick);

        let same = playback.load(&Book::new("1", "Title", "Author"));
        assert!(same.is_empty());
        assert_eq!(playback.position(), 1);

        let cmds = playback.load(&Book::new("4", "Other", "Author"));
        assert_eq!(cmds, vec![Cmd::StopPlaybackTimer]);
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.book_id(), Some("4"));
    }
}
