use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMsg {
    TogglePlay,
    /// One second of simulated playback elapsed
    Tick,
    SkipForward,
    SkipBackward,
    CycleSpeed,
    VolumeUp,
    VolumeDown,
    NextChapter,
    PreviousChapter,
    /// Release the timer without touching the position
    Stop,
}

impl PlaybackMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, PlaybackMsg::Tick)
    }
}
