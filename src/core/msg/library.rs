use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryMsg {
    CursorUp,
    CursorDown,
    CycleGenre,
    NextSection,
    PreviousSection,
    /// Open the title in the reader
    Open(String),
    /// Open the title in the audio player
    Play(String),
    ToggleFavorite(String),
}
