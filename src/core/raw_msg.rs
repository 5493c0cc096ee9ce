use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::ai::AiSummaryResponse;

/// Raw messages from external sources (input, history, timers, network)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // History reports a new current path
    PathChanged(String),

    // Playback timer fired
    PlaybackTick,

    // AI summary endpoint
    AiSummaryReceived(AiSummaryResponse),
    AiSummaryFailed(String),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::PlaybackTick)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(RawMsg::PlaybackTick.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::PathChanged("/library".into()).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> Result<()> {
        let msg = RawMsg::PathChanged("/reader/2".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
