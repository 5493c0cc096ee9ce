use serde::{Deserialize, Serialize};

pub mod ai;
pub mod library;
pub mod navigation;
pub mod onboarding;
pub mod playback;
pub mod premium;
pub mod reader;
pub mod settings;
pub mod system;

use ai::AiMsg;
use library::LibraryMsg;
use navigation::NavigationMsg;
use onboarding::OnboardingMsg;
use playback::PlaybackMsg;
use premium::PremiumMsg;
use reader::ReaderMsg;
use settings::SettingsMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Navigation(NavigationMsg),
    Library(LibraryMsg),
    Reader(ReaderMsg),
    Playback(PlaybackMsg),
    Premium(PremiumMsg),
    Onboarding(OnboardingMsg),
    Settings(SettingsMsg),
    Ai(AiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Playback(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;
    use crate::domain::view::ViewState;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::System(SystemMsg::Tick).is_frequent());
        assert!(Msg::Playback(PlaybackMsg::Tick).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Navigation(NavigationMsg::Back).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Navigation(NavigationMsg::RequestView(ViewState::Audio));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
