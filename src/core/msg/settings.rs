use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsMsg {
    CursorUp,
    CursorDown,
    Increase,
    Decrease,
    Toggle,
}
