use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReaderMsg {
    NextPage,
    PreviousPage,
    IncreaseMargin,
    DecreaseMargin,
    CycleTheme,
}
