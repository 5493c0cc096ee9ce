use serde::{Deserialize, Serialize};

use crate::domain::ai::AiSummaryResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiMsg {
    NextTab,
    PreviousTab,
    NextChapter,
    PreviousChapter,
    RequestSummary,
    SummaryReceived(AiSummaryResponse),
    SummaryFailed(String),
}
