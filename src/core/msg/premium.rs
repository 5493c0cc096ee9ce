use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumMsg {
    RequestUpsell,
    NextPlan,
    PreviousPlan,
    Upgrade,
    CloseModal,
}
