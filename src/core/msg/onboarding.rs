use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingMsg {
    NextStep,
    PreviousStep,
    /// Move the choice cursor within the current step
    NextOption,
    PreviousOption,
    /// Toggle the option under the cursor (multi-select steps)
    ToggleOption,
}
