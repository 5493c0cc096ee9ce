use serde::{Deserialize, Serialize};

use crate::domain::view::ViewState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMsg {
    /// The history reports a new current path
    PathChanged(String),
    /// A screen asks for a different view
    RequestView(ViewState),
    /// Go back in the history
    Back,
}
