use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Elm-like command definitions
/// Represents side effects (history, timers, storage, network)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // History
    Navigate {
        path: String,
    },
    NavigateBack,

    // Audio progress timer
    StartPlaybackTimer {
        interval_ms: u64,
    },
    StopPlaybackTimer,

    // Durable storage
    MarkVisited,

    // AI summary endpoint
    FetchChapterSummary {
        book_id: String,
        chapter: u32,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
}

impl Cmd {
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Navigate { .. } => "Navigate",
            Cmd::NavigateBack => "NavigateBack",
            Cmd::StartPlaybackTimer { .. } => "StartPlaybackTimer",
            Cmd::StopPlaybackTimer => "StopPlaybackTimer",
            Cmd::MarkVisited => "MarkVisited",
            Cmd::FetchChapterSummary { .. } => "FetchChapterSummary",
            Cmd::Tui(..) => "Tui",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_names() {
        assert_eq!(Cmd::MarkVisited.name(), "MarkVisited");
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })
            .name(),
            "Tui"
        );
        assert_eq!(
            Cmd::Navigate {
                path: "/library".to_string()
            }
            .name(),
            "Navigate"
        );
    }
}
