use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    domain::ai::AiSummaryRequest,
    infrastructure::{ai_client::AiClient, storage::VisitStore},
};

/// History operations performed by the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Push(String),
    Back,
}

/// Playback clock operations performed by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start { interval_ms: u64 },
    Stop,
}

/// Command executor that routes Elm commands to the host's channels and services
#[derive(Clone, Default)]
pub struct CmdExecutor {
    nav_sender: Option<mpsc::UnboundedSender<NavCommand>>,
    timer_sender: Option<mpsc::UnboundedSender<TimerCommand>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    raw_sender: Option<mpsc::UnboundedSender<RawMsg>>,
    visit_store: Option<Arc<dyn VisitStore>>,
    ai_client: Option<AiClient>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the history channel for Navigate/NavigateBack.
    pub fn set_nav_sender(&mut self, sender: mpsc::UnboundedSender<NavCommand>) {
        self.nav_sender = Some(sender);
    }

    pub fn set_timer_sender(&mut self, sender: mpsc::UnboundedSender<TimerCommand>) {
        self.timer_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Results of asynchronous work are fed back as raw messages.
    pub fn set_raw_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.raw_sender = Some(sender);
    }

    pub fn set_visit_store(&mut self, store: Arc<dyn VisitStore>) {
        self.visit_store = Some(store);
    }

    pub fn set_ai_client(&mut self, client: AiClient) {
        self.ai_client = Some(client);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Navigate { path } => match &self.nav_sender {
                Some(tx) => tx.send(NavCommand::Push(path.clone()))?,
                None => log::warn!("CmdExecutor: history not configured; dropping {path}"),
            },

            Cmd::NavigateBack => match &self.nav_sender {
                Some(tx) => tx.send(NavCommand::Back)?,
                None => log::warn!("CmdExecutor: history not configured; dropping back"),
            },

            Cmd::StartPlaybackTimer { interval_ms } => {
                if let Some(tx) = &self.timer_sender {
                    tx.send(TimerCommand::Start {
                        interval_ms: *interval_ms,
                    })?;
                } else {
                    log::warn!("CmdExecutor: playback clock not configured");
                }
            }

            Cmd::StopPlaybackTimer => {
                if let Some(tx) = &self.timer_sender {
                    tx.send(TimerCommand::Stop)?;
                }
            }

            Cmd::MarkVisited => self.mark_visited(),

            Cmd::FetchChapterSummary { book_id, chapter } => {
                self.fetch_chapter_summary(AiSummaryRequest {
                    book_id: book_id.clone(),
                    chapter: *chapter,
                })?
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(tui_cmd.clone());
                } else {
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}");
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }
        }

        Ok(())
    }

    fn mark_visited(&self) {
        let Some(store) = &self.visit_store else {
            log::warn!("CmdExecutor: no visit store; onboarding will show again");
            return;
        };
        if let Err(e) = store.mark_visited() {
            log::error!("Failed to persist onboarding completion: {e}");
            self.report(RawMsg::Error(format!("Could not save your progress: {e}")));
        }
    }

    /// Errors when the result could not be delivered back; the caller owns
    /// clearing the in-flight request then.
    fn fetch_chapter_summary(&self, request: AiSummaryRequest) -> Result<()> {
        let Some(tx) = self.raw_sender.clone() else {
            return Err(eyre!("no channel for the summary result"));
        };
        let Some(client) = self.ai_client.clone() else {
            tx.send(RawMsg::AiSummaryFailed(
                "AI service is not configured".to_string(),
            ))?;
            return Ok(());
        };
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::warn!("CmdExecutor: no async runtime for summary request");
            tx.send(RawMsg::AiSummaryFailed("no async runtime".to_string()))?;
            return Ok(());
        };
        handle.spawn(async move {
            let msg = match client.chapter_summary(&request).await {
                Ok(response) => RawMsg::AiSummaryReceived(response),
                Err(e) => {
                    log::warn!("summary request failed: {e}");
                    RawMsg::AiSummaryFailed(e.to_string())
                }
            };
            let _ = tx.send(msg);
        });
        Ok(())
    }

    fn report(&self, msg: RawMsg) {
        if let Some(tx) = &self.raw_sender {
            let _ = tx.send(msg);
        }
    }
}
