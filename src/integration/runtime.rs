use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Owns the state and drives translate, update and command execution
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with a command executor whose asynchronous results
    /// come back through this runtime's raw channel
    pub fn new_with_executor(initial_state: AppState, mut executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        executor.set_raw_sender(runtime.raw_msg_tx.clone());
        runtime.cmd_executor = Some(executor);
        runtime
    }

    pub fn executor_mut(&mut self) -> Option<&mut CmdExecutor> {
        self.cmd_executor.as_mut()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = &self.cmd_executor else {
            return Err(
                "No command executor available. Use new_with_executor() to configure.".to_string(),
            );
        };

        let mut log = Vec::with_capacity(commands.len());
        let mut undelivered = Vec::new();
        for cmd in &commands {
            match executor.execute_command(cmd) {
                Ok(()) => log.push(format!("✓ Executed: {}", cmd.name())),
                Err(e) => {
                    log::error!("Failed to execute {}: {e}", cmd.name());
                    log.push(format!("✗ Failed to execute {}: {e}", cmd.name()));
                    undelivered.push((cmd.clone(), e.to_string()));
                }
            }
        }
        for (cmd, reason) in undelivered {
            self.recover_undelivered(&cmd, reason);
        }
        Ok(log)
    }

    /// A summary request that never left clears its in-flight marker.
    fn recover_undelivered(&mut self, cmd: &Cmd, reason: String) {
        if let Cmd::FetchChapterSummary { .. } = cmd {
            self.raw_msg_queue.push_back(RawMsg::AiSummaryFailed(reason));
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("msg: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Each raw message is translated against the state its predecessors produced
        loop {
            let raw_msg = match self.raw_msg_queue.pop_front() {
                Some(raw_msg) => raw_msg,
                None => match self.raw_msg_rx.try_recv() {
                    Ok(raw_msg) => raw_msg,
                    Err(_) => break,
                },
            };
            self.msg_queue
                .extend(translate_raw_to_domain(raw_msg, &self.state));
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let mut log = Vec::new();
        loop {
            self.process_all_messages();
            if self.cmd_executor.is_none() {
                for cmd in self.pending_commands() {
                    self.recover_undelivered(&cmd, "no command executor".to_string());
                }
            } else {
                log.extend(self.execute_pending_commands()?);
            }
            if self.raw_msg_queue.is_empty() {
                return Ok(log);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            cmd_executor::NavCommand,
            msg::{
                ai::AiMsg, library::LibraryMsg, navigation::NavigationMsg,
                premium::PremiumMsg, system::SystemMsg,
            },
        },
        domain::view::ViewState,
        infrastructure::config::Config,
    };

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::new(Config::default(), true))
    }

    #[test]
    fn test_runtime_creation() {
        let mut runtime = create_test_runtime();

        assert!(runtime.pending_commands().is_empty());
        assert_eq!(runtime.state().current_path(), "/");
        assert!(runtime.executor_mut().is_none());
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_raw_key_becomes_navigation_command() {
        let mut runtime = create_test_runtime();
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('6'),
            KeyModifiers::NONE,
        )));

        let commands = runtime.process_all_messages();

        assert_eq!(
            commands,
            vec![Cmd::Navigate {
                path: "/profile".into()
            }]
        );
        assert_eq!(runtime.state().view.get(), ViewState::Settings);
    }

    #[test]
    fn test_raw_messages_see_prior_state() {
        let mut runtime = create_test_runtime();
        // the second title is free; Enter opens it and Right turns the page
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)));
        runtime.process_all_messages();

        assert_eq!(runtime.state().view.get(), ViewState::Reader);
        assert_eq!(runtime.state().reader.book_id(), Some("2"));
        assert_eq!(runtime.state().reader.page(), 1);
    }

    #[test]
    fn test_run_update_cycle_executes_commands() -> Result<()> {
        let (nav_tx, mut nav_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_nav_sender(nav_tx);
        let mut runtime = Runtime::new_with_executor(AppState::new(Config::default(), true), executor);

        runtime.send_msg(Msg::Navigation(NavigationMsg::RequestView(
            ViewState::Settings,
        )));
        let log = runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;

        assert_eq!(log.len(), 1);
        assert_eq!(nav_rx.try_recv()?, NavCommand::Push("/profile".into()));
        assert!(runtime.pending_commands().is_empty());
        Ok(())
    }

    #[test]
    fn test_dropped_summary_request_clears_loading() -> Result<()> {
        let mut state = AppState::new(Config::default(), true);
        state.config.config.ai.endpoint = Some("http://127.0.0.1:9".to_string());
        let mut runtime = Runtime::new(state);
        runtime.send_msg(Msg::Premium(PremiumMsg::Upgrade));
        runtime.send_msg(Msg::Library(LibraryMsg::Open("2".into())));
        runtime.send_msg(Msg::Ai(AiMsg::RequestSummary));

        runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;

        assert!(!runtime.state().ai.is_loading());
        assert!(runtime.state().system.notice().is_some());

        // a later request goes out again instead of being refused as in flight
        runtime.send_msg(Msg::Ai(AiMsg::RequestSummary));
        let commands = runtime.process_all_messages();
        assert_eq!(
            commands,
            vec![Cmd::FetchChapterSummary {
                book_id: "2".into(),
                chapter: 1
            }]
        );
        Ok(())
    }

    #[test]
    fn test_external_raw_sender_is_drained() {
        let mut runtime = create_test_runtime();
        let _ = runtime
            .get_raw_sender()
            .send(RawMsg::PathChanged("/profile".into()));

        runtime.process_all_messages();

        assert_eq!(runtime.state().view.get(), ViewState::Settings);
        assert_eq!(runtime.state().current_path(), "/profile");
    }
}
