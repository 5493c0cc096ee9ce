use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::{CmdExecutor, NavCommand, TimerCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        ai_client::AiClient,
        config::Config,
        history::History,
        playback_timer::PlaybackTimer,
        storage::{has_visited, VisitStore},
        tui::{self, event_source::EventSource},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Update and host-command rounds allowed per loop iteration
const MAX_SETTLE_ROUNDS: usize = 8;

/// Startup inputs besides the configuration
pub struct RunnerOptions {
    pub initial_path: String,
    pub visit_store: Arc<dyn VisitStore>,
}

impl RunnerOptions {
    pub fn new(visit_store: Arc<dyn VisitStore>) -> Self {
        Self {
            initial_path: "/".to_string(),
            visit_store,
        }
    }

    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }
}

/// Drives the Elm runtime and owns everything with a lifetime: the history,
/// the playback clock and the terminal.
pub struct AppRunner {
    runtime: Runtime,
    history: History,
    playback_timer: Option<PlaybackTimer>,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    /// Set by host commands that change what is on screen
    pending_render: bool,
    nav_rx: mpsc::UnboundedReceiver<NavCommand>,
    timer_rx: mpsc::UnboundedReceiver<TimerCommand>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn playback_timer(&self) -> Option<&PlaybackTimer> {
        self.playback_timer.as_ref()
    }

    /// Create a new AppRunner. The onboarding latch is read from the visit
    /// store; the initial path is delivered as the first path change.
    pub fn new_with_config(
        config: Config,
        options: RunnerOptions,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let visited = has_visited(options.visit_store.as_ref());
        log::info!("starting at {} (visited: {visited})", options.initial_path);

        let (nav_tx, nav_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_req_rx) = mpsc::unbounded_channel();

        let mut executor = CmdExecutor::new();
        executor.set_nav_sender(nav_tx);
        executor.set_timer_sender(timer_tx);
        executor.set_tui_sender(tui_tx);
        executor.set_render_request_sender(render_tx);
        executor.set_visit_store(options.visit_store);
        if config.ai.endpoint.is_some() {
            match AiClient::from_config(&config.ai) {
                Ok(client) => executor.set_ai_client(client),
                Err(e) => log::warn!("AI summaries disabled: {e}"),
            }
        }

        let initial_state = AppState::new(config, visited);
        let mut runtime = Runtime::new_with_executor(initial_state, executor);
        let history = History::new(options.initial_path.clone());
        runtime.send_raw_msg(RawMsg::PathChanged(options.initial_path));

        Ok(Self {
            runtime,
            history,
            playback_timer: None,
            tui,
            event_source,
            renderer: Renderer::new(),
            pending_render: false,
            nav_rx,
            timer_rx,
            tui_rx,
            render_req_rx,
        })
    }

    /// Run the main loop until the state asks to quit.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        while !self.runtime.state().system.should_quit {
            if !self.cycle().await? {
                break;
            }
        }

        // stop the clock before the terminal goes away
        if let Some(timer) = self.playback_timer.take() {
            timer.stop();
        }
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One loop iteration. Returns false when the event source is exhausted.
    async fn cycle(&mut self) -> Result<bool> {
        let mut saw_render = false;
        let mut resizes = vec![];
        let event = self.event_source.next().await;
        let alive = event.is_some();
        if let Some(event) = event {
            match event {
                tui::Event::Render => saw_render = true,
                tui::Event::Resize(w, h) => resizes.push((w, h)),
                other => {
                    if let Some(raw) = Self::to_raw(other) {
                        self.runtime.send_raw_msg(raw);
                    }
                }
            }
        }

        self.settle().await?;

        if let Some((w, h)) = Coalescer::decide_resize(&resizes) {
            self.runtime.send_raw_msg(RawMsg::Resize(w, h));
            self.settle().await?;
        }

        let mut render_reqs = usize::from(std::mem::take(&mut self.pending_render));
        while self.render_req_rx.try_recv().is_ok() {
            render_reqs += 1;
        }
        if Coalescer::decide_render(render_reqs, saw_render) {
            self.render().await?;
        }
        Ok(alive)
    }

    fn to_raw(event: tui::Event) -> Option<RawMsg> {
        match event {
            tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
            tui::Event::Tick => Some(RawMsg::Tick),
            tui::Event::Key(key) => Some(RawMsg::Key(key)),
            tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            tui::Event::Error => Some(RawMsg::Error("terminal input error".to_string())),
            tui::Event::Init
            | tui::Event::Render
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => None,
        }
    }

    /// Runs update cycles and applies host commands until nothing is left.
    async fn settle(&mut self) -> Result<()> {
        for _ in 0..MAX_SETTLE_ROUNDS {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
            }
            if !self.apply_host_commands().await? {
                return Ok(());
            }
        }
        log::warn!("host commands did not settle in {MAX_SETTLE_ROUNDS} rounds");
        Ok(())
    }

    /// Applies history, timer and terminal commands. Returns whether any new
    /// raw message was queued.
    async fn apply_host_commands(&mut self) -> Result<bool> {
        let mut queued = false;

        while let Ok(cmd) = self.nav_rx.try_recv() {
            let changed = match cmd {
                NavCommand::Push(path) => self.history.push(&path).map(str::to_string),
                NavCommand::Back => self.history.back().map(str::to_string),
            };
            if let Some(path) = changed {
                self.runtime.send_raw_msg(RawMsg::PathChanged(path));
                queued = true;
            }
        }

        while let Ok(cmd) = self.timer_rx.try_recv() {
            match cmd {
                TimerCommand::Start { interval_ms } => {
                    // replacing drops (and cancels) the previous clock
                    self.playback_timer = Some(PlaybackTimer::start(
                        Duration::from_millis(interval_ms),
                        self.runtime.get_raw_sender(),
                    ));
                }
                TimerCommand::Stop => {
                    if let Some(timer) = self.playback_timer.take() {
                        timer.stop();
                    }
                }
            }
        }

        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                    self.pending_render = true;
                }
                TuiCommand::Suspend => {
                    {
                        let mut tui = self.tui.lock().await;
                        tui.suspend()?;
                        tui.enter()?;
                    }
                    self.runtime.send_raw_msg(RawMsg::Resume);
                    queued = true;
                }
            }
        }

        Ok(queued)
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    pub fn set_event_source_for_tests(&mut self, source: EventSource) {
        self.event_source = source;
    }

    pub fn set_tui_for_tests(&mut self, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) {
        self.tui = tui;
    }

    /// Process one event (if any) and settle all resulting commands.
    pub async fn run_one_cycle_for_tests(&mut self) -> Result<()> {
        self.cycle().await?;
        Ok(())
    }

    pub async fn render_for_tests(&mut self) -> Result<()> {
        self.render().await
    }
}
