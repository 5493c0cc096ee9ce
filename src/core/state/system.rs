use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    domain::notice::Notice,
};

pub const DEFAULT_NOTICE_TICKS: u32 = 12;

/// System-related state
#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    notice: Option<ActiveNotice>,
    notice_ticks: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveNotice {
    notice: Notice,
    remaining_ticks: u32,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TICKS)
    }
}

impl SystemState {
    pub fn new(notice_ticks: u32) -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            notice: None,
            notice_ticks: notice_ticks.max(1),
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|active| &active.notice)
    }

    pub fn show_notice(&mut self, notice: Notice) {
        if notice.is_error() {
            log::warn!("notice: {}", notice.text);
        }
        self.notice = Some(ActiveNotice {
            notice,
            remaining_ticks: self.notice_ticks,
        });
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick => {
                let expired = match self.notice.as_mut() {
                    Some(active) => {
                        active.remaining_ticks = active.remaining_ticks.saturating_sub(1);
                        active.remaining_ticks == 0
                    }
                    None => false,
                };
                if expired {
                    self.notice = None;
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }

            SystemMsg::ShowNotice(notice) => {
                self.show_notice(notice);
                vec![]
            }

            SystemMsg::DismissNotice => {
                self.notice = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.show_notice(Notice::error(error.clone()));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_resume() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        assert_eq!(cmds, vec![Cmd::Tui(TuiCommand::Suspend)]);

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_resize_generates_command() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(80, 24));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_notice_expires_after_ticks() {
        let mut system = SystemState::new(3);
        system.update(SystemMsg::ShowNotice(Notice::info("hello")));

        assert!(system.update(SystemMsg::Tick).is_empty());
        assert!(system.update(SystemMsg::Tick).is_empty());
        assert!(system.notice().is_some());

        let cmds = system.update(SystemMsg::Tick);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(system.notice(), None);
    }

    #[test]
    fn test_new_notice_resets_ttl() {
        let mut system = SystemState::new(2);
        system.update(SystemMsg::ShowNotice(Notice::info("first")));
        system.update(SystemMsg::Tick);
        system.update(SystemMsg::ShowNotice(Notice::success("second")));
        system.update(SystemMsg::Tick);

        assert_eq!(system.notice(), Some(&Notice::success("second")));
    }

    #[test]
    fn test_dismiss_notice() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ShowNotice(Notice::info("hello")));
        system.update(SystemMsg::DismissNotice);
        assert_eq!(system.notice(), None);
    }

    #[test]
    fn test_show_error_logs_and_notifies() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));

        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
        assert!(system.notice().is_some_and(|n| n.is_error()));
    }
}
