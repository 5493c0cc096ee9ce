use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            ai::AiMsg, library::LibraryMsg, navigation::NavigationMsg, onboarding::OnboardingMsg,
            playback::PlaybackMsg, premium::PremiumMsg, reader::ReaderMsg, settings::SettingsMsg,
            system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::view::ViewState,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::PathChanged(path) => vec![Msg::Navigation(NavigationMsg::PathChanged(path))],
        RawMsg::PlaybackTick => vec![Msg::Playback(PlaybackMsg::Tick)],
        RawMsg::AiSummaryReceived(response) => vec![Msg::Ai(AiMsg::SummaryReceived(response))],
        RawMsg::AiSummaryFailed(reason) => vec![Msg::Ai(AiMsg::SummaryFailed(reason))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is driven by the runner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let Some(action) = state.config.config.keybindings.action_for(&key) else {
        return vec![];
    };

    // Modal layers capture input before the screens do
    if state.onboarding.is_active() {
        translate_onboarding_action(action)
    } else if state.premium.is_modal_open() {
        translate_premium_modal_action(action)
    } else {
        translate_global_action(action, state)
            .unwrap_or_else(|| translate_view_action(action, state))
    }
}

fn translate_onboarding_action(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::Up | Action::Left => OnboardingMsg::PreviousOption,
        Action::Down | Action::Right => OnboardingMsg::NextOption,
        Action::PlayPause => OnboardingMsg::ToggleOption,
        Action::Select => OnboardingMsg::NextStep,
        Action::Back | Action::HistoryBack => OnboardingMsg::PreviousStep,
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        _ => return vec![],
    };
    vec![Msg::Onboarding(msg)]
}

fn translate_premium_modal_action(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::Up | Action::Left => PremiumMsg::PreviousPlan,
        Action::Down | Action::Right => PremiumMsg::NextPlan,
        Action::Select => PremiumMsg::Upgrade,
        Action::Back | Action::Premium => PremiumMsg::CloseModal,
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        _ => return vec![],
    };
    vec![Msg::Premium(msg)]
}

/// Actions with the same meaning on every screen. `None` leaves the action
/// to the active view.
fn translate_global_action(action: Action, state: &AppState) -> Option<Vec<Msg>> {
    let request = |view| Some(vec![Msg::Navigation(NavigationMsg::RequestView(view))]);
    match action {
        Action::Quit => Some(vec![Msg::System(SystemMsg::Quit)]),
        Action::Suspend => Some(vec![Msg::System(SystemMsg::Suspend)]),
        Action::ShowLibrary => request(ViewState::Library),
        Action::ShowReader => request(ViewState::Reader),
        Action::ShowAudio => request(ViewState::Audio),
        Action::ShowAi => request(ViewState::Ai),
        Action::ShowStats => request(ViewState::Stats),
        Action::ShowSettings => request(ViewState::Settings),
        Action::Premium => Some(vec![Msg::Premium(PremiumMsg::RequestUpsell)]),
        Action::HistoryBack => Some(vec![Msg::Navigation(NavigationMsg::Back)]),
        Action::Back => {
            if state.system.notice().is_some() {
                Some(vec![Msg::System(SystemMsg::DismissNotice)])
            } else if state.view.get() != ViewState::Library {
                request(ViewState::Library)
            } else {
                Some(vec![])
            }
        }
        _ => None,
    }
}

fn translate_view_action(action: Action, state: &AppState) -> Vec<Msg> {
    match state.view.get() {
        ViewState::Library => translate_library_action(action, state),
        ViewState::Reader => translate_reader_action(action, state),
        ViewState::Audio => translate_audio_action(action),
        ViewState::Ai => translate_ai_action(action),
        ViewState::Settings => translate_settings_action(action),
        ViewState::Stats => vec![],
    }
}

fn translate_library_action(action: Action, state: &AppState) -> Vec<Msg> {
    let highlighted = || state.library.highlighted().map(|book| book.id.clone());
    let msg = match action {
        Action::Up => Some(LibraryMsg::CursorUp),
        Action::Down => Some(LibraryMsg::CursorDown),
        Action::Filter => Some(LibraryMsg::CycleGenre),
        Action::NextSection => Some(LibraryMsg::NextSection),
        Action::PreviousSection => Some(LibraryMsg::PreviousSection),
        Action::Select | Action::Right => highlighted().map(LibraryMsg::Open),
        Action::Listen | Action::PlayPause => highlighted().map(LibraryMsg::Play),
        Action::Favorite => highlighted().map(LibraryMsg::ToggleFavorite),
        _ => None,
    };
    msg.map(Msg::Library).into_iter().collect()
}

fn translate_reader_action(action: Action, state: &AppState) -> Vec<Msg> {
    let msg = match action {
        Action::Left | Action::Up => ReaderMsg::PreviousPage,
        Action::Right | Action::Down | Action::PlayPause => ReaderMsg::NextPage,
        Action::Increase => ReaderMsg::IncreaseMargin,
        Action::Decrease => ReaderMsg::DecreaseMargin,
        Action::CycleTheme => ReaderMsg::CycleTheme,
        Action::Listen => {
            return vec![Msg::Navigation(NavigationMsg::RequestView(
                ViewState::Audio,
            ))]
        }
        Action::Favorite => {
            return state
                .entity
                .selected_id()
                .map(|id| Msg::Library(LibraryMsg::ToggleFavorite(id.to_string())))
                .into_iter()
                .collect()
        }
        _ => return vec![],
    };
    vec![Msg::Reader(msg)]
}

fn translate_audio_action(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::PlayPause | Action::Select => PlaybackMsg::TogglePlay,
        Action::Left => PlaybackMsg::SkipBackward,
        Action::Right => PlaybackMsg::SkipForward,
        Action::Up => PlaybackMsg::PreviousChapter,
        Action::Down => PlaybackMsg::NextChapter,
        Action::Speed => PlaybackMsg::CycleSpeed,
        Action::Increase => PlaybackMsg::VolumeUp,
        Action::Decrease => PlaybackMsg::VolumeDown,
        _ => return vec![],
    };
    vec![Msg::Playback(msg)]
}

fn translate_ai_action(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::Left => AiMsg::PreviousTab,
        Action::Right => AiMsg::NextTab,
        Action::Up => AiMsg::PreviousChapter,
        Action::Down => AiMsg::NextChapter,
        Action::Summarize | Action::Select => AiMsg::RequestSummary,
        _ => return vec![],
    };
    vec![Msg::Ai(msg)]
}

fn translate_settings_action(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::Up => SettingsMsg::CursorUp,
        Action::Down => SettingsMsg::CursorDown,
        Action::Left | Action::Decrease => SettingsMsg::Decrease,
        Action::Right | Action::Increase => SettingsMsg::Increase,
        Action::Select | Action::PlayPause => SettingsMsg::Toggle,
        _ => return vec![],
    };
    vec![Msg::Settings(msg)]
}
