use crate::{
    core::{
        cmd::Cmd,
        msg::{
            ai::AiMsg, library::LibraryMsg, navigation::NavigationMsg,
            onboarding::OnboardingMsg, playback::PlaybackMsg, premium::PremiumMsg, Msg,
        },
        navigation::{
            check_guard, check_selection, entity_id_from_path, GuardRejection, NavContext,
            LIBRARY_PATH,
        },
        state::{premium::UpsellOutcome, AppState},
    },
    domain::{notice::Notice, view::ViewState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Navigation(nav_msg) => update_navigation(&mut state, nav_msg),
        Msg::Library(library_msg) => update_library(&mut state, library_msg),
        Msg::Reader(reader_msg) => {
            state.reader.update(reader_msg);
            vec![]
        }
        Msg::Playback(playback_msg) => state.playback.update(playback_msg),
        Msg::Premium(premium_msg) => update_premium(&mut state, premium_msg),
        Msg::Onboarding(onboarding_msg) => update_onboarding(&mut state, onboarding_msg),
        Msg::Settings(settings_msg) => {
            state.settings.update(settings_msg);
            vec![]
        }
        Msg::Ai(ai_msg) => update_ai(&mut state, ai_msg),
    };
    (state, commands)
}

fn update_navigation(state: &mut AppState, msg: NavigationMsg) -> Vec<Cmd> {
    match msg {
        NavigationMsg::PathChanged(path) => handle_path_changed(state, &path),
        NavigationMsg::RequestView(target) => request_view(state, target),
        NavigationMsg::Back => {
            if state.onboarding.is_active() {
                return vec![];
            }
            vec![Cmd::NavigateBack]
        }
    }
}

/// Outbound view change: guards, then path request, then the view write.
/// A rejection is surfaced as a notice and changes nothing.
pub fn request_view(state: &mut AppState, target: ViewState) -> Vec<Cmd> {
    if state.onboarding.is_active() {
        log::debug!("view request to {target} ignored during onboarding");
        return vec![];
    }

    let previous = state.view.get();
    let ctx = NavContext::new(state.entity.selected(), state.premium.is_premium());
    match state
        .navigation
        .request_view_change(target, &ctx, &mut state.view)
    {
        Ok(path) => {
            let mut cmds: Vec<Cmd> = path.map(|path| Cmd::Navigate { path }).into_iter().collect();
            cmds.extend(apply_view_transition(state, previous, target));
            cmds
        }
        Err(rejection) => {
            reject(state, rejection);
            vec![]
        }
    }
}

fn reject(state: &mut AppState, rejection: GuardRejection) {
    log::info!("navigation rejected: {rejection}");
    state.system.show_notice(Notice::error(rejection.to_string()));
}

/// Binds the screen being entered to the selected title and releases the
/// playback timer when leaving the player.
fn apply_view_transition(state: &mut AppState, previous: ViewState, next: ViewState) -> Vec<Cmd> {
    let mut cmds = vec![];
    if previous == ViewState::Audio && next != ViewState::Audio {
        cmds.extend(state.playback.stop());
    }

    match next {
        ViewState::Reader => {
            if let Some(book) = state.entity.selected() {
                state.reader.open(book);
            }
        }
        ViewState::Audio => {
            if let Some(book) = state.entity.selected() {
                let is_new = state.playback.book_id() != Some(book.id.as_str());
                cmds.extend(state.playback.load(book));
                if is_new {
                    state.playback.set_speed(state.settings.default_speed());
                }
            }
        }
        ViewState::Library | ViewState::Ai | ViewState::Stats | ViewState::Settings => {}
    }
    cmds
}

/// Inbound path: derive the view and write it only when it differs. Paths
/// naming a title select it when the guards allow, otherwise they are
/// redirected to the library.
fn handle_path_changed(state: &mut AppState, path: &str) -> Vec<Cmd> {
    let derived = state.navigation.observe_path(path);
    if state.onboarding.is_active() {
        return vec![];
    }

    let mut entity_changed = false;
    if derived.requires_entity() {
        match resolve_entity(state, path, derived) {
            Ok(changed) => entity_changed = changed,
            Err(rejection) => {
                reject(state, rejection);
                let mut cmds: Vec<Cmd> = state
                    .navigation
                    .request_path(LIBRARY_PATH.to_string())
                    .map(|path| Cmd::Navigate { path })
                    .into_iter()
                    .collect();
                let previous = state.view.get();
                if state.navigation.sync_view(ViewState::Library, &mut state.view) {
                    cmds.extend(apply_view_transition(state, previous, ViewState::Library));
                }
                return cmds;
            }
        }
    }

    let previous = state.view.get();
    let view_changed = state.navigation.sync_view(derived, &mut state.view);
    if view_changed || entity_changed {
        let current = state.view.get();
        apply_view_transition(state, previous, current)
    } else {
        vec![]
    }
}

/// Returns whether the selection changed.
fn resolve_entity(
    state: &mut AppState,
    path: &str,
    view: ViewState,
) -> Result<bool, GuardRejection> {
    let is_premium = state.premium.is_premium();
    let Some(id) = entity_id_from_path(path) else {
        let ctx = NavContext::new(state.entity.selected(), is_premium);
        return check_guard(view, &ctx).map(|_| false);
    };

    if state.entity.selected_id() == Some(id) {
        let ctx = NavContext::new(state.entity.selected(), is_premium);
        return check_guard(view, &ctx).map(|_| false);
    }

    let book = state
        .library
        .book(id)
        .cloned()
        .ok_or(GuardRejection::NoSelection)?;
    check_selection(&book, view, is_premium)?;
    log::info!("path {path} selects \"{}\"", book.title);
    state.entity.set_selected(Some(book));
    Ok(true)
}

fn update_library(state: &mut AppState, msg: LibraryMsg) -> Vec<Cmd> {
    match msg {
        LibraryMsg::Open(id) => select_and_request(state, &id, ViewState::Reader).unwrap_or_default(),
        LibraryMsg::Play(id) => {
            let Some(mut cmds) = select_and_request(state, &id, ViewState::Audio) else {
                return vec![];
            };
            if state.settings.auto_play
                && state.view.get() == ViewState::Audio
                && !state.playback.is_playing()
            {
                cmds.extend(state.playback.update(PlaybackMsg::TogglePlay));
            }
            cmds
        }
        other => {
            let (updated, notice) = state.library.update(other);
            if let Some(book) = updated {
                state.entity.refresh(&book);
            }
            if let Some(notice) = notice {
                state.system.show_notice(notice);
            }
            vec![]
        }
    }
}

/// Puts a catalog title in focus and requests `target` for it. Premium titles
/// open the upsell instead. Returns `None` when nothing changed.
fn select_and_request(state: &mut AppState, id: &str, target: ViewState) -> Option<Vec<Cmd>> {
    let Some(book) = state.library.book(id).cloned() else {
        state
            .system
            .show_notice(Notice::error(format!("Unknown title {id}")));
        return None;
    };

    match check_selection(&book, target, state.premium.is_premium()) {
        Ok(()) => {
            state.entity.set_selected(Some(book));
            Some(request_view(state, target))
        }
        Err(GuardRejection::PremiumRequired) => {
            state.premium.request_upsell();
            state.system.show_notice(Notice::info(format!(
                "\"{}\" requires Eduletter Premium",
                book.title
            )));
            None
        }
        Err(rejection) => {
            reject(state, rejection);
            None
        }
    }
}

fn update_premium(state: &mut AppState, msg: PremiumMsg) -> Vec<Cmd> {
    if let Some(notice) = state.premium.update(msg) {
        state.system.show_notice(notice);
    }
    vec![]
}

fn update_onboarding(state: &mut AppState, msg: OnboardingMsg) -> Vec<Cmd> {
    let Some(preferences) = state.onboarding.update(msg) else {
        return vec![];
    };

    state.settings.theme = preferences.theme;
    state.reader.theme = preferences.theme;
    state.settings.language = preferences.language;
    state.preferences = Some(preferences);

    let mut cmds = vec![Cmd::MarkVisited];
    cmds.extend(request_view(state, ViewState::Library));
    state
        .system
        .show_notice(Notice::success("Welcome to Eduletter! Your library is ready"));
    cmds
}

fn update_ai(state: &mut AppState, msg: AiMsg) -> Vec<Cmd> {
    if msg != AiMsg::RequestSummary {
        if let Some(notice) = state.ai.update(msg) {
            state.system.show_notice(notice);
        }
        return vec![];
    }

    if !state.premium.is_premium() {
        if state.premium.request_upsell() == UpsellOutcome::ModalOpened {
            state
                .system
                .show_notice(Notice::info("AI summaries are part of Eduletter Premium"));
        }
        return vec![];
    }
    if state.config.config.ai.endpoint.is_none() {
        state.system.show_notice(Notice::info(
            "AI service is not configured; showing the built-in summary",
        ));
        return vec![];
    }
    let Some(book_id) = state.entity.selected_id().map(str::to_string) else {
        reject(state, GuardRejection::NoSelection);
        return vec![];
    };
    if !state.ai.begin_request() {
        return vec![];
    }

    vec![Cmd::FetchChapterSummary {
        book_id,
        chapter: state.ai.chapter().chapter,
    }]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{settings::SettingsMsg, system::SystemMsg},
        domain::preferences::Theme,
        infrastructure::config::Config,
    };

    fn ready_state() -> AppState {
        let mut state = AppState::new(Config::default(), true);
        state.navigation.observe_path(LIBRARY_PATH);
        state
    }

    fn nav(msg: NavigationMsg) -> Msg {
        Msg::Navigation(msg)
    }

    fn path_changed(path: &str) -> Msg {
        nav(NavigationMsg::PathChanged(path.to_string()))
    }

    fn navigate(path: &str) -> Cmd {
        Cmd::Navigate {
            path: path.to_string(),
        }
    }

    #[test]
    fn test_reader_request_without_selection_shows_notice() {
        let (state, cmds) = update(nav(NavigationMsg::RequestView(ViewState::Reader)), ready_state());

        assert!(cmds.is_empty());
        assert_eq!(state.view.get(), ViewState::Library);
        assert_eq!(
            state.system.notice(),
            Some(&Notice::error("select a title from your library"))
        );
    }

    #[test]
    fn test_open_free_title_requests_reader_path() {
        let (state, cmds) = update(Msg::Library(LibraryMsg::Open("2".into())), ready_state());

        assert_eq!(cmds, vec![navigate("/reader/2")]);
        assert_eq!(state.view.get(), ViewState::Reader);
        assert_eq!(state.entity.selected_id(), Some("2"));
        assert_eq!(state.reader.book_id(), Some("2"));
    }

    #[test]
    fn test_open_premium_title_opens_upsell() {
        let (state, cmds) = update(Msg::Library(LibraryMsg::Open("1".into())), ready_state());

        assert!(cmds.is_empty());
        assert!(state.premium.is_modal_open());
        assert_eq!(state.entity.selected(), None);
        assert_eq!(state.view.get(), ViewState::Library);
    }

    #[test]
    fn test_play_title_without_audio_is_rejected() {
        let (state, cmds) = update(Msg::Library(LibraryMsg::Play("8".into())), ready_state());

        assert!(cmds.is_empty());
        assert_eq!(
            state.system.notice(),
            Some(&Notice::error("choose a title with an audio edition"))
        );
        assert_eq!(state.entity.selected(), None);
    }

    #[test]
    fn test_play_autostarts_timer() {
        let (state, cmds) = update(Msg::Library(LibraryMsg::Play("2".into())), ready_state());

        assert_eq!(
            cmds,
            vec![
                navigate("/audio/2"),
                Cmd::StartPlaybackTimer { interval_ms: 1000 }
            ]
        );
        assert!(state.playback.is_playing());
    }

    #[test]
    fn test_play_without_autoplay() {
        let mut state = ready_state();
        state.settings.auto_play = false;

        let (state, cmds) = update(Msg::Library(LibraryMsg::Play("2".into())), state);

        assert_eq!(cmds, vec![navigate("/audio/2")]);
        assert!(!state.playback.is_playing());
    }

    #[test]
    fn test_leaving_audio_releases_timer() {
        let (state, _) = update(Msg::Library(LibraryMsg::Play("2".into())), ready_state());
        let (state, _) = update(path_changed("/audio/2"), state);

        let (state, cmds) = update(nav(NavigationMsg::RequestView(ViewState::Library)), state);

        assert_eq!(cmds, vec![navigate("/library"), Cmd::StopPlaybackTimer]);
        assert!(!state.playback.is_playing());
    }

    #[test]
    fn test_path_change_writes_view_only_when_different() {
        let state = ready_state();
        let (state, _) = update(path_changed("/library"), state);
        assert_eq!(state.view.revision(), 0);

        let (state, cmds) = update(path_changed("/profile"), state);
        assert!(cmds.is_empty());
        assert_eq!(state.view.get(), ViewState::Settings);
        assert_eq!(state.view.revision(), 1);

        let (state, _) = update(path_changed("/profile"), state);
        assert_eq!(state.view.revision(), 1);
    }

    #[test]
    fn test_unknown_path_resolves_to_library() {
        let (state, _) = update(path_changed("/profile"), ready_state());
        let (state, cmds) = update(path_changed("/unknown/xyz"), state);

        assert!(cmds.is_empty());
        assert_eq!(state.view.get(), ViewState::Library);
    }

    #[test]
    fn test_deep_link_selects_free_title() {
        let (state, cmds) = update(path_changed("/reader/4"), ready_state());

        assert!(cmds.is_empty());
        assert_eq!(state.view.get(), ViewState::Reader);
        assert_eq!(state.entity.selected_id(), Some("4"));
        assert_eq!(state.reader.book_id(), Some("4"));
    }

    #[test]
    fn test_deep_link_to_premium_title_redirects() {
        let (state, cmds) = update(path_changed("/reader/1"), ready_state());

        assert_eq!(cmds, vec![navigate("/library")]);
        assert_eq!(state.view.get(), ViewState::Library);
        assert_eq!(state.entity.selected(), None);
        assert!(state.system.notice().is_some_and(|n| n.is_error()));
    }

    #[test]
    fn test_deep_link_audio_without_edition_redirects() {
        let (state, cmds) = update(path_changed("/audio/8"), ready_state());

        assert_eq!(cmds, vec![navigate("/library")]);
        assert_eq!(state.view.get(), ViewState::Library);
    }

    #[test]
    fn test_deep_link_to_unknown_title_redirects() {
        let (state, cmds) = update(path_changed("/reader/999"), ready_state());
        assert_eq!(cmds, vec![navigate("/library")]);
        assert_eq!(state.view.get(), ViewState::Library);
    }

    #[test]
    fn test_history_back_to_other_title_rebinds_reader() {
        let (state, _) = update(Msg::Library(LibraryMsg::Open("2".into())), ready_state());
        let (state, _) = update(path_changed("/reader/2"), state);
        let (state, _) = update(Msg::Library(LibraryMsg::Open("4".into())), state);
        let (state, _) = update(path_changed("/reader/4"), state);
        assert_eq!(state.reader.book_id(), Some("4"));

        let (state, cmds) = update(path_changed("/reader/2"), state);

        assert!(cmds.is_empty());
        assert_eq!(state.entity.selected_id(), Some("2"));
        assert_eq!(state.reader.book_id(), Some("2"));
    }

    #[test]
    fn test_repeated_library_request_is_idempotent() {
        let state = ready_state();
        let (state, first) = update(nav(NavigationMsg::RequestView(ViewState::Library)), state);
        let (_, second) = update(nav(NavigationMsg::RequestView(ViewState::Library)), state);

        assert!(first.is_empty());
        assert!(second.is_empty());
    }

    #[test]
    fn test_upgrade_twice() {
        let (state, _) = update(Msg::Premium(PremiumMsg::Upgrade), ready_state());
        let notice = state.system.notice().cloned();
        let (state, cmds) = update(Msg::Premium(PremiumMsg::Upgrade), state);

        assert!(cmds.is_empty());
        assert!(state.premium.is_premium());
        assert_eq!(state.system.notice().cloned(), notice);
    }

    #[test]
    fn test_premium_unlocks_premium_title() {
        let (state, _) = update(Msg::Premium(PremiumMsg::Upgrade), ready_state());
        let (state, cmds) = update(Msg::Library(LibraryMsg::Open("1".into())), state);

        assert_eq!(cmds, vec![navigate("/reader/1")]);
        assert_eq!(state.view.get(), ViewState::Reader);
    }

    #[test]
    fn test_onboarding_suppresses_routing() {
        let state = AppState::new(Config::default(), false);
        let (state, cmds) = update(path_changed("/profile"), state);
        assert!(cmds.is_empty());
        assert_eq!(state.view.get(), ViewState::Library);

        let (state, cmds) = update(nav(NavigationMsg::RequestView(ViewState::Settings)), state);
        assert!(cmds.is_empty());
        assert_eq!(state.view.get(), ViewState::Library);

        let (_, cmds) = update(nav(NavigationMsg::Back), state);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_onboarding_completion() {
        let mut state = AppState::new(Config::default(), false);
        for _ in 0..5 {
            state = update(Msg::Onboarding(OnboardingMsg::NextStep), state).0;
        }
        assert!(state.onboarding.is_active());

        let (state, cmds) = update(Msg::Onboarding(OnboardingMsg::NextStep), state);

        assert!(!state.onboarding.is_active());
        assert_eq!(cmds, vec![Cmd::MarkVisited, navigate("/library")]);
        assert_eq!(state.view.get(), ViewState::Library);
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.preferences.is_some());
        assert!(state
            .system
            .notice()
            .is_some_and(|n| n.text.starts_with("Welcome")));
    }

    #[test]
    fn test_ai_summary_requires_premium() {
        let (state, cmds) = update(Msg::Ai(AiMsg::RequestSummary), ready_state());
        assert!(cmds.is_empty());
        assert!(state.premium.is_modal_open());
    }

    #[test]
    fn test_ai_summary_without_endpoint() {
        let (state, _) = update(Msg::Premium(PremiumMsg::Upgrade), ready_state());
        let (state, cmds) = update(Msg::Ai(AiMsg::RequestSummary), state);

        assert!(cmds.is_empty());
        assert!(!state.ai.is_loading());
    }

    #[test]
    fn test_ai_summary_fetch() {
        let mut state = ready_state();
        state.config.config.ai.endpoint = Some("http://localhost:9".to_string());
        let (state, _) = update(Msg::Premium(PremiumMsg::Upgrade), state);

        let (state, cmds) = update(Msg::Ai(AiMsg::RequestSummary), state);
        assert!(cmds.is_empty());
        assert_eq!(
            state.system.notice(),
            Some(&Notice::error("select a title from your library"))
        );

        let (state, _) = update(Msg::Library(LibraryMsg::Open("2".into())), state);
        let (state, cmds) = update(Msg::Ai(AiMsg::RequestSummary), state);
        assert_eq!(
            cmds,
            vec![Cmd::FetchChapterSummary {
                book_id: "2".into(),
                chapter: 1
            }]
        );

        // in flight: no duplicate request
        let (_, cmds) = update(Msg::Ai(AiMsg::RequestSummary), state);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_settings_and_system_are_delegated() {
        let (state, _) = update(Msg::Settings(SettingsMsg::Toggle), ready_state());
        assert_eq!(state.theme(), Theme::Dark);

        let (state, _) = update(Msg::System(SystemMsg::Quit), state);
        assert!(state.system.should_quit);
    }
}
