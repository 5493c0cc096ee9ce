use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::msg::onboarding::OnboardingMsg,
    domain::preferences::{cycle, cycle_back, OnboardingPreferences, INTERESTS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum OnboardingStep {
    #[default]
    #[strum(to_string = "Welcome")]
    Welcome,
    #[strum(to_string = "Theme")]
    Theme,
    #[strum(to_string = "Language")]
    Language,
    #[strum(to_string = "Interests")]
    Interests,
    #[strum(to_string = "Reading goal")]
    Goal,
    #[strum(to_string = "Format")]
    Format,
}

impl OnboardingStep {
    pub fn index(&self) -> usize {
        Self::iter().position(|step| step == *self).unwrap_or(0)
    }

    pub fn count() -> usize {
        Self::iter().count()
    }

    fn next(&self) -> Option<Self> {
        Self::iter().nth(self.index() + 1)
    }

    fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::iter().nth(i))
    }
}

/// First-run wizard. While active, normal routing is suspended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnboardingState {
    active: bool,
    step: OnboardingStep,
    /// Cursor over the interests grid
    cursor: usize,
    draft: OnboardingPreferences,
}

impl OnboardingState {
    /// `visited` is the durable first-run latch.
    pub fn new(visited: bool) -> Self {
        Self {
            active: !visited,
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn draft(&self) -> &OnboardingPreferences {
        &self.draft
    }

    /// Returns the collected preferences when the last step is confirmed.
    pub fn update(&mut self, msg: OnboardingMsg) -> Option<OnboardingPreferences> {
        if !self.active {
            return None;
        }

        match msg {
            OnboardingMsg::NextStep => match self.step.next() {
                Some(step) => {
                    self.step = step;
                    self.cursor = 0;
                    None
                }
                None => {
                    self.active = false;
                    log::info!("onboarding completed: {:?}", self.draft);
                    Some(self.draft.clone())
                }
            },
            OnboardingMsg::PreviousStep => {
                if let Some(step) = self.step.previous() {
                    self.step = step;
                    self.cursor = 0;
                }
                None
            }
            OnboardingMsg::NextOption => {
                self.move_option(true);
                None
            }
            OnboardingMsg::PreviousOption => {
                self.move_option(false);
                None
            }
            OnboardingMsg::ToggleOption => {
                if self.step == OnboardingStep::Interests {
                    if let Some(interest) = INTERESTS.get(self.cursor) {
                        self.draft.toggle_interest(interest);
                    }
                }
                None
            }
        }
    }

    fn move_option(&mut self, forward: bool) {
        let draft = &mut self.draft;
        match self.step {
            OnboardingStep::Welcome => {}
            OnboardingStep::Theme => {
                draft.theme = if forward {
                    cycle(draft.theme)
                } else {
                    cycle_back(draft.theme)
                }
            }
            OnboardingStep::Language => {
                draft.language = if forward {
                    cycle(draft.language)
                } else {
                    cycle_back(draft.language)
                }
            }
            OnboardingStep::Interests => {
                let len = INTERESTS.len();
                self.cursor = if forward {
                    (self.cursor + 1) % len
                } else {
                    (self.cursor + len - 1) % len
                };
            }
            OnboardingStep::Goal => {
                draft.reading_goal = if forward {
                    cycle(draft.reading_goal)
                } else {
                    cycle_back(draft.reading_goal)
                }
            }
            OnboardingStep::Format => {
                draft.preferred_format = if forward {
                    cycle(draft.preferred_format)
                } else {
                    cycle_back(draft.preferred_format)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::preferences::{Language, PreferredFormat, Theme};

    #[test]
    fn test_latch_decides_activation() {
        assert!(OnboardingState::new(false).is_active());
        assert!(!OnboardingState::new(true).is_active());
    }

    #[test]
    fn test_inactive_ignores_messages() {
        let mut state = OnboardingState::new(true);
        assert_eq!(state.update(OnboardingMsg::NextStep), None);
        assert_eq!(state.step(), OnboardingStep::Welcome);
    }

    #[test]
    fn test_previous_step_at_start_is_noop() {
        let mut state = OnboardingState::new(false);
        state.update(OnboardingMsg::PreviousStep);
        assert_eq!(state.step(), OnboardingStep::Welcome);
    }

    #[test]
    fn test_full_walkthrough_returns_choices() {
        let mut state = OnboardingState::new(false);

        state.update(OnboardingMsg::NextStep);
        assert_eq!(state.step(), OnboardingStep::Theme);
        state.update(OnboardingMsg::NextOption);
        state.update(OnboardingMsg::NextOption);

        state.update(OnboardingMsg::NextStep);
        state.update(OnboardingMsg::NextOption);

        state.update(OnboardingMsg::NextStep);
        assert_eq!(state.step(), OnboardingStep::Interests);
        state.update(OnboardingMsg::ToggleOption);
        state.update(OnboardingMsg::PreviousOption);
        state.update(OnboardingMsg::ToggleOption);

        state.update(OnboardingMsg::NextStep);
        state.update(OnboardingMsg::NextStep);
        assert_eq!(state.step(), OnboardingStep::Format);
        state.update(OnboardingMsg::PreviousOption);

        let prefs = state.update(OnboardingMsg::NextStep);

        assert!(!state.is_active());
        let prefs = prefs.expect("completion should yield preferences");
        assert_eq!(prefs.theme, Theme::Sepia);
        assert_eq!(prefs.language, Language::En);
        assert_eq!(
            prefs.interests,
            vec!["Technology".to_string(), "Environment".to_string()]
        );
        assert_eq!(prefs.preferred_format, PreferredFormat::Audio);
    }

    #[test]
    fn test_step_count() {
        assert_eq!(OnboardingStep::count(), 6);
        assert_eq!(OnboardingStep::Format.index(), 5);
    }
}
