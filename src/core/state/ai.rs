use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::msg::ai::AiMsg,
    domain::{
        ai::{AiSummaryResponse, ChapterSummary, SUMMARIES},
        notice::Notice,
        preferences::{cycle, cycle_back},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum AiTab {
    #[default]
    #[strum(to_string = "Summaries")]
    Summaries,
    #[strum(to_string = "Concept map")]
    Concepts,
    #[strum(to_string = "Recommendations")]
    Recommendations,
}

impl AiTab {
    pub fn index(&self) -> usize {
        Self::iter().position(|tab| tab == *self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiState {
    pub tab: AiTab,
    chapter_index: usize,
    remote_summary: Option<AiSummaryResponse>,
    loading: bool,
}

impl AiState {
    pub fn chapter(&self) -> &'static ChapterSummary {
        &SUMMARIES[self.chapter_index.min(SUMMARIES.len() - 1)]
    }

    pub fn remote_summary(&self) -> Option<&AiSummaryResponse> {
        self.remote_summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a remote request in flight. Returns false if one already is.
    pub fn begin_request(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Handles panel-local messages. Returns a notice to surface.
    pub fn update(&mut self, msg: AiMsg) -> Option<Notice> {
        match msg {
            AiMsg::NextTab => {
                self.tab = cycle(self.tab);
                None
            }
            AiMsg::PreviousTab => {
                self.tab = cycle_back(self.tab);
                None
            }
            AiMsg::NextChapter => {
                if self.chapter_index + 1 < SUMMARIES.len() {
                    self.chapter_index += 1;
                    self.remote_summary = None;
                }
                None
            }
            AiMsg::PreviousChapter => {
                if self.chapter_index > 0 {
                    self.chapter_index -= 1;
                    self.remote_summary = None;
                }
                None
            }
            AiMsg::SummaryReceived(response) => {
                self.loading = false;
                self.remote_summary = Some(response);
                Some(Notice::success("Summary generated"))
            }
            AiMsg::SummaryFailed(error) => {
                self.loading = false;
                Some(Notice::error(format!("Summary unavailable: {error}")))
            }
            // Needs premium and selection context; handled by the coordinator
            AiMsg::RequestSummary => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tabs_wrap() {
        let mut ai = AiState::default();
        ai.update(AiMsg::PreviousTab);
        assert_eq!(ai.tab, AiTab::Recommendations);
        ai.update(AiMsg::NextTab);
        assert_eq!(ai.tab, AiTab::Summaries);
    }

    #[test]
    fn test_chapter_bounds() {
        let mut ai = AiState::default();
        ai.update(AiMsg::PreviousChapter);
        assert_eq!(ai.chapter().chapter, 1);
        ai.update(AiMsg::NextChapter);
        ai.update(AiMsg::NextChapter);
        assert_eq!(ai.chapter().chapter, 2);
    }

    #[test]
    fn test_remote_summary_lifecycle() {
        let mut ai = AiState::default();
        assert!(ai.begin_request());
        assert!(!ai.begin_request());

        let response = AiSummaryResponse {
            summary: "short".into(),
            generated_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        };
        let notice = ai.update(AiMsg::SummaryReceived(response.clone()));

        assert!(!ai.is_loading());
        assert_eq!(ai.remote_summary(), Some(&response));
        assert_eq!(notice, Some(Notice::success("Summary generated")));

        ai.update(AiMsg::NextChapter);
        assert_eq!(ai.remote_summary(), None);
    }

    #[test]
    fn test_failure_clears_loading() {
        let mut ai = AiState::default();
        ai.begin_request();
        let notice = ai.update(AiMsg::SummaryFailed("timeout".into()));
        assert!(!ai.is_loading());
        assert!(notice.is_some_and(|n| n.is_error()));
    }
}
