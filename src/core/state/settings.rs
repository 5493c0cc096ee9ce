use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::msg::settings::SettingsMsg,
    domain::{
        audio::{NORMAL_SPEED_INDEX, SPEEDS},
        preferences::{cycle, cycle_back, Language, Theme},
    },
};

pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SettingItem {
    #[strum(to_string = "Theme")]
    Theme,
    #[strum(to_string = "Language")]
    Language,
    #[strum(to_string = "Font size")]
    FontSize,
    #[strum(to_string = "Line height")]
    LineHeight,
    #[strum(to_string = "Auto-download")]
    AutoDownload,
    #[strum(to_string = "Offline mode")]
    OfflineMode,
    #[strum(to_string = "New releases")]
    NotifyNewReleases,
    #[strum(to_string = "Reading reminders")]
    NotifyReminders,
    #[strum(to_string = "Achievements")]
    NotifyAchievements,
    #[strum(to_string = "Share reading stats")]
    ShareStats,
    #[strum(to_string = "Usage analytics")]
    Analytics,
    #[strum(to_string = "Audio autoplay")]
    AutoPlay,
    #[strum(to_string = "Skip silence")]
    SkipSilence,
    #[strum(to_string = "Default speed")]
    DefaultSpeed,
}

/// Settings panel. In-memory only; it is also where the app theme lives.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    cursor: usize,
    pub theme: Theme,
    pub language: Language,
    pub font_size: u8,
    /// Line height in tenths (15 = 1.5)
    pub line_height: u8,
    pub auto_download: bool,
    pub offline_mode: bool,
    pub notify_new_releases: bool,
    pub notify_reminders: bool,
    pub notify_achievements: bool,
    pub share_stats: bool,
    pub analytics: bool,
    pub auto_play: bool,
    pub skip_silence: bool,
    pub default_speed_index: usize,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            cursor: 0,
            theme: Theme::default(),
            language: Language::default(),
            font_size: 16,
            line_height: 15,
            auto_download: false,
            offline_mode: false,
            notify_new_releases: true,
            notify_reminders: true,
            notify_achievements: false,
            share_stats: false,
            analytics: true,
            auto_play: true,
            skip_silence: false,
            default_speed_index: NORMAL_SPEED_INDEX,
        }
    }
}

impl SettingsState {
    pub fn items() -> impl Iterator<Item = SettingItem> {
        SettingItem::iter()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Option<SettingItem> {
        Self::items().nth(self.cursor)
    }

    pub fn default_speed(&self) -> f64 {
        SPEEDS[self.default_speed_index]
    }

    /// Human readable value of `item`.
    pub fn value_label(&self, item: SettingItem) -> String {
        let on_off = |b: bool| if b { "On" } else { "Off" }.to_string();
        match item {
            SettingItem::Theme => self.theme.to_string(),
            SettingItem::Language => self.language.to_string(),
            SettingItem::FontSize => format!("{}px", self.font_size),
            SettingItem::LineHeight => {
                format!("{}.{}", self.line_height / 10, self.line_height % 10)
            }
            SettingItem::AutoDownload => on_off(self.auto_download),
            SettingItem::OfflineMode => on_off(self.offline_mode),
            SettingItem::NotifyNewReleases => on_off(self.notify_new_releases),
            SettingItem::NotifyReminders => on_off(self.notify_reminders),
            SettingItem::NotifyAchievements => on_off(self.notify_achievements),
            SettingItem::ShareStats => on_off(self.share_stats),
            SettingItem::Analytics => on_off(self.analytics),
            SettingItem::AutoPlay => on_off(self.auto_play),
            SettingItem::SkipSilence => on_off(self.skip_silence),
            SettingItem::DefaultSpeed => format!("{}x", self.default_speed()),
        }
    }

    pub fn update(&mut self, msg: SettingsMsg) {
        match msg {
            SettingsMsg::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            SettingsMsg::CursorDown => {
                if self.cursor + 1 < Self::items().count() {
                    self.cursor += 1;
                }
            }
            SettingsMsg::Increase => self.adjust(true),
            SettingsMsg::Decrease => self.adjust(false),
            SettingsMsg::Toggle => {
                let Some(item) = self.highlighted() else {
                    return;
                };
                match self.flag_mut(item) {
                    Some(flag) => *flag = !*flag,
                    None => self.adjust(true),
                }
            }
        }
    }

    fn flag_mut(&mut self, item: SettingItem) -> Option<&mut bool> {
        match item {
            SettingItem::AutoDownload => Some(&mut self.auto_download),
            SettingItem::OfflineMode => Some(&mut self.offline_mode),
            SettingItem::NotifyNewReleases => Some(&mut self.notify_new_releases),
            SettingItem::NotifyReminders => Some(&mut self.notify_reminders),
            SettingItem::NotifyAchievements => Some(&mut self.notify_achievements),
            SettingItem::ShareStats => Some(&mut self.share_stats),
            SettingItem::Analytics => Some(&mut self.analytics),
            SettingItem::AutoPlay => Some(&mut self.auto_play),
            SettingItem::SkipSilence => Some(&mut self.skip_silence),
            SettingItem::Theme
            | SettingItem::Language
            | SettingItem::FontSize
            | SettingItem::LineHeight
            | SettingItem::DefaultSpeed => None,
        }
    }

    fn adjust(&mut self, up: bool) {
        let Some(item) = self.highlighted() else {
            return;
        };
        match item {
            SettingItem::Theme => {
                self.theme = if up { cycle(self.theme) } else { cycle_back(self.theme) }
            }
            SettingItem::Language => {
                self.language = if up {
                    cycle(self.language)
                } else {
                    cycle_back(self.language)
                }
            }
            SettingItem::FontSize => {
                self.font_size = if up {
                    (self.font_size + 1).min(MAX_FONT_SIZE)
                } else {
                    self.font_size.saturating_sub(1).max(MIN_FONT_SIZE)
                }
            }
            SettingItem::LineHeight => {
                self.line_height = if up {
                    (self.line_height + 1).min(20)
                } else {
                    self.line_height.saturating_sub(1).max(12)
                }
            }
            SettingItem::DefaultSpeed => {
                let len = SPEEDS.len();
                self.default_speed_index = if up {
                    (self.default_speed_index + 1).min(len - 1)
                } else {
                    self.default_speed_index.saturating_sub(1)
                }
            }
            flag => {
                if let Some(value) = self.flag_mut(flag) {
                    *value = up;
                }
            }
        }
    }
}
