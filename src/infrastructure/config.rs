use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::{playback::DEFAULT_SKIP_SECONDS, system::DEFAULT_NOTICE_TICKS},
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Remote summary service. Without an endpoint the AI panel only shows
/// built-in content.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlaybackConfig {
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_seconds: default_skip_seconds(),
        }
    }
}

fn default_skip_seconds() -> u32 {
    DEFAULT_SKIP_SECONDS
}

fn default_notice_ticks() -> u32 {
    DEFAULT_NOTICE_TICKS
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,
}

impl Default for Config {
    /// Built-in defaults only, without reading any file.
    fn default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("embedded config is invalid: {e}");
            Self {
                config: AppConfig::default(),
                keybindings: keybindings::KeyBindings::default(),
                styles: styles::Styles::default(),
                ai: AiConfig::default(),
                playback: PlaybackConfig::default(),
                notice_ticks: default_notice_ticks(),
            }
        })
    }
}

impl Config {
    /// The configuration shipped in the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user configuration from the config directory over the embedded
    /// defaults. A missing user file is not an error.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    pub fn load_from(
        config_dir: &std::path::Path,
        data_dir: &std::path::Path,
    ) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_embedded_config_parses() -> Result<()> {
        let cfg = Config::embedded()?;
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert!(cfg.styles.contains_key("notice_error"));
        assert_eq!(cfg.playback.skip_seconds, 30);
        assert_eq!(cfg.ai.endpoint, None);
        Ok(())
    }

    #[test]
    fn test_missing_user_config_uses_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cfg = Config::load_from(dir.path(), dir.path())?;

        assert_eq!(cfg.notice_ticks, DEFAULT_NOTICE_TICKS);
        assert_eq!(cfg.keybindings.len(), Config::embedded()?.keybindings.len());
        Ok(())
    }

    #[test]
    fn test_user_config_overrides_and_merges() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("config.json5"),
            r#"{
                "keybindings": { "<x>": "Quit" },
                "ai": { "endpoint": "http://localhost:8080" },
                "playback": { "skip_seconds": 15 },
            }"#,
        )?;

        let cfg = Config::load_from(dir.path(), dir.path())?;

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(cfg.keybindings.action_for(&x), Some(Action::Quit));
        assert_eq!(cfg.keybindings.action_for(&q), Some(Action::Quit));
        assert_eq!(cfg.ai.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cfg.ai.timeout_secs, 10);
        assert_eq!(cfg.playback.skip_seconds, 15);
        Ok(())
    }
}
