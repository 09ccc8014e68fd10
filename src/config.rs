use crate::cmds::Cmd;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "TRIPLEVIEW_CONFIG_FILE";
const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("tripleview");
        config_dir.push("config.toml");
        locations.push(config_dir);
    }

    if let Some(mut home) = dirs::home_dir() {
        home.push(".tripleview.toml");
        locations.push(home);
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub insight: InsightConfig,
    #[serde(skip, default = "default_key_map")]
    pub key_map: KeyMap,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            insight: InsightConfig::default(),
            key_map: default_key_map(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub model: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for InsightConfig {
    fn default() -> InsightConfig {
        InsightConfig {
            model: "gemini-3-flash-preview".to_owned(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            api_key: None,
            timeout_secs: 15,
        }
    }
}

impl InsightConfig {
    /// Key from the config file, or the environment as out-of-band fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(API_KEY_ENV_VAR).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_key_map() -> KeyMap {
    let mut key_map = KeyMap::new();

    key_map.insert(Key::Char('h'), Cmd::PrevMonth);
    key_map.insert(Key::Char('l'), Cmd::NextMonth);
    key_map.insert(Key::Left, Cmd::PrevMonth);
    key_map.insert(Key::Right, Cmd::NextMonth);
    key_map.insert(Key::Char('t'), Cmd::Today);
    key_map.insert(Key::Char('r'), Cmd::RefreshInsight);
    key_map.insert(Key::Char('q'), Cmd::Exit);
    key_map.insert(Key::Ctrl('c'), Cmd::Exit);

    key_map
}

/// Loads the config from an explicit path, or the first existing default
/// location, or falls back to `Config::default()` when none exists.
pub fn load_suitable_config(path: Option<&Path>) -> io::Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => find_configfile_locations()
            .into_iter()
            .find(|location| location.exists()),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config = toml::from_str(&content)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            log::info!("loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            tick_rate_ms = 250

            [insight]
            model = "gemini-2.5-flash"
            api_key = "test-key"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.insight.model, "gemini-2.5-flash");
        assert_eq!(config.insight.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.insight.timeout(), Duration::from_secs(5));
        // endpoint keeps its default, the key map is never serialized
        assert!(config.insight.endpoint.contains("generativelanguage"));
        assert_eq!(config.key_map.get(&Key::Char('q')), Some(&Cmd::Exit));
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tick_rate_ms, 500);
        assert_eq!(config.insight.model, "gemini-3-flash-preview");
        assert!(config.insight.api_key.is_none());
    }

    #[test]
    fn config_file_key_wins_over_environment() {
        let config = InsightConfig {
            api_key: Some("from-file".to_owned()),
            ..InsightConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("from-file"));
    }
}
