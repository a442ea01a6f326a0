use crate::draft::metrics::{MetricsSettings, DEFAULT_PREVIEW_CHARS, DEFAULT_WORDS_PER_MINUTE};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RESET_DELAY_MS: u64 = 2000;
const DEFAULT_EXPLORE_LATENCY_MS: u64 = 500;

/// Keys accepted by [`BlogConfig::get`] and [`BlogConfig::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "reset-delay-ms",
    "explore-latency-ms",
    "words-per-minute",
    "preview-chars",
    "theme",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "Unknown theme: {} (expected light, dark or system)",
                other
            )),
        }
    }
}

/// Configuration for blogdraft, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BlogConfig {
    /// Delay before the form resets after a successful save
    #[serde(default = "default_reset_delay")]
    pub reset_delay_ms: u64,

    /// Simulated latency before explore results are shown
    #[serde(default = "default_explore_latency")]
    pub explore_latency_ms: u64,

    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    #[serde(default)]
    pub theme: Theme,
}

fn default_reset_delay() -> u64 {
    DEFAULT_RESET_DELAY_MS
}

fn default_explore_latency() -> u64 {
    DEFAULT_EXPLORE_LATENCY_MS
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            explore_latency_ms: DEFAULT_EXPLORE_LATENCY_MS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            theme: Theme::default(),
        }
    }
}

impl BlogConfig {
    /// Reads `config.json` from `dir`. A missing file means defaults; keys
    /// absent from the file fall back to their defaults too.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match fs::read(dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes every key to `config.json`, creating `dir` as needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(dir.join(CONFIG_FILENAME), serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "reset-delay-ms" => Some(self.reset_delay_ms.to_string()),
            "explore-latency-ms" => Some(self.explore_latency_ms.to_string()),
            "words-per-minute" => Some(self.words_per_minute.to_string()),
            "preview-chars" => Some(self.preview_chars.to_string()),
            "theme" => Some(self.theme.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "reset-delay-ms" => self.reset_delay_ms = parse_number(key, value)?,
            "explore-latency-ms" => self.explore_latency_ms = parse_number(key, value)?,
            "words-per-minute" => self.words_per_minute = parse_positive(key, value)?,
            "preview-chars" => self.preview_chars = parse_positive(key, value)?,
            "theme" => self.theme = value.parse()?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn explore_latency(&self) -> Duration {
        Duration::from_millis(self.explore_latency_ms)
    }

    pub fn metrics(&self) -> MetricsSettings {
        MetricsSettings {
            words_per_minute: self.words_per_minute,
            preview_chars: self.preview_chars,
        }
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> std::result::Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", key, value))
}

fn parse_positive<T: FromStr + PartialEq + Default>(
    key: &str,
    value: &str,
) -> std::result::Result<T, String> {
    let parsed: T = parse_number(key, value)?;
    if parsed == T::default() {
        return Err(format!("{} must be greater than zero", key));
    }
    Ok(parsed)
}
