use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::models::DispatchStrategy;

pub const DEFAULT_ENDPOINT: &str =
    "https://destroyer795-sentiment-analyzer-extension.hf.space/predict";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BAR_DELAY_MS: u64 = 100;

/// Image shown for each sentiment category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSet {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            positive: "icons/positive.png".to_string(),
            negative: "icons/negative.png".to_string(),
            neutral: "icons/neutral.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub dispatch: DispatchStrategy,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_bar_delay_ms")]
    pub bar_delay_ms: u64,
    #[serde(default)]
    pub icons: IconSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            dispatch: DispatchStrategy::default(),
            request_timeout_secs: default_timeout_secs(),
            bar_delay_ms: default_bar_delay_ms(),
            icons: IconSet::default(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_bar_delay_ms() -> u64 {
    DEFAULT_BAR_DELAY_MS
}

pub fn get_app_data_dir() -> Result<PathBuf, String> {
    let data_dir = dirs::data_dir()
        .ok_or("Could not find data directory")?
        .join("SentimentAnalyzer");

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| e.to_string())?;
    }

    Ok(data_dir)
}

fn get_config_path() -> Result<PathBuf, String> {
    Ok(get_app_data_dir()?.join("config.json"))
}

pub fn load_config_from(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config: {}", e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config: {}", e))
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, content)
        .map_err(|e| format!("Failed to write config: {}", e))?;
    Ok(())
}

pub fn load_config() -> Result<Config, String> {
    load_config_from(&get_config_path()?)
}

/// A missing or corrupt file never blocks an analysis; defaults take over.
pub fn load_config_or_default_from(path: &Path) -> Config {
    load_config_from(path).unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        Config::default()
    })
}

pub fn load_config_or_default() -> Config {
    match get_config_path() {
        Ok(path) => load_config_or_default_from(&path),
        Err(e) => {
            log::warn!("Using default config: {}", e);
            Config::default()
        }
    }
}

pub fn save_config(config: &Config) -> Result<(), String> {
    save_config_to(&get_config_path()?, config)
}

pub fn set_endpoint(endpoint: &str) -> Result<Config, String> {
    let endpoint = endpoint.trim();
    url::Url::parse(endpoint).map_err(|e| format!("Invalid endpoint URL: {}", e))?;

    let mut config = load_config().unwrap_or_default();
    config.endpoint = endpoint.to_string();
    save_config(&config)?;
    Ok(config)
}

pub fn set_dispatch_strategy(strategy: DispatchStrategy) -> Result<Config, String> {
    let mut config = load_config().unwrap_or_default();
    config.dispatch = strategy;
    save_config(&config)?;
    Ok(config)
}
