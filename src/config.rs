use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::animator::{DEFAULT_TYPING_DELAY_MS, typing_delay};
use crate::storage::history::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_CONFIG_PATH: &str = "config/widget.json";
const DATABASE_FILE: &str = "widget.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub history_limit: usize,
    pub typing_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            data_dir: PathBuf::from("data"),
            export_dir: PathBuf::from("exports"),
            history_limit: DEFAULT_HISTORY_LIMIT,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn typing_delay(&self) -> Duration {
        typing_delay(self.typing_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Load the widget config; a missing file is created with defaults.
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                "Config file {} not found; writing defaults",
                path.display()
            );
            let config = AppConfig::default();
            if let Err(err) = save_config(path, &config) {
                log::warn!("Unable to create {}: {err}", path.display());
            }
            config
        }
        Err(err) => {
            log::warn!("Failed to read config file {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &Path, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
