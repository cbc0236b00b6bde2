// Reader configuration, loaded once at startup from a TOML file.
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "subdeck";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Root the `/r/...` paths are appended to. Point it at a proxy if needed.
    pub api_base: String,
    pub user_agent: String,
    pub column_width: u16,
    pub tick_rate_ms: u64,
    pub notification_timeout_ms: u64,
    /// Check `/r/{name}/about.json` before opening a column.
    pub verify_before_add: bool,
    /// Unset means requests may hang forever and the column stays loading.
    pub request_timeout_secs: Option<u64>,
    /// Columns opened at startup, in order.
    pub subreddits: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://www.reddit.com".to_string(),
            user_agent: format!("subdeck/{} (terminal reader)", env!("CARGO_PKG_VERSION")),
            column_width: 44,
            tick_rate_ms: 100,
            notification_timeout_ms: 3000,
            verify_before_add: false,
            request_timeout_secs: None,
            subreddits: Vec::new(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    pub fn default_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join("subdeck.log")
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        if self.column_width < 10 {
            return Err(ConfigError::Invalid("column_width must be at least 10".to_string()));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Ticks a notification stays on screen.
    pub fn notification_ticks(&self) -> u64 {
        (self.notification_timeout_ms / self.tick_rate_ms).max(1)
    }
}
