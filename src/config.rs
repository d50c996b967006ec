//! Server configuration.
//!
//! Values come from an optional YAML file named by `MINIHTTPD_CONFIG`.
//! The `LISTEN` environment variable overrides the listen address.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use serde::Deserialize;

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "MINIHTTPD_CONFIG";

/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener and per-connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// How long a connection may sit idle waiting for the next request.
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
    /// Upper bound for the single read that carries a request.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            idle_timeout_ms: default_idle_timeout_ms(),
            read_buffer_size: default_read_buffer_size(),
        }
    }
}

impl ServerConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}

/// Document root layout and the reserved redirect pseudo-path.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Document served for the `/` target.
    #[serde(default = "default_index")]
    pub index: String,
    /// Root-relative name that answers with a permanent redirect.
    #[serde(default = "default_redirect_path")]
    pub redirect_path: String,
    #[serde(default = "default_redirect_location")]
    pub redirect_location: String,
    /// Extensions served byte-for-byte; everything else is read as text.
    #[serde(default = "default_binary_extensions")]
    pub binary_extensions: Vec<String>,
    /// Keep resolved paths inside `root` even for targets containing `..`.
    #[serde(default = "default_confine_to_root")]
    pub confine_to_root: bool,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index: default_index(),
            redirect_path: default_redirect_path(),
            redirect_location: default_redirect_location(),
            binary_extensions: default_binary_extensions(),
            confine_to_root: default_confine_to_root(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:5042".to_string()
}

fn default_idle_timeout_ms() -> u64 {
    1000
}

fn default_read_buffer_size() -> usize {
    2048
}

fn default_root() -> PathBuf {
    PathBuf::from("files")
}

fn default_index() -> String {
    "index.html".to_string()
}

fn default_redirect_path() -> String {
    "redirect".to_string()
}

fn default_redirect_location() -> String {
    "result.html".to_string()
}

fn default_binary_extensions() -> Vec<String> {
    vec!["ico".to_string(), "jpg".to_string()]
}

fn default_confine_to_root() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads the config file named by `MINIHTTPD_CONFIG` (or defaults when
    /// unset), then applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.idle_timeout_ms == 0 {
            bail!("server.idle_timeout_ms must be greater than zero");
        }
        if self.server.read_buffer_size == 0 {
            bail!("server.read_buffer_size must be greater than zero");
        }
        if self.static_files.index.is_empty() {
            bail!("static_files.index must not be empty");
        }
        if self.static_files.redirect_path.is_empty() {
            bail!("static_files.redirect_path must not be empty");
        }
        Ok(())
    }
}
