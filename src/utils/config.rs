//! TOML-based configuration for StudyHub
//!
//! The server reads a single `studyhub.toml` file with three sections:
//! `[server]`, `[chatbot]` and `[catalog]`. Secrets are never stored in the
//! file itself; fields ending in `_env` name the environment variable that
//! holds the value.
//!
//! # Hot Reloading
//!
//! The catalog can be edited while the server is running. Use
//! [`ConfigManager`] for lock-free access to the current configuration.

use crate::types::Category;
use arc_swap::ArcSwap;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Root configuration structure loaded from studyhub.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyHubConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chatbot: ChatBotConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            cors_origins: Vec::new(),
        }
    }
}

// ============= Chatbot Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatBotConfig {
    /// Environment variable holding the upstream chatbot URL
    pub upstream_url_env: Option<String>,

    #[serde(default = "default_chatbot_timeout")]
    pub timeout_secs: u64,

    /// Largest request body forwarded upstream
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_chatbot_timeout() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ChatBotConfig {
    fn default() -> Self {
        Self {
            upstream_url_env: None,
            timeout_secs: default_chatbot_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// ============= Catalog Configuration =============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Categories served to the navigation menu, in display order
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),

    #[error("Categories '{0}' and '{1}' resolve to the same catalog path")]
    DuplicateCategory(String, String),

    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),
}

impl StudyHubConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: StudyHubConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration for internal consistency and env var availability
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref env) = self.chatbot.upstream_url_env {
            self.validate_env_var(env)?;
        }

        if self.chatbot.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "chatbot.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.chatbot.max_body_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "chatbot.max_body_bytes must be greater than zero".to_string(),
            ));
        }

        let mut seen: Vec<(String, &str)> = Vec::new();
        for category in &self.catalog.categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "catalog category names must not be empty".to_string(),
                ));
            }
            let slug = category.slug();
            if let Some((_, other)) = seen.iter().find(|(s, _)| *s == slug) {
                return Err(ConfigError::DuplicateCategory(
                    other.to_string(),
                    category.name.clone(),
                ));
            }
            seen.push((slug, category.name.as_str()));
        }

        Ok(())
    }

    /// Non-fatal findings worth logging at startup
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.chatbot.upstream_url_env.is_none() {
            warnings.push(
                "No chatbot upstream configured; POST /api/v1/chatbot will answer 503".to_string(),
            );
        }
        if self.catalog.categories.is_empty() {
            warnings.push(
                "Catalog has no categories; the navigation menu will show its placeholder"
                    .to_string(),
            );
        }

        let special: HashSet<char> = ['/', '?', '#', '%'].into_iter().collect();
        for category in &self.catalog.categories {
            if category.name.chars().any(|c| special.contains(&c)) {
                warnings.push(format!(
                    "Category '{}' contains URL-reserved characters; its catalog link will not round-trip",
                    category.name
                ));
            }
        }

        warnings
    }

    fn validate_env_var(&self, name: &str) -> Result<(), ConfigError> {
        std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;
        Ok(())
    }

    /// Resolve the upstream chatbot URL, if one is configured
    pub fn chatbot_upstream_url(&self) -> Result<Option<String>, ConfigError> {
        match self.chatbot.upstream_url_env {
            Some(ref env) => std::env::var(env)
                .map(Some)
                .map_err(|_| ConfigError::MissingEnvVar(env.clone())),
            None => Ok(None),
        }
    }
}

// ============= Hot Reloading Configuration Manager =============

/// Thread-safe configuration manager with hot reloading support
pub struct ConfigManager {
    config: Arc<ArcSwap<StudyHubConfig>>,
    config_path: PathBuf,
    watcher: RwLock<Option<RecommendedWatcher>>,
}

impl ConfigManager {
    /// Create a new configuration manager and load the initial config
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        // Absolute paths keep the file watcher stable across cwd changes
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(ConfigError::ReadError)?
                .join(path)
        };

        let config = StudyHubConfig::load(&path)?;

        Ok(Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: path,
            watcher: RwLock::new(None),
        })
    }

    /// Create a config manager directly from a config (useful for testing).
    /// This won't have file watching capabilities.
    pub fn from_config(config: StudyHubConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: PathBuf::from("test-config.toml"),
            watcher: RwLock::new(None),
        }
    }

    /// Get the current configuration (lockless read)
    pub fn config(&self) -> Arc<StudyHubConfig> {
        self.config.load_full()
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Manually reload the configuration from disk
    pub fn reload(&self) -> Result<(), ConfigError> {
        info!("Reloading configuration from {:?}", self.config_path);

        let new_config = StudyHubConfig::load(&self.config_path)?;
        self.config.store(Arc::new(new_config));

        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Start watching for configuration file changes
    pub fn start_watching(&self) -> Result<(), ConfigError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();

        let config_path = self.config_path.clone();
        let config_arc = Arc::clone(&self.config);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        // Debounced in the receiver
                        let _ = tx.send(());
                    }
                }
                Err(e) => {
                    error!("Config watcher error: {:?}", e);
                }
            }
        })?;

        if let Some(parent) = self.config_path.parent() {
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
        }

        *self.watcher.write() = Some(watcher);

        tokio::spawn(async move {
            let mut last_reload: Option<std::time::Instant> = None;
            let debounce_duration = Duration::from_millis(500);

            while rx.recv().await.is_some() {
                if last_reload.is_some_and(|t| t.elapsed() < debounce_duration) {
                    continue;
                }

                // Let the editor finish writing
                tokio::time::sleep(Duration::from_millis(100)).await;

                match StudyHubConfig::load(&config_path) {
                    Ok(new_config) => {
                        let categories = new_config.catalog.categories.len();
                        config_arc.store(Arc::new(new_config));
                        info!(categories, "Configuration hot-reloaded successfully");
                        last_reload = Some(std::time::Instant::now());
                    }
                    Err(e) => {
                        warn!(
                            "Failed to hot-reload config: {}. Keeping previous config.",
                            e
                        );
                    }
                }
            }
        });

        info!("Configuration hot-reload watcher started");
        Ok(())
    }

    /// Stop watching for configuration changes
    pub fn stop_watching(&self) {
        *self.watcher.write() = None;
        info!("Configuration hot-reload watcher stopped");
    }
}
