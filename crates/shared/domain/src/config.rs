use crate::state::{Limits, StateOption};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the applications.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub logging: LoggingConfig,
    pub metadata: MetadataConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs. `level` is a plain directive (`"info"`, `"debug"`, ...) so this crate
/// stays free of the tracing stack.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub json: bool,
    pub directory: Option<PathBuf>,
}

/// Dynamic metadata known at configuration time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Pre-allocated slots per map.
    pub initial_capacity: usize,
    pub channels: Vec<ChannelSeed>,
}

/// Options and/or limits for one channel, as written in a config file.
///
/// ```toml
/// [[metadata.channels]]
/// uid = "intesisbox:wmp:livingroom:setpoint"
/// limits = { min = 16, max = 30 }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelSeed {
    pub uid: String,
    pub options: Option<Vec<StateOption>>,
    pub limits: Option<Limits>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, json: false, directory: None }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self { initial_capacity: 64, channels: Vec::new() }
    }
}
