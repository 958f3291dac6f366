use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "shub";
/// Prefix of environment overrides, e.g. `SHUB__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SHUB";

/// Custom error type for config loading.
#[shub_derive::shub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: an explicit `path` must exist. Without one, the loader looks for a
///    `shub.*` file (any extension the `config` crate understands, TOML in practice) in the
///    current working directory and silently skips it when absent.
/// 2. **Environment Overrides**: variables prefixed with `SHUB__`. Nested structures are
///    addressed with double underscores (`SHUB__METADATA__INITIAL_CAPACITY` maps to
///    `metadata.initial_capacity`). Values that parse as numbers or booleans are typed
///    accordingly; everything else stays a string.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found or parsed.
/// * The merged sources do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use shub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
