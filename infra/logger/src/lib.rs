//! # Logger
//!
//! Installs the global `tracing` subscriber for `StateHub` binaries.
//!
//! * Console output is compact and goes to **stderr**, so a binary's stdout stays free for
//!   machine-readable results.
//! * File output is optional, non-blocking, and rotated by `tracing-appender`; it can be
//!   plain text or JSON.
//! * The minimum level is a programmatic default. [`LoggerBuilder::env_filter`] adds
//!   module directives (e.g. `"shub_metadata=trace"`), and `RUST_LOG` applies when no
//!   explicit filter is given.
//!
//! ## Example
//!
//! ```rust
//! # use shub_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("shub")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None }
    }
}

/// Rolling file output settings.
#[derive(Debug)]
struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile(FileOutput);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Collects logger settings; `init` installs them as the global subscriber.
///
/// A name is mandatory before [`init`](LoggerBuilder::init) becomes available; the
/// file-only knobs appear once [`path`](LoggerBuilder::path) has been called.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    file: F,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), file: self.file }
    }
}

impl<N: Sealed> LoggerBuilder<N, ConsoleOnly> {
    /// Adds a rolling file layer writing into `directory` (created on init).
    pub fn path(self, directory: impl Into<PathBuf>) -> LoggerBuilder<N, WithFile> {
        LoggerBuilder {
            settings: self.settings,
            name: self.name,
            file: WithFile(FileOutput {
                directory: directory.into(),
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
                json: false,
            }),
        }
    }
}

impl<N: Sealed> LoggerBuilder<N, WithFile> {
    /// Keeps at most `max` rotated files.
    #[must_use = "builder methods return the updated builder"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.file.0.max_files = max;
        self
    }

    #[must_use = "builder methods return the updated builder"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.file.0.rotation = rotation;
        self
    }

    /// Writes the file layer as JSON lines. Console output stays compact text.
    #[must_use = "builder methods return the updated builder"]
    pub const fn json(mut self) -> Self {
        self.file.0.json = true;
        self
    }
}

impl<N: Sealed, F: Sealed> LoggerBuilder<N, F> {
    /// Sets the default minimum level.
    #[must_use = "builder methods return the updated builder"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds explicit filter directives (e.g., `shub=debug,shub_metadata=trace`).
    ///
    /// An explicit filter replaces `RUST_LOG`. Invalid directives make
    /// [`LoggerBuilder::init`] fail.
    #[must_use = "builder methods return the updated builder"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the stderr layer.
    #[must_use = "builder methods return the updated builder"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }
}

impl LoggerBuilder<Named, ConsoleOnly> {
    /// Installs a console-only subscriber.
    ///
    /// # Errors
    /// See [`LoggerBuilder::init`] on the file-enabled builder.
    pub fn init(self) -> Result<Logger, LoggerError> {
        install(&self.name.0, &self.settings, None)
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. It owns the [`WorkerGuard`] of the file writer and must be
    /// kept alive for as long as logs should reach the file.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   an invalid filter, or when no layer is enabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the rolling appender cannot be built.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        install(&self.name.0, &self.settings, Some(&self.file.0))
    }
}

fn install(name: &str, settings: &Settings, file: Option<&FileOutput>) -> Result<Logger, LoggerError> {
    validate(name, file)?;
    let env_filter = build_env_filter(settings)?;

    let mut layers = Vec::new();

    if settings.console {
        layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
    }

    let guard = match file {
        Some(output) => {
            fs::create_dir_all(&output.directory).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(
                    format!("Failed to create log directory: {}", output.directory.display())
                        .into(),
                ),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(output.rotation.clone())
                .filename_prefix(name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(output.max_files)
                .build(&output.directory)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if output.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        },
        None => None,
    };

    if layers.is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging layers enabled. Enable console or file output.".into(),
            context: None,
        });
    }

    tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

    Ok(Logger { guard })
}

/// Keeps the installed logging pipeline alive.
///
/// Holds the background writer guard, if a file layer is active. Drop it only when the
/// application is shutting down.
#[must_use = "dropping the handle flushes and stops the file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use shub_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("shub")
    ///     .level(LevelFilter::WARN)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "builder methods return the updated builder"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, file: ConsoleOnly }
    }

    /// Returns the file writer guard, if a file layer is active.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files");
        }
    }
}

fn validate(name: &str, file: Option<&FileOutput>) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if file.is_some_and(|output| output.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
