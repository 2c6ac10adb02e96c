//! Logging setup.
//!
//! Installs a `tracing` subscriber. The level comes from CLI verbosity
//! flags unless `RUST_LOG` is set.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Default filter directive: our crate at the chosen level. tower-http
    /// request spans are emitted at debug, so they stay on unless quiet.
    pub fn filter_directive(&self) -> String {
        let level = self.to_level();
        let http_level = match self {
            Self::Quiet => Level::ERROR,
            Self::Normal | Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        };
        format!(
            "whoisvoting={},tower_http={}",
            level.to_string().to_lowercase(),
            http_level.to_string().to_lowercase()
        )
    }
}

/// Initialize the logging system. Safe to call more than once.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
