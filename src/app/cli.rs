//! CLI adapter: binds the process arguments and standard streams to a greeter run.

use std::io;
use std::process::ExitCode;

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::domain::ParseStrategy;

/// Program name shown in usage text.
pub const PROGRAM: &str = "greeter";

/// Selects the argument parsing strategy.
pub const PARSER_ENV: &str = "GREETER_PARSER";

/// Tracing filter directive; logging is off when unset.
pub const LOG_ENV: &str = "GREETER_LOG";

/// Problems with the process environment, detected before any argument is parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid GREETER_PARSER: {0}")]
    UnknownParser(String),
}

/// Runtime settings resolved once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub strategy: ParseStrategy,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = match lookup(PARSER_ENV) {
            Some(value) if !value.trim().is_empty() => {
                value.parse::<ParseStrategy>().map_err(SettingsError::UnknownParser)?
            }
            _ => ParseStrategy::default(),
        };
        Ok(Self { strategy })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

/// Entry point for the CLI.
pub fn run() -> ExitCode {
    init_tracing();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(strategy = %settings.strategy, "settings resolved");

    let args: Vec<String> =
        std::env::args_os().skip(1).map(|arg| arg.to_string_lossy().into_owned()).collect();

    let status = crate::run(
        settings.strategy,
        PROGRAM,
        &args,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    );
    status.into()
}
