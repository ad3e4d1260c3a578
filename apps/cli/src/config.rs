//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command-line flags override it.
//!
//! | Variable                | Default    | Meaning                            |
//! |-------------------------|------------|------------------------------------|
//! | `ALQUIPC_LOG`           | `warn`     | tracing filter directive           |
//! | `ALQUIPC_OUTPUT`        | `text`     | `text` receipt or `json` document  |
//! | `ALQUIPC_ERROR_DIR`     | `salidas`  | where crash logs are written       |
//! | `ALQUIPC_PAUSE_ON_EXIT` | `false`    | wait for ENTER before exiting      |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// tracing filter directive (e.g. `alquipc=debug`)
    pub log_filter: String,

    /// How the final invoice is printed
    pub output: OutputFormat,

    /// Directory for crash logs
    pub error_dir: PathBuf,

    /// Keep the window open until ENTER is pressed
    pub pause_on_exit: bool,
}

/// Invoice output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable receipt
    #[default]
    Text,
    /// `{ "request": ..., "invoice": ... }`
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("ALQUIPC_OUTPUT".to_string())),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("ALQUIPC_LOG").unwrap_or_else(|| "warn".to_string());
        EnvFilter::try_new(&log_filter)
            .map_err(|_| ConfigError::InvalidValue("ALQUIPC_LOG".to_string()))?;

        let output = match lookup("ALQUIPC_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let error_dir = lookup("ALQUIPC_ERROR_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("salidas"));

        let pause_on_exit = lookup("ALQUIPC_PAUSE_ON_EXIT")
            .unwrap_or_else(|| "false".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ALQUIPC_PAUSE_ON_EXIT".to_string()))?;

        Ok(CliConfig {
            log_filter,
            output,
            error_dir,
            pause_on_exit,
        })
    }

    /// Applies command-line flags on top of the environment.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if args.json {
            self.output = OutputFormat::Json;
        }
        if args.pause {
            self.pause_on_exit = true;
        }
    }
}

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub json: bool,
    pub pause: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parses flags (program name already stripped).
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = CliArgs::default();
        for arg in args {
            match arg.as_ref() {
                "--json" | "-j" => parsed.json = true,
                "--pause" | "-p" => parsed.pause = true,
                "--help" | "-h" => parsed.help = true,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(parsed)
    }

    pub fn usage() -> &'static str {
        "Usage: alquipc [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -j, --json     Print the invoice as JSON\n\
         \x20 -p, --pause    Wait for ENTER before exiting\n\
         \x20 -h, --help     Show this help message\n"
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
