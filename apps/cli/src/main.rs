//! # ALQUIPC Invoice Terminal
//!
//! Interactive front end for alquipc-core.
//!
//! ## Usage
//! ```bash
//! # Prompt for client data and print the receipt
//! cargo run -p alquipc-cli
//!
//! # Print the priced request as JSON
//! cargo run -p alquipc-cli -- --json
//!
//! # Verbose logs on stderr
//! ALQUIPC_LOG=alquipc=debug cargo run -p alquipc-cli
//! ```
//!
//! Logs go to stderr so they never mix with the receipt on stdout. In JSON
//! mode the prompts go to stderr as well, leaving stdout a single document.

mod config;
mod crash_log;
mod receipt;
mod session;

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{CliArgs, CliConfig, OutputFormat};
use crate::session::Session;

fn main() -> ExitCode {
    let args = match CliArgs::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{}", CliArgs::usage());
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        print!("{}", CliArgs::usage());
        return ExitCode::SUCCESS;
    }

    let mut config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_args(&args);

    init_tracing(&config.log_filter);
    info!(output = ?config.output, error_dir = %config.error_dir.display(), "Configuration loaded");

    let stdin = io::stdin();
    let outcome = run(&config, stdin.lock(), io::stderr().lock(), io::stdout().lock());

    let code = match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Invoice session failed");
            match crash_log::write(&config.error_dir, &e, Local::now()) {
                Ok(path) => eprintln!(
                    "Ha ocurrido un error inesperado. Se guardó un registro en: {}",
                    path.display()
                ),
                Err(log_err) => {
                    warn!(%log_err, "Could not write crash log");
                    eprintln!("Ha ocurrido un error inesperado: {e:#}");
                }
            }
            ExitCode::FAILURE
        }
    };

    if config.pause_on_exit {
        pause(stdin.lock());
    }
    code
}

/// Runs one session and prints the result in the configured format.
///
/// Text mode keeps the conversation and the receipt on `output`; JSON mode
/// sends the conversation to `prompts`.
fn run<R: BufRead, P: Write, W: Write>(
    config: &CliConfig,
    input: R,
    prompts: P,
    mut output: W,
) -> anyhow::Result<()> {
    let session = match config.output {
        OutputFormat::Text => Session::new(input, &mut output).run(),
        OutputFormat::Json => Session::new(input, prompts).run(),
    };
    let issued = session.context("Invoice session failed")?;

    let rendered = match config.output {
        OutputFormat::Text => receipt::render(&issued.request, &issued.invoice),
        OutputFormat::Json => {
            receipt::render_json(&issued.request, &issued.invoice)
                .context("Could not serialize invoice")?
                + "\n"
        }
    };
    output
        .write_all(rendered.as_bytes())
        .and_then(|()| output.flush())
        .context("Could not print invoice")?;
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn pause<R: BufRead>(mut input: R) {
    print!("Presiona ENTER para salir...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = input.read_line(&mut line);
}
