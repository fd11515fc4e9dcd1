// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Entry point.
//!
//! ```text
//! argv --> cli::try_parse_from --(help)--> stdout, 0
//!                |           \--(error)--> classify_parse_error --> stderr, 2
//!                v
//!             Logging --> RemoteConfig --> GitlabClient --> Object Dispatch
//!                                                           mr | todo
//! ```

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use gsw::cli::global::GlobalOptions;
use gsw::cli::{self, Cli};
use gsw::cmd::{list_objects, run_object};
use gsw::config::{RemoteConfig, resolve_config_path};
use gsw::error::{GswError, GswResult, UsageError};
use gsw::gitlab::GitlabClient;
use gsw::logging::init_logging;
use gsw::logging::{LogConfig, LogLevel};
use gsw::output::{OutputMode, Printer};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err, &args),
    };

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn handle_parse_error(err: &clap::Error, args: &[OsString]) -> ExitCode {
    match cli::classify_parse_error(err, args) {
        Some(usage) => report(&usage.into()),
        None => {
            // --help / --version
            if let Err(e) = err.print() {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::DEBUG);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch(cli: &Cli) -> GswResult<()> {
    let config_path = resolve_config_path(cli.global.config.as_deref());
    debug!(path = %config_path.display(), "loading config");
    let config = RemoteConfig::load(&config_path)?;
    let client = GitlabClient::new(&config)?;

    let mut printer = Printer::new(io::stdout(), OutputMode::detect());
    match &cli.object {
        None => list_objects(&mut printer),
        Some(object) => {
            debug!(object = object.name(), mode = ?printer.mode(), "dispatching");
            run_object(object, &client, &mut printer).await
        }
    }
}

fn report(err: &GswError) -> ExitCode {
    match err {
        GswError::Usage(usage)
            if matches!(
                **usage,
                UsageError::OptionParse { .. } | UsageError::MissingArgument { .. }
            ) =>
        {
            eprint!("{err}");
        }
        _ => eprintln!("Error: {err}"),
    }
    ExitCode::from(err.exit_code())
}
