// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Global CLI options available for all objects.
//!
//! ```text
//! -c, --config FILE   ← INI file (GSW_CONFIG, default ~/.config/gsw/config)
//! --log-level N       ← Console verbosity (0-5, default 2)
//! --file-log-level N  ← File verbosity (default 4)
//! --log-file FILE     ← Also log to FILE
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all objects.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Use FILE as configuration file instead of ~/.config/gsw/config.
    #[arg(short = 'c', long = "config", value_name = "FILE", env = "GSW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// File log level, defaults to debug.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
