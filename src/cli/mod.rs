// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! CLI module for gsw using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gsw [global options] <object> <operation> [options] [args]
//! mr   list
//! todo list | done <id>
//! ```
//!
//! The clap command tree is also the object/operation registry: listings and
//! error messages read names from it rather than from a separate table.

pub mod global;
pub mod mr;
pub mod todo;


use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};

use crate::cli::global::GlobalOptions;
use crate::cli::mr::MrArgs;
use crate::cli::todo::TodoArgs;
use crate::error::UsageError;

/// GitLab merge request and to-do reports.
#[derive(Debug, Parser)]
#[command(
    name = "gsw",
    author,
    version,
    about = "GitLab merge request and to-do reports",
    long_about = "Queries a GitLab instance and prints merge requests and to-dos as\n\
                  aligned columns on a terminal, or tab-separated text when piped.\n\n\
                  Run `gsw` without an object to list objects, and `gsw <object>`\n\
                  to list its operations.",
    after_help = "CONFIGURATION:\n\n\
                  The GitLab URL and private token are read from an INI file\n\
                  (default ~/.config/gsw/config):\n\n\
                  \x20   [gitlab]\n\
                  \x20   url = https://gitlab.example.com\n\
                  \x20   token = <private access token>\n\n\
                  GSW_GITLAB_URL and GSW_GITLAB_TOKEN override the file values.",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Global options shared by all objects
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Object to operate on
    #[command(subcommand)]
    pub object: Option<Object>,
}

/// Objects gsw knows about.
#[derive(Debug, Subcommand)]
pub enum Object {
    /// Merge requests.
    #[command(disable_help_subcommand = true)]
    Mr(MrArgs),

    /// To-do notifications.
    #[command(disable_help_subcommand = true)]
    Todo(TodoArgs),
}

impl Object {
    /// Registry name of the object.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mr(_) => "mr",
            Self::Todo(_) => "todo",
        }
    }
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(iter)
}

/// Names of all objects, in declaration order.
#[must_use]
pub fn objects() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .map(|cmd| cmd.get_name().to_string())
        .collect()
}

/// Names of an object's operations, in declaration order.
#[must_use]
pub fn operations(object: &str) -> Vec<String> {
    Cli::command()
        .find_subcommand(object)
        .map(|cmd| {
            cmd.get_subcommands()
                .map(|op| op.get_name().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Maps a clap failure onto the usage error taxonomy.
///
/// Returns `None` when clap only wants to display help or version text.
#[must_use]
pub fn classify_parse_error(err: &clap::Error, args: &[OsString]) -> Option<UsageError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::InvalidSubcommand => Some(unknown_subcommand(err, args)),
        ErrorKind::MissingRequiredArgument => Some(UsageError::MissingArgument {
            message: err.render().to_string(),
        }),
        _ => Some(UsageError::OptionParse {
            message: err.render().to_string(),
        }),
    }
}

/// Tells an unknown object from an unknown operation.
///
/// The offending word is the first occurrence whose preceding words parse on
/// their own, so a value such as `-c todo` is never mistaken for an object.
fn unknown_subcommand(err: &clap::Error, args: &[OsString]) -> UsageError {
    let name = match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(name)) => name.clone(),
        _ => String::new(),
    };

    let object = args
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, arg)| arg.to_str() == Some(name.as_str()))
        .find_map(|(i, _)| Cli::try_parse_from(&args[..i]).ok())
        .and_then(|cli| cli.object.map(|object| object.name()));

    match object {
        Some(object) => UsageError::UnknownOperation {
            available: operations(object),
            object: object.to_string(),
            name,
        },
        None => UsageError::UnknownObject {
            name,
            available: objects(),
        },
    }
}
