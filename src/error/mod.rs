// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Error handling module.
//!
//! ```text
//!                 GswError (~24 bytes)
//!                        |
//!   +-------+-------+----+----+-------+--------+-----+
//!   v       v       v         v       v        v     v
//! Config  Conn   Usage     Field   Remote  TodoNF   Io
//!  Box    Box<str> Box      Box     Box     u64     Box
//!
//! Sub-errors (unboxed internally):
//!   Config  NotFound, ParseError, MissingSection, MissingKey
//!   Usage   UnknownObject, UnknownOperation, OptionParse, MissingArgument
//!   Field   UnknownField
//!   Remote  Http, Request, Decode, InvalidUrl
//!
//! Exit codes:
//!   1  Io, TodoNotFound
//!   2  Config, Usage, Field
//!   3  Connection
//!   4  Remote
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GswError`].
pub type GswResult<T> = std::result::Result<T, GswError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GswError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The GitLab client could not be constructed.
    #[error("unable to connect to gitlab: {0}")]
    Connection(Box<str>),

    /// Bad command-line input.
    #[error("{0}")]
    Usage(#[from] Box<UsageError>),

    /// Unknown field requested with `--fields`.
    #[error("{0}")]
    Field(#[from] Box<FieldError>),

    /// A call to the GitLab API failed.
    #[error("gitlab error: {0}")]
    Remote(#[from] Box<RemoteError>),

    /// `todo done` was given an id that is not among the pending to-dos.
    #[error("no pending to-do with id {0}")]
    TodoNotFound(u64),

    /// I/O error, typically while writing the report.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl GswError {
    /// Process exit code for this error class.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) | Self::TodoNotFound(_) => 1,
            Self::Config(_) | Self::Usage(_) | Self::Field(_) => 2,
            Self::Connection(_) => 3,
            Self::Remote(_) => 4,
        }
    }

    /// Returns `true` for errors caused by malformed command-line input.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Create a [`GswError::Connection`] from a message.
pub fn connection_failed(message: impl Into<String>) -> GswError {
    GswError::Connection(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GswError {
                fn from(err: $error) -> Self {
                    GswError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    UsageError => Usage,
    FieldError => Field,
    RemoteError => Remote,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Required section absent.
    #[error("'{section}' section not found in the config file, please create it")]
    MissingSection { section: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },
}

// --- Usage Errors ---

/// Command-line input errors.
#[derive(Debug, Error)]
pub enum UsageError {
    /// No object with that name.
    #[error("unknown object '{name}' (available objects: {})", available.join(", "))]
    UnknownObject { name: String, available: Vec<String> },

    /// The object has no operation with that name.
    #[error("invalid operation '{name}' for '{object}' (available operations: {})", available.join(", "))]
    UnknownOperation {
        object: String,
        name: String,
        available: Vec<String>,
    },

    /// Malformed flags or values; the message carries the usage text.
    #[error("{message}")]
    OptionParse { message: String },

    /// Too few positional arguments; the message carries the usage text.
    #[error("{message}")]
    MissingArgument { message: String },
}

// --- Field Errors ---

/// Field selection errors.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Field name outside the object's vocabulary.
    #[error("field '{field}' not available for '{object}', available fields: {available}")]
    UnknownField {
        object: &'static str,
        field: String,
        available: String,
    },
}

// --- Remote Errors ---

/// GitLab API errors.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP error response.
    #[error("http error {status}: {url} ({message})")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    /// Transport-level failure from reqwest.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// An endpoint URL could not be built.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests;
