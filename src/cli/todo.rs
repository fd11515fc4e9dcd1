// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! CLI arguments for the `todo` object.
//!
//! ```text
//! gsw todo list [-f <fields>]
//! gsw todo done <id>
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `todo` object.
#[derive(Debug, Clone, Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    pub operation: Option<TodoOperation>,
}

/// To-do operations.
#[derive(Debug, Clone, Subcommand)]
pub enum TodoOperation {
    /// List pending to-dos.
    List(TodoListArgs),
    /// Mark a to-do as done.
    Done(TodoDoneArgs),
}

/// Options of `todo list`.
#[derive(Debug, Clone, Default, Args)]
pub struct TodoListArgs {
    /// Comma-separated columns to show instead of the default set.
    #[arg(short = 'f', long = "fields", value_name = "FIELDS", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,
}

/// Arguments of `todo done`.
#[derive(Debug, Clone, Args)]
pub struct TodoDoneArgs {
    /// Id of the to-do, as shown by `todo list`.
    #[arg(value_name = "ID")]
    pub id: u64,
}
