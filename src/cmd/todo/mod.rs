// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! `todo` object: pending to-do reports and completion.
//!
//! ```text
//! list  --fields --> parse_fields::<TodoField> --> GET /todos --> Row per to-do
//! done  <id>     --> GET /todos --> find id --> POST /todos/:id/mark_as_done
//!                                      \-> TodoNotFound (no POST)
//! ```
//!
//! Only merge request to-dos are reported; any other target yields a row of
//! empty cells.

#[cfg(test)]
mod tests;

use std::io::Write;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::cli::todo::{TodoArgs, TodoDoneArgs, TodoListArgs, TodoOperation};
use crate::cmd::list_operations;
use crate::error::{GswError, GswResult};
use crate::gitlab::GitlabApi;
use crate::gitlab::models::Todo;
use crate::output::fields::field_vocabulary;
use crate::output::{Field, Printer, Row, cell, parse_fields};

field_vocabulary! {
    /// Columns of `todo list`.
    pub enum TodoField for "todo" {
        Id => "id",
        ProjectId => "project_id",
        Project => "project",
        TargetIid => "target_iid",
        TargetType => "target_type",
        TargetState => "target_state",
        Body => "body",
        TargetTitle => "target_title",
        Labels => "labels",
        TargetUrl => "target_url",
        FullProject => "full_project",
    }
    default: [Id, TargetState, Project, TargetType, TargetIid, TargetTitle]
}

/// Entry point of the `todo` object.
///
/// # Errors
///
/// Returns the error of the selected operation.
pub async fn run_todo_command<C: GitlabApi, W: Write>(
    args: &TodoArgs,
    client: &C,
    printer: &mut Printer<W>,
) -> GswResult<()> {
    match &args.operation {
        None => list_operations("todo", printer),
        Some(TodoOperation::List(list)) => run_todo_list(list, client, printer).await,
        Some(TodoOperation::Done(done)) => run_todo_done(done, client).await,
    }
}

/// Prints pending to-dos.
///
/// # Errors
///
/// - [`crate::error::FieldError`] for an unknown `--fields` entry, before any
///   request is made
/// - [`crate::error::RemoteError`] if listing fails
/// - I/O errors while printing
pub async fn run_todo_list<C: GitlabApi, W: Write>(
    args: &TodoListArgs,
    client: &C,
    printer: &mut Printer<W>,
) -> GswResult<()> {
    let fields = match &args.fields {
        Some(names) => parse_fields::<TodoField>(names)?,
        None => TodoField::DEFAULT.to_vec(),
    };

    let todos = client.todos().await?;
    debug!(count = todos.len(), "to-dos received");

    let rows: Vec<Row> = todos
        .iter()
        .map(|todo| fields.iter().map(|&field| todo_cell(todo, field)).collect())
        .collect();

    printer.print_rows(&rows)?;
    Ok(())
}

/// Marks one pending to-do as done.
///
/// # Errors
///
/// - [`GswError::TodoNotFound`] if no pending to-do has that id
/// - [`crate::error::RemoteError`] if listing or marking fails
pub async fn run_todo_done<C: GitlabApi>(args: &TodoDoneArgs, client: &C) -> GswResult<()> {
    let todos = client.todos().await?;
    let todo = todos
        .iter()
        .find(|todo| todo.id() == Some(args.id))
        .ok_or(GswError::TodoNotFound(args.id))?;

    client.mark_todo_done(args.id).await?;
    info!(id = args.id, target = ?todo.target_type(), "to-do marked as done");
    Ok(())
}

/// Cell of one to-do for one field.
#[must_use]
pub fn todo_cell(todo: &Todo, field: TodoField) -> String {
    if !todo.is_merge_request() {
        return String::new();
    }

    match field {
        TodoField::Id
        | TodoField::TargetType
        | TodoField::Body
        | TodoField::Labels
        | TodoField::TargetUrl => cell(todo.attribute(field.name())),
        TodoField::ProjectId => cell(todo.project("id")),
        TodoField::Project => cell(todo.project("name")),
        TodoField::TargetIid => cell(todo.target("iid")),
        TodoField::TargetTitle => cell(todo.target("title")),
        TodoField::TargetState => cell(todo.target("state")),
        TodoField::FullProject => todo
            .target_url()
            .and_then(full_project)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Project path of a merge request URL.
///
/// `https://host/group/sub/project/-/merge_requests/4` gives
/// `group/sub/project`.
#[must_use]
pub fn full_project(url: &str) -> Option<&str> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

    PATTERN
        .get_or_init(|| Regex::new(r"^[^:]+://[^/]+/(.+?)/-/merge").ok())
        .as_ref()?
        .captures(url)?
        .get(1)
        .map(|m| m.as_str())
}
