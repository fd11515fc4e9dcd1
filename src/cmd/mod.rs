// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Command implementations.
//!
//! ```text
//! Object --> run_object --> mr::run_mr_command   --> list
//!                       \-> todo::run_todo_command --> list | done
//!
//! no object    --> list_objects     ("List of objects:")
//! no operation --> list_operations  ("<object> <operation>")
//! ```

pub mod mr;
pub mod todo;

use std::io::Write;

use crate::cli::{self, Object};
use crate::error::GswResult;
use crate::gitlab::GitlabApi;
use crate::output::Printer;

/// Runs the operation selected on an object.
///
/// # Errors
///
/// Returns whatever the operation handler returns.
pub async fn run_object<C: GitlabApi, W: Write>(
    object: &Object,
    client: &C,
    printer: &mut Printer<W>,
) -> GswResult<()> {
    match object {
        Object::Mr(args) => mr::run_mr_command(args, client, printer).await,
        Object::Todo(args) => todo::run_todo_command(args, client, printer).await,
    }
}

/// Prints every registered object.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn list_objects<W: Write>(printer: &mut Printer<W>) -> GswResult<()> {
    printer.line("List of objects:")?;
    for object in cli::objects() {
        printer.line(&format!("\t{object}"))?;
    }
    Ok(())
}

/// Prints the operations of one object.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn list_operations<W: Write>(object: &str, printer: &mut Printer<W>) -> GswResult<()> {
    printer.line(&format!("{object} <operation>"))?;
    printer.line("Available operations:")?;
    for operation in cli::operations(object) {
        printer.line(&format!("\t{operation}"))?;
    }
    Ok(())
}
