// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Field projection and report formatting.
//!
//! ```text
//! --fields a,b,c --> parse_fields::<F>() --> Vec<F>    (closed vocabulary)
//!                                              |
//! records --> resolve(record, F) --> cell --> Row (Vec<String>)
//!                                              |
//!                           Printer::print_rows(&[Row])
//!                             Aligned  cells padded to column width, each followed by \t
//!                             Plain    cells joined with \t
//! ```

pub mod fields;


use std::io::{self, IsTerminal, Write};

use serde_json::Value;

pub use fields::{Field, parse_fields};

/// One report line: one cell per requested field.
pub type Row = Vec<String>;

/// How rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Columns padded to a common width (interactive terminal).
    Aligned,
    /// Raw tab-separated cells (pipes and files).
    Plain,
}

impl OutputMode {
    /// `Aligned` when stdout is a terminal, `Plain` otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if io::stdout().is_terminal() {
            Self::Aligned
        } else {
            Self::Plain
        }
    }
}

/// Stringifies a JSON attribute for display.
///
/// Null becomes an empty cell, strings are printed without quotes, everything
/// else uses its compact JSON text.
#[must_use]
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes report rows to an underlying writer.
pub struct Printer<W: Write> {
    writer: W,
    mode: OutputMode,
}

impl<W: Write> Printer<W> {
    #[must_use]
    pub const fn new(writer: W, mode: OutputMode) -> Self {
        Self { writer, mode }
    }

    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Writes all rows, one line each.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn print_rows(&mut self, rows: &[Row]) -> io::Result<()> {
        match self.mode {
            OutputMode::Plain => {
                for row in rows {
                    writeln!(self.writer, "{}", row.join("\t"))?;
                }
            }
            OutputMode::Aligned => {
                let widths = column_widths(rows);
                for row in rows {
                    let line: String = row
                        .iter()
                        .zip(&widths)
                        .map(|(cell, &width)| format!("{cell:<width$}\t"))
                        .collect();
                    writeln!(self.writer, "{line}")?;
                }
            }
        }
        self.writer.flush()
    }

    /// Writes one free-form line (listings, notices).
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Widest cell (in chars) of every column.
#[must_use]
pub fn column_widths(rows: &[Row]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}
