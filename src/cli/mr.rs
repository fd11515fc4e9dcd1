// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! CLI arguments for the `mr` object.
//!
//! ```text
//! gsw mr list [-a <author>] [-d] [-l <label>[,<label>...]] [-g <group>] [-f <fields>]
//!
//! $ gsw mr list
//! $ gsw mr list -a alice --draft
//! $ gsw mr list -g platform -f project,iid,title
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `mr` object.
#[derive(Debug, Clone, Args)]
pub struct MrArgs {
    #[command(subcommand)]
    pub operation: Option<MrOperation>,
}

/// Merge request operations.
#[derive(Debug, Clone, Subcommand)]
pub enum MrOperation {
    /// List open merge requests.
    List(MrListArgs),
}

/// Options of `mr list`.
#[derive(Debug, Clone, Default, Args)]
pub struct MrListArgs {
    /// Only merge requests by this author (searches all visible merge requests).
    #[arg(short = 'a', long = "author", value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Include draft merge requests.
    #[arg(short = 'd', long = "draft")]
    pub draft: bool,

    /// Only merge requests carrying all of these labels (searches all visible merge requests).
    #[arg(
        short = 'l',
        long = "label",
        visible_alias = "labels",
        value_name = "LABELS",
        value_delimiter = ','
    )]
    pub labels: Vec<String>,

    /// List the merge requests of this group (id or full path).
    #[arg(short = 'g', long = "group", value_name = "GROUP")]
    pub group: Option<String>,

    /// Comma-separated columns to show instead of the default set.
    #[arg(short = 'f', long = "fields", value_name = "FIELDS", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,
}
