// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!         objects/operations     mr list, todo list/done
//!                                      |
//!                +---------------------+------------+
//!                v                     v            v
//!             config                gitlab        output
//!          INI [gitlab]       GitlabApi, reqwest  fields, Printer
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod gitlab;
pub mod logging;
pub mod output;
