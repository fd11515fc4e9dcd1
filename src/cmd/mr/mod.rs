// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! `mr` object: open merge request reports.
//!
//! ```text
//! --fields --> parse_fields::<MrField>          (before any request)
//! MergeRequestQuery --> /merge_requests | /groups/:g/merge_requests
//!                   --> drop drafts unless --draft
//!                   --> resolve each field --> Row --> Printer
//!
//! project   ProjectNames (prefetched map, per-row lookup on miss)
//! author    author.username
//! labels    HIDDEN_LABELS removed, joined with ", "
//! other     raw attribute
//! ```


use std::collections::HashMap;
use std::io::Write;

use tracing::{debug, trace};

use crate::cli::mr::{MrArgs, MrListArgs, MrOperation};
use crate::cmd::list_operations;
use crate::error::GswResult;
use crate::gitlab::models::MergeRequest;
use crate::gitlab::{GitlabApi, MergeRequestQuery};
use crate::output::fields::field_vocabulary;
use crate::output::{Field, Printer, Row, cell, parse_fields};

/// Labels containing any of these are left out of the `labels` column.
pub const HIDDEN_LABELS: &[&str] = &["OK", "Subsystem", "JIRA::InProgress", "CodeChanged"];

field_vocabulary! {
    /// Columns of `mr list`.
    pub enum MrField for "mr" {
        Id => "id",
        Iid => "iid",
        ProjectId => "project_id",
        Title => "title",
        Description => "description",
        State => "state",
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
        MergedBy => "merged_by",
        Username => "username",
        Name => "name",
        Locked => "locked",
        AvatarUrl => "avatar_url",
        WebUrl => "web_url",
        MergeUser => "merge_user",
        MergedAt => "merged_at",
        ClosedBy => "closed_by",
        ClosedAt => "closed_at",
        TargetBranch => "target_branch",
        SourceBranch => "source_branch",
        UserNotesCount => "user_notes_count",
        Upvotes => "upvotes",
        Downvotes => "downvotes",
        Author => "author",
        Assignees => "assignees",
        Assignee => "assignee",
        Reviewers => "reviewers",
        SourceProjectId => "source_project_id",
        TargetProjectId => "target_project_id",
        Labels => "labels",
        Draft => "draft",
        WorkInProgress => "work_in_progress",
        Milestone => "milestone",
        MergeWhenPipelineSucceeds => "merge_when_pipeline_succeeds",
        MergeStatus => "merge_status",
        DetailedMergeStatus => "detailed_merge_status",
        Sha => "sha",
        MergeCommitSha => "merge_commit_sha",
        SquashCommitSha => "squash_commit_sha",
        DiscussionLocked => "discussion_locked",
        ShouldRemoveSourceBranch => "should_remove_source_branch",
        ForceRemoveSourceBranch => "force_remove_source_branch",
        PreparedAt => "prepared_at",
        AllowCollaboration => "allow_collaboration",
        AllowMaintainerToPush => "allow_maintainer_to_push",
        Reference => "reference",
        References => "references",
        TimeStats => "time_stats",
        Squash => "squash",
        SquashOnMerge => "squash_on_merge",
        TaskCompletionStatus => "task_completion_status",
        HasConflicts => "has_conflicts",
        BlockingDiscussionsResolved => "blocking_discussions_resolved",
        ApprovalsBeforeMerge => "approvals_before_merge",
        Project => "project",
    }
    default: [Project, Iid, MergeStatus, Author, Title, BlockingDiscussionsResolved, Labels]
}

/// Entry point of the `mr` object.
///
/// # Errors
///
/// Returns the error of the selected operation.
pub async fn run_mr_command<C: GitlabApi, W: Write>(
    args: &MrArgs,
    client: &C,
    printer: &mut Printer<W>,
) -> GswResult<()> {
    match &args.operation {
        None => list_operations("mr", printer),
        Some(MrOperation::List(list)) => run_mr_list(list, client, printer).await,
    }
}

/// Prints open merge requests.
///
/// # Errors
///
/// - [`crate::error::FieldError`] for an unknown `--fields` entry, before any
///   request is made
/// - [`crate::error::RemoteError`] if a GitLab call fails
/// - I/O errors while printing
pub async fn run_mr_list<C: GitlabApi, W: Write>(
    args: &MrListArgs,
    client: &C,
    printer: &mut Printer<W>,
) -> GswResult<()> {
    let fields = match &args.fields {
        Some(names) => parse_fields::<MrField>(names)?,
        None => MrField::DEFAULT.to_vec(),
    };

    let query = MergeRequestQuery::new(args.author.clone(), args.labels.clone());
    let merge_requests = match &args.group {
        Some(group) => client.group_merge_requests(group, &query).await?,
        None => client.merge_requests(&query).await?,
    };
    debug!(count = merge_requests.len(), "merge requests received");

    let mut projects = if args.fields.is_none() && !merge_requests.is_empty() {
        ProjectNames::prefetch(client).await?
    } else {
        ProjectNames::default()
    };

    let mut rows = Vec::new();
    for mr in merge_requests
        .iter()
        .filter(|mr| args.draft || !mr.is_draft())
    {
        let mut row = Row::with_capacity(fields.len());
        for &field in &fields {
            row.push(resolve(mr, field, client, &mut projects).await?);
        }
        rows.push(row);
    }

    printer.print_rows(&rows)?;
    Ok(())
}

async fn resolve<C: GitlabApi>(
    mr: &MergeRequest,
    field: MrField,
    client: &C,
    projects: &mut ProjectNames,
) -> GswResult<String> {
    let value = match field {
        MrField::Author => mr.author_username().unwrap_or_default().to_string(),
        MrField::Labels => visible_labels(mr.labels()),
        MrField::Project => match mr.project_id() {
            Some(id) => projects.name(client, id).await?,
            None => String::new(),
        },
        other => cell(mr.attribute(other.name())),
    };
    Ok(value)
}

/// Drops hidden labels and joins the rest with `", "`.
pub fn visible_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels
        .into_iter()
        .filter(|label| !HIDDEN_LABELS.iter().any(|hidden| label.contains(hidden)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Project id to name map, filled up front or on demand.
#[derive(Debug, Default)]
pub struct ProjectNames {
    names: HashMap<u64, String>,
}

impl ProjectNames {
    /// Loads every project the token owner is a member of.
    ///
    /// # Errors
    ///
    /// Returns the error of the project listing call.
    pub async fn prefetch<C: GitlabApi>(client: &C) -> GswResult<Self> {
        let names: HashMap<u64, String> = client
            .projects()
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        debug!(count = names.len(), "project names prefetched");
        Ok(Self { names })
    }

    /// Name of a project, fetched and remembered if not known yet.
    ///
    /// # Errors
    ///
    /// Returns the error of the project lookup call.
    pub async fn name<C: GitlabApi>(&mut self, client: &C, id: u64) -> GswResult<String> {
        if let Some(name) = self.names.get(&id) {
            return Ok(name.clone());
        }
        trace!(project_id = id, "project name lookup");
        let project = client.project(id).await?;
        self.names.insert(id, project.name.clone());
        Ok(project.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
