// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! In-memory [`GitlabApi`] for handler tests.

use std::cell::RefCell;

use super::models::{MergeRequest, Project, Todo};
use super::{GitlabApi, MergeRequestQuery};
use crate::error::{GswResult, RemoteError};

/// A call received by [`FakeGitlab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    MergeRequests(MergeRequestQuery),
    GroupMergeRequests(String, MergeRequestQuery),
    Projects,
    Project(u64),
    Todos,
    MarkTodoDone(u64),
}

#[derive(Debug, Default)]
pub(crate) struct FakeGitlab {
    pub(crate) merge_requests: Vec<MergeRequest>,
    pub(crate) group_merge_requests: Vec<MergeRequest>,
    pub(crate) projects: Vec<Project>,
    pub(crate) todos: Vec<Todo>,
    calls: RefCell<Vec<Call>>,
}

impl FakeGitlab {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GitlabApi for FakeGitlab {
    async fn merge_requests(&self, query: &MergeRequestQuery) -> GswResult<Vec<MergeRequest>> {
        self.record(Call::MergeRequests(query.clone()));
        Ok(self.merge_requests.clone())
    }

    async fn group_merge_requests(
        &self,
        group: &str,
        query: &MergeRequestQuery,
    ) -> GswResult<Vec<MergeRequest>> {
        self.record(Call::GroupMergeRequests(group.to_string(), query.clone()));
        Ok(self.group_merge_requests.clone())
    }

    async fn projects(&self) -> GswResult<Vec<Project>> {
        self.record(Call::Projects);
        Ok(self.projects.clone())
    }

    async fn project(&self, id: u64) -> GswResult<Project> {
        self.record(Call::Project(id));
        self.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| {
                RemoteError::Http {
                    status: 404,
                    url: format!("/projects/{id}"),
                    message: "404 Project Not Found".to_string(),
                }
                .into()
            })
    }

    async fn todos(&self) -> GswResult<Vec<Todo>> {
        self.record(Call::Todos);
        Ok(self.todos.clone())
    }

    async fn mark_todo_done(&self, id: u64) -> GswResult<()> {
        self.record(Call::MarkTodoDone(id));
        Ok(())
    }
}
