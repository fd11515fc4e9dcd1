// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Records returned by the GitLab API.
//!
//! # Key Types
//!
//! | Type           | Purpose                                     |
//! |----------------|---------------------------------------------|
//! | `MergeRequest` | Merge request attributes + typed accessors  |
//! | `Todo`         | To-do attributes + nested project / target  |
//! | `Project`      | Project id and display name                 |
//!
//! Merge requests and to-dos carry dozens of attributes that are only ever
//! printed, so they are kept as JSON maps; the handful the tool reasons about
//! get typed accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `target_type` of to-dos raised on merge requests.
pub const MERGE_REQUEST_TARGET: &str = "MergeRequest";

static NULL: Value = Value::Null;

/// GitLab merge request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeRequest {
    attributes: Map<String, Value>,
}

impl MergeRequest {
    /// Raw attribute by name, `Null` when absent.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &Value {
        self.attributes.get(name).unwrap_or(&NULL)
    }

    #[must_use]
    pub fn iid(&self) -> Option<u64> {
        self.attribute("iid").as_u64()
    }

    #[must_use]
    pub fn project_id(&self) -> Option<u64> {
        self.attribute("project_id").as_u64()
    }

    /// Draft flag; older instances only report `work_in_progress`.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.attribute("draft")
            .as_bool()
            .or_else(|| self.attribute("work_in_progress").as_bool())
            .unwrap_or(false)
    }

    /// Username of the author.
    #[must_use]
    pub fn author_username(&self) -> Option<&str> {
        self.attribute("author").get("username")?.as_str()
    }

    /// Label names in the order GitLab returned them.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.attribute("labels")
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}

/// GitLab to-do item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Todo {
    attributes: Map<String, Value>,
}

impl Todo {
    /// Raw attribute by name, `Null` when absent.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &Value {
        self.attributes.get(name).unwrap_or(&NULL)
    }

    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.attribute("id").as_u64()
    }

    #[must_use]
    pub fn target_type(&self) -> Option<&str> {
        self.attribute("target_type").as_str()
    }

    /// Whether the to-do points at a merge request.
    #[must_use]
    pub fn is_merge_request(&self) -> bool {
        self.target_type() == Some(MERGE_REQUEST_TARGET)
    }

    #[must_use]
    pub fn target_url(&self) -> Option<&str> {
        self.attribute("target_url").as_str()
    }

    /// Key of the nested `project` object, `Null` when absent.
    #[must_use]
    pub fn project(&self, key: &str) -> &Value {
        self.attribute("project").get(key).unwrap_or(&NULL)
    }

    /// Key of the nested `target` object, `Null` when absent.
    #[must_use]
    pub fn target(&self, key: &str) -> &Value {
        self.attribute("target").get(key).unwrap_or(&NULL)
    }
}

/// GitLab project, reduced to what name resolution needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}
