// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! GitLab REST client.
//!
//! ```text
//! RemoteConfig --> GitlabClient::new() --> GitlabApi
//!                                            |
//!    merge_requests ------ GET  /merge_requests
//!    group_merge_requests  GET  /groups/:group/merge_requests
//!    projects ------------ GET  /projects?membership=true&simple=true
//!    project ------------- GET  /projects/:id
//!    todos --------------- GET  /todos
//!    mark_todo_done ------ POST /todos/:id/mark_as_done
//!
//! Lists follow x-next-page until it is empty (per_page=100).
//! ```
//!
//! Command handlers are generic over [`GitlabApi`], so tests can swap in an
//! in-memory implementation.

pub mod models;

#[cfg(test)]
pub(crate) mod fake;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::RemoteConfig;
use crate::error::{GswResult, RemoteError, connection_failed};

use models::{MergeRequest, Project, Todo};

/// Page size requested from list endpoints (GitLab's maximum).
pub const PER_PAGE: u32 = 100;

/// Header carrying the private access token.
const TOKEN_HEADER: &str = "private-token";

/// Header carrying the next page number; empty on the last page.
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// Which merge requests a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Merge requests assigned to the token owner.
    #[default]
    AssignedToMe,
    /// Every merge request the token owner can see.
    All,
}

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssignedToMe => "assigned_to_me",
            Self::All => "all",
        }
    }
}

/// Filters for merge request listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestQuery {
    pub state: &'static str,
    pub scope: Scope,
    pub author: Option<String>,
    pub labels: Vec<String>,
}

impl Default for MergeRequestQuery {
    fn default() -> Self {
        Self {
            state: "opened",
            scope: Scope::default(),
            author: None,
            labels: Vec::new(),
        }
    }
}

impl MergeRequestQuery {
    /// Builds a query; an author or label filter widens the scope to all
    /// visible merge requests.
    #[must_use]
    pub fn new(author: Option<String>, labels: Vec<String>) -> Self {
        let scope = if author.is_some() || !labels.is_empty() {
            Scope::All
        } else {
            Scope::AssignedToMe
        };
        Self {
            scope,
            author,
            labels,
            ..Self::default()
        }
    }

    /// Query parameters; `with_scope` is false for group listings.
    #[must_use]
    pub fn params(&self, with_scope: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![("state", self.state.to_string())];
        if with_scope {
            params.push(("scope", self.scope.as_str().to_string()));
        }
        if let Some(author) = &self.author {
            params.push(("author_username", author.clone()));
        }
        if !self.labels.is_empty() {
            params.push(("labels", self.labels.join(",")));
        }
        params
    }
}

/// Remote operations the commands need.
///
/// Calls are issued one at a time; implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait GitlabApi {
    /// Lists merge requests across the instance.
    async fn merge_requests(&self, query: &MergeRequestQuery) -> GswResult<Vec<MergeRequest>>;

    /// Lists merge requests of one group (id or full path).
    async fn group_merge_requests(
        &self,
        group: &str,
        query: &MergeRequestQuery,
    ) -> GswResult<Vec<MergeRequest>>;

    /// Lists the projects the token owner is a member of.
    async fn projects(&self) -> GswResult<Vec<Project>>;

    /// Fetches a single project.
    async fn project(&self, id: u64) -> GswResult<Project>;

    /// Lists pending to-dos.
    async fn todos(&self) -> GswResult<Vec<Todo>>;

    /// Marks one to-do as done.
    async fn mark_todo_done(&self, id: u64) -> GswResult<()>;
}

/// reqwest-backed [`GitlabApi`].
#[derive(Debug, Clone)]
pub struct GitlabClient {
    http: Client,
    api_base: Url,
}

impl GitlabClient {
    /// Builds an authenticated client for the configured instance.
    ///
    /// No request is sent; an unreachable host only shows up on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GswError::Connection`] if the URL is not a valid
    /// base URL, the token is not a valid header value, or the HTTP client
    /// cannot be built.
    pub fn new(config: &RemoteConfig) -> GswResult<Self> {
        let mut api_base = Url::parse(config.url())
            .map_err(|e| connection_failed(format!("invalid url '{}': {e}", config.url())))?;
        api_base
            .path_segments_mut()
            .map_err(|()| connection_failed(format!("'{}' cannot be a base url", config.url())))?
            .pop_if_empty()
            .extend(["api", "v4"]);

        let mut token = HeaderValue::from_str(config.token())
            .map_err(|e| connection_failed(format!("invalid token: {e}")))?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token);

        let http = Client::builder()
            .user_agent(format!("gsw/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| connection_failed(e.to_string()))?;

        debug!(api = %api_base, "gitlab client ready");
        Ok(Self { http, api_base })
    }

    /// Base URL of the v4 API.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn endpoint(&self, segments: &[&str], params: &[(&str, String)]) -> GswResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteError::InvalidUrl(self.api_base.to_string()))?
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn send(request: RequestBuilder, url: &Url) -> GswResult<Response> {
        let response = request.send().await.map_err(RemoteError::Request)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(RemoteError::Http {
            status: status.as_u16(),
            url: url.to_string(),
            message,
        }
        .into())
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> GswResult<T> {
        response.json::<T>().await.map_err(|e| {
            RemoteError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn get_one<T: DeserializeOwned>(&self, url: Url) -> GswResult<T> {
        debug!(%url, "GET");
        let response = Self::send(self.http.get(url.clone()), &url).await?;
        Self::decode(response, &url).await
    }

    /// Fetches every page of a list endpoint, in order.
    async fn get_all<T: DeserializeOwned>(&self, url: Url) -> GswResult<Vec<T>> {
        let mut items = Vec::new();
        let mut page = String::from("1");

        loop {
            let mut page_url = url.clone();
            page_url
                .query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page);

            debug!(url = %page_url, page = %page, "GET");
            let response = Self::send(self.http.get(page_url.clone()), &page_url).await?;
            let next = response
                .headers()
                .get(NEXT_PAGE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string);

            let batch: Vec<T> = Self::decode(response, &page_url).await?;
            trace!(count = batch.len(), page = %page, "page received");
            items.extend(batch);

            match next {
                Some(next) if next != page => page = next,
                _ => break,
            }
        }

        Ok(items)
    }
}

impl GitlabApi for GitlabClient {
    async fn merge_requests(&self, query: &MergeRequestQuery) -> GswResult<Vec<MergeRequest>> {
        let url = self.endpoint(&["merge_requests"], &query.params(true))?;
        self.get_all(url).await
    }

    async fn group_merge_requests(
        &self,
        group: &str,
        query: &MergeRequestQuery,
    ) -> GswResult<Vec<MergeRequest>> {
        let url = self.endpoint(&["groups", group, "merge_requests"], &query.params(false))?;
        self.get_all(url).await
    }

    async fn projects(&self) -> GswResult<Vec<Project>> {
        let params = [
            ("membership", "true".to_string()),
            ("simple", "true".to_string()),
        ];
        let url = self.endpoint(&["projects"], &params)?;
        self.get_all(url).await
    }

    async fn project(&self, id: u64) -> GswResult<Project> {
        let id = id.to_string();
        let url = self.endpoint(&["projects", id.as_str()], &[])?;
        self.get_one(url).await
    }

    async fn todos(&self) -> GswResult<Vec<Todo>> {
        let url = self.endpoint(&["todos"], &[])?;
        self.get_all(url).await
    }

    async fn mark_todo_done(&self, id: u64) -> GswResult<()> {
        let id = id.to_string();
        let url = self.endpoint(&["todos", id.as_str(), "mark_as_done"], &[])?;
        debug!(%url, "POST");
        Self::send(self.http.post(url.clone()), &url).await?;
        Ok(())
    }
}
