//! Pull request comments through the GitHub REST API

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
}

/// Issue comment endpoints used by [`upsert_comment`]
#[async_trait]
pub trait IssueComments: Send + Sync {
    /// One page of comments, oldest first; pages start at 1
    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        page: u32,
    ) -> Result<Vec<Comment>>;

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Comment>;

    async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Comment>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertCommentInput {
    pub owner: String,
    pub repo: String,
    pub pull_number: u64,
    pub mark: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertCommentOutput {
    pub updated: bool,
    pub id: u64,
}

/// Update the first comment starting with `mark`, or create one. The
/// stored body is always `mark` followed by a newline and `body`.
pub async fn upsert_comment(
    api: &dyn IssueComments,
    input: &UpsertCommentInput,
) -> Result<UpsertCommentOutput> {
    let UpsertCommentInput {
        owner,
        repo,
        pull_number,
        mark,
        body,
    } = input;
    let marked_body = format!("{mark}\n{body}");

    let mut page = 1;
    loop {
        let comments = api.list_comments(owner, repo, *pull_number, page).await?;
        debug!("Fetched {} comment(s) from page {}", comments.len(), page);

        let past = comments
            .iter()
            .find(|c| c.body.as_deref().is_some_and(|b| b.starts_with(mark.as_str())));
        if let Some(past) = past {
            let updated = api.update_comment(owner, repo, past.id, &marked_body).await?;
            return Ok(UpsertCommentOutput {
                updated: true,
                id: updated.id,
            });
        }

        if comments.len() < PER_PAGE {
            break;
        }
        page += 1;
    }

    let created = api
        .create_comment(owner, repo, *pull_number, &marked_body)
        .await?;
    Ok(UpsertCommentOutput {
        updated: false,
        id: created.id,
    })
}

#[derive(Debug, Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

/// [`IssueComments`] backed by the REST API
pub struct RestClient {
    client: Client,
    token: String,
    api_url: String,
}

impl RestClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("junit-monorepo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header("accept", "application/vnd.github+json")
            .header("x-github-api-version", "2022-11-28")
    }

    async fn into_json<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T> {
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(Error::HttpStatus(
                "401 Unauthorized: check github-token".to_string(),
            )),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(Error::HttpStatus(format!("{status}: {error_text}")))
            }
        }
    }
}

#[async_trait]
impl IssueComments for RestClient {
    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        page: u32,
    ) -> Result<Vec<Comment>> {
        let response = self
            .request(
                reqwest::Method::GET,
                &format!("/repos/{owner}/{repo}/issues/{issue_number}/comments"),
            )
            .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())])
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Comment> {
        let response = self
            .request(
                reqwest::Method::POST,
                &format!("/repos/{owner}/{repo}/issues/{issue_number}/comments"),
            )
            .json(&CommentBody { body })
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Comment> {
        let response = self
            .request(
                reqwest::Method::PATCH,
                &format!("/repos/{owner}/{repo}/issues/comments/{comment_id}"),
            )
            .json(&CommentBody { body })
            .send()
            .await?;
        Self::into_json(response).await
    }
}
