//! GitHub repository source
//!
//! Talks to the public GitHub REST API: repository metadata, branch
//! resolution, recursive tree listing filtered to blobs, and per-file
//! content fetches (base64-decoded). Only public repositories are
//! supported; upstream errors are surfaced verbatim.

use super::{ContentReader, ProjectInput};
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

const API_BASE: &str = "https://api.github.com";

/// Extracts `(owner, repo)` from a GitHub repository URL.
///
/// Returns `None` for anything that is not an `https://github.com/owner/repo`
/// shaped URL. A trailing `.git` on the repository segment is stripped.
pub fn parse_github_url(input: &str) -> Option<(String, String)> {
    let parsed = Url::parse(input).ok()?;
    if parsed.host_str() != Some("github.com") {
        return None;
    }
    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?.to_string();
    let repo = segments.next()?.trim_end_matches(".git").to_string();
    if repo.is_empty() {
        return None;
    }
    Some((owner, repo))
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    description: Option<String>,
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct BranchResponse {
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeNode>,
}

#[derive(Debug, Deserialize)]
struct TreeNode {
    path: String,
    #[serde(rename = "type")]
    node_type: String,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: Option<String>,
    encoding: Option<String>,
}

/// File-list source backed by the GitHub REST API.
///
/// Also implements [`ContentReader`], fetching blob content on demand.
pub struct GithubSource {
    client: reqwest::Client,
    owner: String,
    repo: String,
}

impl GithubSource {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        // The GitHub API rejects requests without a User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(concat!("readmebuddy/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        })
    }

    /// Builds a source from a repository URL.
    pub fn from_url(input: &str) -> Result<Self> {
        let (owner, repo) = parse_github_url(input).ok_or_else(|| {
            anyhow!(
                "Invalid GitHub URL format. Provide a public repository URL \
                 (e.g., https://github.com/user/repo)."
            )
        })?;
        Self::new(owner, repo)
    }

    /// Fetches repository metadata and the full file listing.
    pub async fn fetch_project(&self) -> Result<ProjectInput> {
        let repo = self.fetch_repo().await?;
        let files = self.fetch_file_list(&repo.default_branch).await?;
        debug!(
            owner = %self.owner,
            repo = %self.repo,
            branch = %repo.default_branch,
            files = files.len(),
            "fetched repository listing"
        );

        Ok(ProjectInput {
            name: self.repo.clone(),
            description: repo.description.unwrap_or_default(),
            repo_url: Some(format!("https://github.com/{}/{}", self.owner, self.repo)),
            files,
        })
    }

    async fn fetch_repo(&self) -> Result<RepoResponse> {
        let url = format!("{}/repos/{}/{}", API_BASE, self.owner, self.repo);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("GitHub API request failed")?;

        if response.status() == StatusCode::NOT_FOUND {
            bail!("Repository not found. Check the URL and ensure it is a public repository.");
        }
        if !response.status().is_success() {
            bail!("GitHub API error: {}", response.status());
        }

        response
            .json()
            .await
            .context("malformed repository metadata response")
    }

    /// Resolves `branch` to a commit and lists its tree, keeping only blobs.
    async fn fetch_file_list(&self, branch: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{}/{}/branches/{}",
            API_BASE, self.owner, self.repo, branch
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("GitHub API request failed")?;
        if !response.status().is_success() {
            bail!("could not resolve branch {}: {}", branch, response.status());
        }
        let branch_info: BranchResponse = response
            .json()
            .await
            .context("malformed branch response")?;

        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            API_BASE, self.owner, self.repo, branch_info.commit.sha
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("GitHub API request failed")?;
        if !response.status().is_success() {
            bail!("could not list repository tree: {}", response.status());
        }
        let tree: TreeResponse = response.json().await.context("malformed tree response")?;

        Ok(tree
            .tree
            .into_iter()
            .filter(|node| node.node_type == "blob")
            .map(|node| node.path)
            .collect())
    }
}

#[async_trait]
impl ContentReader for GithubSource {
    async fn read(&self, path: &str) -> Option<String> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            API_BASE, self.owner, self.repo, path
        );
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            warn!(path, status = %response.status(), "content fetch failed");
            return None;
        }
        let body: ContentResponse = response.json().await.ok()?;

        let content = body.content?;
        if body.encoding.as_deref() == Some("base64") {
            // GitHub wraps base64 payloads in newlines.
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(compact)
                .ok()?;
            String::from_utf8(bytes).ok()
        } else {
            Some(content)
        }
    }
}
