use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};

use super::types::{IssueResponse, IssueSummary, RepoFile, RepoSummary, ViewerResponse};
use crate::app::SessionUser;

const GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {}", token)).context("Invalid token")?,
        );
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("n9r-tui")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Profile of the token's owner; this is what feeds the session
    /// store on login.
    pub async fn get_viewer(&self) -> Result<SessionUser> {
        let url = format!("{}/user", GITHUB_API_URL);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch viewer profile")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("GitHub API error: {} - {}", status, body);
            anyhow::bail!("GitHub API error: {}", status);
        }

        let viewer: ViewerResponse = response
            .json()
            .await
            .context("Failed to parse viewer response")?;

        Ok(viewer.into())
    }

    pub async fn list_repos(&self) -> Result<Vec<RepoSummary>> {
        let url = format!("{}/user/repos", GITHUB_API_URL);

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", "50"), ("sort", "updated")])
            .send()
            .await
            .context("Failed to fetch repositories")?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API error: {}", response.status());
        }

        let repos: Vec<RepoSummary> = response
            .json()
            .await
            .context("Failed to parse repository response")?;

        tracing::debug!("GitHub: {} repositories for viewer", repos.len());

        Ok(repos)
    }

    /// Open issues of a repository. Pull requests share the endpoint
    /// and are filtered out here.
    pub async fn list_issues(&self, full_name: &str) -> Result<Vec<IssueSummary>> {
        let url = format!("{}/repos/{}/issues", GITHUB_API_URL, full_name);

        let response = self
            .client
            .get(&url)
            .query(&[("state", "open"), ("per_page", "50")])
            .send()
            .await
            .context("Failed to fetch issues")?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API error: {}", response.status());
        }

        let issues: Vec<IssueResponse> = response
            .json()
            .await
            .context("Failed to parse issue response")?;

        Ok(issues
            .into_iter()
            .filter(|i| i.pull_request.is_none())
            .map(IssueSummary::from)
            .collect())
    }

    /// Top-level contents of a repository's default branch.
    pub async fn list_files(&self, full_name: &str) -> Result<Vec<RepoFile>> {
        let url = format!("{}/repos/{}/contents", GITHUB_API_URL, full_name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch repository contents")?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API error: {}", response.status());
        }

        let mut files: Vec<RepoFile> = response
            .json()
            .await
            .context("Failed to parse contents response")?;

        // Directories first, then files, both alphabetical.
        files.sort_by(|a, b| a.is_file().cmp(&b.is_file()).then_with(|| a.name.cmp(&b.name)));

        Ok(files)
    }

    /// Raw text of a file via its contents `download_url`.
    pub async fn fetch_file(&self, download_url: &str) -> Result<String> {
        let response = self
            .client
            .get(download_url)
            .send()
            .await
            .context("Failed to fetch file")?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API error: {}", response.status());
        }

        response.text().await.context("Failed to read file body")
    }
}
