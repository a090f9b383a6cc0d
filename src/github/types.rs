use serde::{Deserialize, Serialize};

use crate::app::SessionUser;

/// `GET /user` response, reduced to the fields the session cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerResponse {
    pub id: i64,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<ViewerResponse> for SessionUser {
    fn from(viewer: ViewerResponse) -> Self {
        SessionUser {
            id: viewer.id,
            name: viewer.name.unwrap_or_else(|| viewer.login.clone()),
            login: viewer.login,
            email: viewer.email,
            avatar_url: viewer.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoSummary {
    pub full_name: String,
    pub description: Option<String>,
    pub default_branch: String,
    #[serde(default, rename = "open_issues_count")]
    pub open_issues: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelResponse {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueUserResponse {
    pub login: String,
}

/// Raw issue as returned by `GET /repos/{repo}/issues`. The endpoint
/// also returns pull requests; `pull_request` marks those.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<LabelResponse>,
    pub user: IssueUserResponse,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub labels: Vec<String>,
    pub user: String,
}

impl From<IssueResponse> for IssueSummary {
    fn from(issue: IssueResponse) -> Self {
        IssueSummary {
            number: issue.number,
            title: issue.title,
            body: issue.body,
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
            user: issue.user.login,
        }
    }
}

impl IssueSummary {
    pub fn is_bug(&self) -> bool {
        self.labels.iter().any(|l| l.eq_ignore_ascii_case("bug"))
    }
}

/// Entry from `GET /repos/{repo}/contents`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepoFile {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub download_url: Option<String>,
}

impl RepoFile {
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }

    /// Human label for the status bar, derived from the extension.
    pub fn type_label(&self) -> String {
        let ext = self.name.rsplit_once('.').map(|(_, ext)| ext);
        match ext {
            Some("rs") => "Rust".to_string(),
            Some("toml") => "TOML".to_string(),
            Some("md") => "Markdown".to_string(),
            Some("json") => "JSON".to_string(),
            Some("yml") | Some("yaml") => "YAML".to_string(),
            Some("js") => "JavaScript".to_string(),
            Some("ts") => "TypeScript".to_string(),
            Some("py") => "Python".to_string(),
            Some("sh") => "Shell".to_string(),
            Some(other) => other.to_uppercase(),
            None => "Plain Text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_name_falls_back_to_login() {
        let viewer = ViewerResponse {
            id: 1,
            login: "octocat".to_string(),
            name: None,
            email: None,
            avatar_url: None,
        };
        let user: SessionUser = viewer.into();
        assert_eq!(user.name, "octocat");
    }

    #[test]
    fn test_is_bug_is_case_insensitive() {
        let issue = IssueSummary {
            number: 1,
            title: "crash".to_string(),
            body: None,
            labels: vec!["Bug".to_string()],
            user: "octocat".to_string(),
        };
        assert!(issue.is_bug());
    }

    #[test]
    fn test_type_label() {
        let file = |name: &str| RepoFile {
            name: name.to_string(),
            path: name.to_string(),
            kind: "file".to_string(),
            download_url: None,
        };
        assert_eq!(file("main.rs").type_label(), "Rust");
        assert_eq!(file("Cargo.toml").type_label(), "TOML");
        assert_eq!(file("notes.xyz").type_label(), "XYZ");
        assert_eq!(file("LICENSE").type_label(), "Plain Text");
    }

    #[test]
    fn test_issue_response_parses_pull_request_marker() {
        let body = r#"{
            "number": 5,
            "title": "Add feature",
            "body": null,
            "labels": [{"name": "bug"}],
            "user": {"login": "octocat"},
            "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/5"}
        }"#;
        let issue: IssueResponse = serde_json::from_str(body).unwrap();
        assert!(issue.pull_request.is_some());
        assert_eq!(issue.labels[0].name, "bug");
    }
}
