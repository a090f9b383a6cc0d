use crate::app::session::SessionUser;
use crate::github::{IssueSummary, RepoFile, RepoSummary};

/// Results of spawned fetch tasks, delivered to the main loop over the
/// action channel.
#[derive(Debug, Clone)]
pub enum Action {
    ProfileLoaded {
        user: SessionUser,
        token: String,
    },
    ProfileFailed {
        error: String,
    },
    ReposLoaded(Vec<RepoSummary>),
    IssuesLoaded {
        repository: String,
        issues: Vec<IssueSummary>,
    },
    FilesLoaded {
        repository: String,
        files: Vec<RepoFile>,
    },
    PreviewLoaded {
        path: String,
        content: String,
    },
    FetchFailed {
        what: String,
        error: String,
    },
}
