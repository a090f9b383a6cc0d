use chrono::Utc;

use super::config::Config;
use super::session::SessionState;
use super::status_bar::{CursorPosition, StatusBarState};
use super::workspace::WorkspaceState;
use crate::github::{IssueSummary, RepoFile, RepoSummary};

const LOG_HISTORY_SIZE: usize = 100;

/// Which list currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Repositories,
    Files,
    Issues,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Repositories => Focus::Files,
            Focus::Files => Focus::Issues,
            Focus::Issues => Focus::Repositories,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: std::time::Instant,
    pub duration_secs: u64,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        let duration_secs = match level {
            ToastLevel::Success => 3,
            ToastLevel::Info => 3,
            ToastLevel::Warning => 4,
            ToastLevel::Error => 5,
        };
        Self {
            message,
            level,
            created_at: std::time::Instant::now(),
            duration_secs,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// Root application state: the three UI-state containers plus the data
/// they are fed from. Constructed once in `main` and passed by
/// reference into the widget tree; nothing in here is global.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub session: SessionState,
    pub workspace: WorkspaceState,
    pub status_bar: StatusBarState,
    pub running: bool,
    pub toast: Option<Toast>,
    pub logs: Vec<LogEntry>,
    pub animation_frame: usize,
    pub loading_message: Option<String>,
    pub focus: Focus,
    pub repositories: Vec<RepoSummary>,
    pub issues: Vec<IssueSummary>,
    pub files: Vec<RepoFile>,
    pub repo_index: usize,
    pub file_index: usize,
    pub issue_index: usize,
    pub preview_content: Option<String>,
    pub preview_scroll: usize,
}

impl AppState {
    pub fn new(config: Config, session: SessionState) -> Self {
        Self {
            config,
            session,
            workspace: WorkspaceState::new(),
            status_bar: StatusBarState::new(),
            running: true,
            toast: None,
            logs: Vec::new(),
            animation_frame: 0,
            loading_message: None,
            focus: Focus::default(),
            repositories: Vec::new(),
            issues: Vec::new(),
            files: Vec::new(),
            repo_index: 0,
            file_index: 0,
            issue_index: 0,
            preview_content: None,
            preview_scroll: 0,
        }
    }

    pub fn advance_animation(&mut self) {
        self.animation_frame = (self.animation_frame + 1) % 10;
    }

    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        };
        self.logs.push(entry);
        if self.logs.len() > LOG_HISTORY_SIZE {
            self.logs.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn log_debug(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.toast = Some(Toast::new(msg.into(), ToastLevel::Error));
    }

    pub fn show_success(&mut self, msg: impl Into<String>) {
        self.toast = Some(Toast::new(msg.into(), ToastLevel::Success));
    }

    pub fn show_info(&mut self, msg: impl Into<String>) {
        self.toast = Some(Toast::new(msg.into(), ToastLevel::Info));
    }

    pub fn show_warning(&mut self, msg: impl Into<String>) {
        self.toast = Some(Toast::new(msg.into(), ToastLevel::Warning));
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn select_next(&mut self) {
        let (index, len) = self.focused_list_mut();
        if len > 0 {
            *index = (*index + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let (index, len) = self.focused_list_mut();
        if len > 0 {
            *index = if *index == 0 { len - 1 } else { *index - 1 };
        }
    }

    fn focused_list_mut(&mut self) -> (&mut usize, usize) {
        match self.focus {
            Focus::Repositories => (&mut self.repo_index, self.repositories.len()),
            Focus::Files => (&mut self.file_index, self.files.len()),
            Focus::Issues => (&mut self.issue_index, self.issues.len()),
        }
    }

    pub fn highlighted_repository(&self) -> Option<&RepoSummary> {
        self.repositories.get(self.repo_index)
    }

    pub fn highlighted_file(&self) -> Option<&RepoFile> {
        self.files.get(self.file_index)
    }

    pub fn highlighted_issue(&self) -> Option<&IssueSummary> {
        self.issues.get(self.issue_index)
    }

    pub fn selected_issue(&self) -> Option<&IssueSummary> {
        let selected = self.workspace.selected_issue.as_deref()?;
        self.issues
            .iter()
            .find(|i| i.number.to_string() == selected)
    }

    /// Commits the highlighted repository as the current selection and
    /// clears everything that hung off the previous one.
    pub fn choose_repository(&mut self) -> Option<String> {
        let repo = self.highlighted_repository()?.clone();

        self.workspace
            .set_selected_repository(Some(repo.full_name.clone()));
        self.workspace.set_selected_issue(None);
        self.workspace.set_selected_file(None);
        self.status_bar.reset();
        self.status_bar.set_branch(repo.default_branch.clone());
        self.issues.clear();
        self.files.clear();
        self.issue_index = 0;
        self.file_index = 0;
        self.preview_content = None;
        self.preview_scroll = 0;

        Some(repo.full_name)
    }

    /// Commits the highlighted file as the current selection. Returns
    /// its download URL so the caller can fetch the preview text.
    pub fn choose_file(&mut self) -> Option<String> {
        let file = self.highlighted_file()?.clone();
        if !file.is_file() {
            return None;
        }

        self.workspace.set_selected_file(Some(file.path.clone()));
        self.status_bar.set_file_type(file.type_label());
        self.preview_content = None;
        self.preview_scroll = 0;
        self.status_bar.set_cursor_position(None);

        file.download_url
    }

    pub fn choose_issue(&mut self) {
        if let Some(issue) = self.highlighted_issue() {
            let number = issue.number.to_string();
            self.workspace.set_selected_issue(Some(number));
        }
    }

    pub fn set_issues(&mut self, issues: Vec<IssueSummary>) {
        let errors = issues.iter().filter(|i| i.is_bug()).count() as u32;
        let warnings = issues.len() as u32 - errors;
        self.status_bar.set_diagnostics(errors, warnings);

        self.issues = issues;
        self.issue_index = 0;
    }

    pub fn set_files(&mut self, files: Vec<RepoFile>) {
        self.files = files;
        self.file_index = 0;
    }

    pub fn set_preview(&mut self, content: String) {
        self.preview_content = Some(content);
        self.preview_scroll = 0;
        self.status_bar
            .set_cursor_position(Some(CursorPosition { line: 1, column: 1 }));
    }

    /// Scrolls the preview panel and mirrors the position into the
    /// status bar.
    pub fn scroll_preview(&mut self, delta: isize) {
        let Some(content) = &self.preview_content else {
            return;
        };
        let max = content.lines().count().saturating_sub(1);

        self.preview_scroll = self
            .preview_scroll
            .saturating_add_signed(delta)
            .min(max);
        self.status_bar.set_cursor_position(Some(CursorPosition {
            line: self.preview_scroll as u32 + 1,
            column: 1,
        }));
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_loading || self.loading_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(full_name: &str, branch: &str) -> RepoSummary {
        RepoSummary {
            full_name: full_name.to_string(),
            description: None,
            default_branch: branch.to_string(),
            open_issues: 0,
        }
    }

    fn issue(number: u64, labels: &[&str]) -> IssueSummary {
        IssueSummary {
            number,
            title: format!("Issue {}", number),
            body: None,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            user: "octocat".to_string(),
        }
    }

    fn state() -> AppState {
        AppState::new(Config::default(), SessionState::new())
    }

    #[test]
    fn test_choose_repository_resets_dependent_state() {
        let mut app = state();
        app.repositories = vec![repo("octocat/hello", "main")];
        app.issues = vec![issue(1, &[])];
        app.workspace.set_selected_issue(Some("1".to_string()));
        app.status_bar.set_diagnostics(2, 2);

        let chosen = app.choose_repository();

        assert_eq!(chosen.as_deref(), Some("octocat/hello"));
        assert_eq!(
            app.workspace.selected_repository.as_deref(),
            Some("octocat/hello")
        );
        assert!(app.workspace.selected_issue.is_none());
        assert!(app.workspace.selected_file.is_none());
        assert_eq!(app.status_bar.branch, "main");
        assert_eq!(app.status_bar.errors, 0);
        assert!(app.issues.is_empty());
    }

    #[test]
    fn test_set_issues_updates_diagnostics() {
        let mut app = state();
        app.set_issues(vec![
            issue(1, &["bug"]),
            issue(2, &["bug", "help wanted"]),
            issue(3, &["enhancement"]),
            issue(4, &[]),
        ]);

        assert_eq!(app.status_bar.errors, 2);
        assert_eq!(app.status_bar.warnings, 2);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = state();
        app.repositories = vec![repo("a/a", "main"), repo("b/b", "main")];

        app.select_next();
        assert_eq!(app.repo_index, 1);
        app.select_next();
        assert_eq!(app.repo_index, 0);
        app.select_previous();
        assert_eq!(app.repo_index, 1);
    }

    #[test]
    fn test_selection_on_empty_list_is_noop() {
        let mut app = state();
        app.select_next();
        app.select_previous();
        assert_eq!(app.repo_index, 0);
    }

    #[test]
    fn test_scroll_preview_tracks_cursor() {
        let mut app = state();
        app.set_preview("one\ntwo\nthree\nfour".to_string());

        app.scroll_preview(2);
        assert_eq!(app.preview_scroll, 2);
        assert_eq!(
            app.status_bar.cursor_position,
            Some(CursorPosition { line: 3, column: 1 })
        );

        // Clamped at the last line.
        app.scroll_preview(10);
        assert_eq!(app.preview_scroll, 3);

        app.scroll_preview(-10);
        assert_eq!(app.preview_scroll, 0);
        assert_eq!(
            app.status_bar.cursor_position,
            Some(CursorPosition { line: 1, column: 1 })
        );
    }

    #[test]
    fn test_log_ring_is_capped() {
        let mut app = state();
        for i in 0..150 {
            app.log_info(format!("entry {}", i));
        }
        assert_eq!(app.logs.len(), 100);
        assert_eq!(app.logs[0].message, "entry 50");
    }
}
