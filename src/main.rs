use std::io;
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use n9r::app::{Action, AppState, Config, Focus, SessionState};
use n9r::github::GitHubClient;
use n9r::storage::{AuthSnapshot, AuthStorage};
use n9r::ui::{AppWidget, SHELL_META};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();

    init_tracing(&config);
    tracing::info!("=== n9r starting ===");

    let storage = AuthStorage::new()?;
    let session = storage
        .load()
        .map(AuthSnapshot::restore)
        .unwrap_or_else(SessionState::new);

    let mut state = AppState::new(config, session);
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

    // Token resolution: a rehydrated session wins over config/env.
    let startup_token = state
        .session
        .token
        .clone()
        .or_else(|| state.config.github_token());

    let mut client: Option<GitHubClient> = None;
    if let Some(token) = startup_token {
        state.session.set_loading(true);
        spawn_login(&tx, token);
    } else {
        state.log_warn("No GitHub token configured; running signed out");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(SHELL_META.window_title())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state, &storage, &mut client, &tx, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_tracing(config: &Config) {
    let log_file = Config::ensure_config_dir()
        .ok()
        .and_then(|dir| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("n9r.log"))
                .ok()
        });

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(config.log_level.as_directive().parse().unwrap());

    match log_file {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    storage: &AuthStorage,
    client: &mut Option<GitHubClient>,
    tx: &mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Action>,
) -> Result<()> {
    while state.running {
        terminal.draw(|frame| AppWidget::new(state).render(frame))?;

        while let Ok(action) = rx.try_recv() {
            handle_action(state, storage, client, tx, action);
        }

        if state.toast.as_ref().is_some_and(|t| t.is_expired()) {
            state.toast = None;
        }

        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(state, storage, client, tx, key.code);
                }
            }
        } else {
            state.advance_animation();
        }
    }

    Ok(())
}

fn handle_key(
    state: &mut AppState,
    storage: &AuthStorage,
    client: &mut Option<GitHubClient>,
    tx: &mpsc::UnboundedSender<Action>,
    code: KeyCode,
) {
    // Esc dismisses overlays before it touches selections.
    if code == KeyCode::Esc {
        let ws = &mut state.workspace;
        if ws.help_modal_open {
            ws.set_help_modal_open(false);
        } else if ws.settings_modal_open {
            ws.set_settings_modal_open(false);
        } else {
            ws.set_selected_issue(None);
        }
        return;
    }

    match code {
        KeyCode::Char('q') => state.running = false,
        KeyCode::Char('?') => state.workspace.toggle_help_modal(),
        KeyCode::Char('s') => state.workspace.toggle_settings_modal(),
        KeyCode::Char('B') => state.workspace.toggle_sidebar_collapsed(),
        KeyCode::Char('b') => state.workspace.toggle_sidebar(),
        KeyCode::Char('c') => state.workspace.toggle_chat_panel(),
        KeyCode::Char('l') => state.workspace.toggle_log_panel(),
        KeyCode::Char('p') => state.workspace.toggle_preview_panel(),
        KeyCode::Char('0') => {
            state.workspace.reset();
            state.show_info("Workspace layout reset");
        }
        KeyCode::Tab => state.cycle_focus(),
        KeyCode::Char('j') | KeyCode::Down => {
            if state.focus == Focus::Files && state.preview_content.is_some() {
                state.scroll_preview(1);
            } else {
                state.select_next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if state.focus == Focus::Files && state.preview_content.is_some() {
                state.scroll_preview(-1);
            } else {
                state.select_previous();
            }
        }
        KeyCode::Enter => handle_select(state, client, tx),
        KeyCode::Char('r') => {
            if let Some(client) = client {
                state.loading_message = Some("Loading repositories...".to_string());
                spawn_list_repos(tx, client.clone());
            } else {
                state.show_warning("Sign in to load repositories");
            }
        }
        KeyCode::Char('x') => {
            state.session.logout();
            *client = None;
            if let Err(e) = storage.delete() {
                tracing::warn!("Failed to remove auth snapshot: {:#}", e);
                state.log_error(format!("Failed to remove auth snapshot: {}", e));
            }
            state.log_info("Signed out");
            state.show_info("Signed out");
        }
        _ => {}
    }
}

fn handle_select(
    state: &mut AppState,
    client: &Option<GitHubClient>,
    tx: &mpsc::UnboundedSender<Action>,
) {
    match state.focus {
        Focus::Repositories => {
            if let Some(full_name) = state.choose_repository() {
                state.log_info(format!("Selected repository {}", full_name));
                if let Some(client) = client {
                    spawn_list_issues(tx, client.clone(), full_name.clone());
                    spawn_list_files(tx, client.clone(), full_name);
                }
            }
        }
        Focus::Files => {
            // Re-selecting while a preview is open goes back to the list.
            if state.preview_content.is_some() {
                state.preview_content = None;
                state.workspace.set_selected_file(None);
                state.status_bar.set_cursor_position(None);
                return;
            }
            if let Some(download_url) = state.choose_file() {
                let path = state
                    .workspace
                    .selected_file
                    .clone()
                    .unwrap_or_default();
                if let Some(client) = client {
                    state.loading_message = Some(format!("Loading {}...", path));
                    spawn_fetch_file(tx, client.clone(), path, download_url);
                }
            }
        }
        Focus::Issues => state.choose_issue(),
    }
}

fn handle_action(
    state: &mut AppState,
    storage: &AuthStorage,
    client: &mut Option<GitHubClient>,
    tx: &mpsc::UnboundedSender<Action>,
    action: Action,
) {
    match action {
        Action::ProfileLoaded { user, token } => {
            let name = user.login.clone();
            state.session.login(user, token.clone());
            flush_auth(state, storage);
            state.log_info(format!("Signed in as {}", name));
            state.show_success(format!("Signed in as {}", name));

            match GitHubClient::new(&token) {
                Ok(c) => {
                    state.loading_message = Some("Loading repositories...".to_string());
                    spawn_list_repos(tx, c.clone());
                    *client = Some(c);
                }
                Err(e) => {
                    tracing::error!("Failed to build API client: {:#}", e);
                    state.show_error("Failed to build API client");
                }
            }
        }
        Action::ProfileFailed { error } => {
            tracing::warn!("Profile fetch failed: {}", error);
            state.session.set_loading(false);
            if state.session.is_authenticated {
                // Cached identity from the snapshot still stands.
                state.log_warn(format!("Could not refresh profile: {}", error));
                state.show_warning("Offline: using cached session");
                if client.is_none() {
                    if let Some(token) = &state.session.token {
                        *client = GitHubClient::new(token).ok();
                    }
                }
            } else {
                state.log_error(format!("Sign-in failed: {}", error));
                state.show_error("Sign-in failed");
            }
        }
        Action::ReposLoaded(repos) => {
            state.loading_message = None;
            state.log_info(format!("Loaded {} repositories", repos.len()));
            state.repositories = repos;
            state.repo_index = 0;
        }
        Action::IssuesLoaded { repository, issues } => {
            if state.workspace.selected_repository.as_deref() == Some(repository.as_str()) {
                state.log_info(format!("Loaded {} issues for {}", issues.len(), repository));
                state.set_issues(issues);
            }
        }
        Action::FilesLoaded { repository, files } => {
            if state.workspace.selected_repository.as_deref() == Some(repository.as_str()) {
                state.set_files(files);
            }
        }
        Action::PreviewLoaded { path, content } => {
            state.loading_message = None;
            if state.workspace.selected_file.as_deref() == Some(path.as_str()) {
                state.set_preview(content);
            }
        }
        Action::FetchFailed { what, error } => {
            state.loading_message = None;
            tracing::error!("{} failed: {}", what, error);
            state.log_error(format!("{} failed: {}", what, error));
            state.show_error(format!("{} failed", what));
        }
    }
}

/// Explicit persistence point: captures the whitelisted snapshot and
/// reports a failed write instead of swallowing it.
fn flush_auth(state: &mut AppState, storage: &AuthStorage) {
    let snapshot = AuthSnapshot::capture(&state.session);
    if let Err(e) = storage.save(&snapshot) {
        tracing::warn!("Failed to persist session: {:#}", e);
        state.log_error(format!("Failed to persist session: {}", e));
        state.show_warning("Session not saved");
    }
}

fn spawn_login(tx: &mpsc::UnboundedSender<Action>, token: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = match GitHubClient::new(&token) {
            Ok(client) => client.get_viewer().await,
            Err(e) => Err(e),
        };
        let action = match result {
            Ok(user) => Action::ProfileLoaded { user, token },
            Err(e) => Action::ProfileFailed {
                error: format!("{:#}", e),
            },
        };
        let _ = tx.send(action);
    });
}

fn spawn_list_repos(tx: &mpsc::UnboundedSender<Action>, client: GitHubClient) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = match client.list_repos().await {
            Ok(repos) => Action::ReposLoaded(repos),
            Err(e) => Action::FetchFailed {
                what: "Repository fetch".to_string(),
                error: format!("{:#}", e),
            },
        };
        let _ = tx.send(action);
    });
}

fn spawn_list_issues(tx: &mpsc::UnboundedSender<Action>, client: GitHubClient, repository: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = match client.list_issues(&repository).await {
            Ok(issues) => Action::IssuesLoaded { repository, issues },
            Err(e) => Action::FetchFailed {
                what: "Issue fetch".to_string(),
                error: format!("{:#}", e),
            },
        };
        let _ = tx.send(action);
    });
}

fn spawn_list_files(tx: &mpsc::UnboundedSender<Action>, client: GitHubClient, repository: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = match client.list_files(&repository).await {
            Ok(files) => Action::FilesLoaded { repository, files },
            Err(e) => Action::FetchFailed {
                what: "File listing".to_string(),
                error: format!("{:#}", e),
            },
        };
        let _ = tx.send(action);
    });
}

fn spawn_fetch_file(
    tx: &mpsc::UnboundedSender<Action>,
    client: GitHubClient,
    path: String,
    download_url: String,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = match client.fetch_file(&download_url).await {
            Ok(content) => Action::PreviewLoaded { path, content },
            Err(e) => Action::FetchFailed {
                what: "File fetch".to_string(),
                error: format!("{:#}", e),
            },
        };
        let _ = tx.send(action);
    });
}
