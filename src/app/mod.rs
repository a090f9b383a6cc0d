pub mod action;
pub mod config;
pub mod session;
pub mod state;
pub mod status_bar;
pub mod workspace;

pub use action::Action;
pub use config::{Config, GitHubConfig, LogLevel as ConfigLogLevel};
pub use session::{SessionState, SessionUser};
pub use state::{AppState, Focus, LogEntry, LogLevel, Toast, ToastLevel};
pub use status_bar::{CursorPosition, StatusBarState};
pub use workspace::WorkspaceState;
