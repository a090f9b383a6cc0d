pub mod app;
pub mod components;
pub mod helpers;

pub use app::{AppWidget, ShellMeta, SHELL_META};
pub use helpers::centered_rect;
