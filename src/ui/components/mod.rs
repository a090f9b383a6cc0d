pub mod help_overlay;
pub mod panels;
pub mod progress_overlay;
pub mod settings_modal;
pub mod sidebar;
pub mod status_bar;
pub mod toast;

pub use help_overlay::HelpOverlay;
pub use panels::{ChatPanelWidget, LogPanelWidget, PreviewPanelWidget};
pub use progress_overlay::ProgressOverlay;
pub use settings_modal::SettingsModal;
pub use sidebar::SidebarWidget;
pub use status_bar::StatusBarWidget;
pub use toast::ToastWidget;
