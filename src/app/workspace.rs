/// Visibility flags and selections for the interactive surfaces of the
/// shell. Never persisted; `reset` restores the startup defaults.
///
/// No cross-field invariants exist: both modals may be open at once,
/// and a selection survives its panel being hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceState {
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
    pub settings_modal_open: bool,
    pub help_modal_open: bool,
    pub chat_panel_open: bool,
    pub log_panel_open: bool,
    pub preview_panel_open: bool,
    pub selected_repository: Option<String>,
    pub selected_issue: Option<String>,
    pub selected_file: Option<String>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            sidebar_collapsed: false,
            settings_modal_open: false,
            help_modal_open: false,
            chat_panel_open: true,
            log_panel_open: false,
            preview_panel_open: true,
            selected_repository: None,
            selected_issue: None,
            selected_file: None,
        }
    }
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    pub fn toggle_sidebar_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_settings_modal_open(&mut self, open: bool) {
        self.settings_modal_open = open;
    }

    pub fn toggle_settings_modal(&mut self) {
        self.settings_modal_open = !self.settings_modal_open;
    }

    pub fn set_help_modal_open(&mut self, open: bool) {
        self.help_modal_open = open;
    }

    pub fn toggle_help_modal(&mut self) {
        self.help_modal_open = !self.help_modal_open;
    }

    pub fn toggle_chat_panel(&mut self) {
        self.chat_panel_open = !self.chat_panel_open;
    }

    pub fn toggle_log_panel(&mut self) {
        self.log_panel_open = !self.log_panel_open;
    }

    pub fn toggle_preview_panel(&mut self) {
        self.preview_panel_open = !self.preview_panel_open;
    }

    pub fn set_selected_repository(&mut self, repository: Option<String>) {
        self.selected_repository = repository;
    }

    pub fn set_selected_issue(&mut self, issue: Option<String>) {
        self.selected_issue = issue;
    }

    pub fn set_selected_file(&mut self, file: Option<String>) {
        self.selected_file = file;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_defaults() {
        let ws = WorkspaceState::new();
        assert!(ws.sidebar_open);
        assert!(!ws.sidebar_collapsed);
        assert!(!ws.settings_modal_open);
        assert!(!ws.help_modal_open);
        assert!(ws.chat_panel_open);
        assert!(!ws.log_panel_open);
        assert!(ws.preview_panel_open);
        assert!(ws.selected_repository.is_none());
        assert!(ws.selected_issue.is_none());
        assert!(ws.selected_file.is_none());
    }

    #[test]
    fn test_setters_touch_only_their_field() {
        let mut ws = WorkspaceState::new();
        let before = ws.clone();

        ws.set_selected_repository(Some("octocat/hello".to_string()));

        assert_eq!(
            ws.selected_repository.as_deref(),
            Some("octocat/hello")
        );
        assert_eq!(ws.sidebar_open, before.sidebar_open);
        assert_eq!(ws.chat_panel_open, before.chat_panel_open);
        assert_eq!(ws.selected_issue, before.selected_issue);
        assert_eq!(ws.selected_file, before.selected_file);
    }

    #[test]
    fn test_setter_sequence_composes_independently() {
        let mut ws = WorkspaceState::new();
        ws.toggle_sidebar();
        ws.set_sidebar_collapsed(true);
        ws.toggle_chat_panel();
        ws.toggle_log_panel();
        ws.set_selected_issue(Some("17".to_string()));
        ws.set_settings_modal_open(true);

        let mut expected = WorkspaceState::default();
        expected.sidebar_open = false;
        expected.sidebar_collapsed = true;
        expected.chat_panel_open = false;
        expected.log_panel_open = true;
        expected.selected_issue = Some("17".to_string());
        expected.settings_modal_open = true;

        assert_eq!(ws, expected);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut ws = WorkspaceState::new();
        let original = ws.chat_panel_open;

        ws.toggle_chat_panel();
        ws.toggle_chat_panel();

        assert_eq!(ws.chat_panel_open, original);
    }

    #[test]
    fn test_both_modals_may_be_open() {
        let mut ws = WorkspaceState::new();
        ws.toggle_settings_modal();
        ws.toggle_help_modal();

        assert!(ws.settings_modal_open);
        assert!(ws.help_modal_open);
    }

    #[test]
    fn test_reset_restores_defaults_after_any_history() {
        let mut ws = WorkspaceState::new();
        ws.toggle_sidebar();
        ws.toggle_sidebar_collapsed();
        ws.set_help_modal_open(true);
        ws.toggle_preview_panel();
        ws.set_selected_repository(Some("octocat/hello".to_string()));
        ws.set_selected_file(Some("README.md".to_string()));

        ws.reset();

        assert_eq!(ws, WorkspaceState::default());
    }
}
