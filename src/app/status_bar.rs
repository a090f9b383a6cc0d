#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

/// Editor-context fields rendered in the status line: current branch,
/// file type label, cursor position, and diagnostics counters.
///
/// Counts are accepted verbatim from the caller; nothing is derived
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    pub branch: String,
    pub file_type: String,
    pub cursor_position: Option<CursorPosition>,
    pub errors: u32,
    pub warnings: u32,
}

impl StatusBarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    pub fn set_file_type(&mut self, file_type: impl Into<String>) {
        self.file_type = file_type.into();
    }

    pub fn set_cursor_position(&mut self, position: Option<CursorPosition>) {
        self.cursor_position = position;
    }

    pub fn set_diagnostics(&mut self, errors: u32, warnings: u32) {
        self.errors = errors;
        self.warnings = warnings;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let bar = StatusBarState::new();
        assert!(bar.branch.is_empty());
        assert!(bar.file_type.is_empty());
        assert!(bar.cursor_position.is_none());
        assert_eq!(bar.errors, 0);
        assert_eq!(bar.warnings, 0);
    }

    #[test]
    fn test_set_diagnostics_leaves_other_fields() {
        let mut bar = StatusBarState::new();
        bar.set_branch("main");
        bar.set_file_type("Rust");
        bar.set_cursor_position(Some(CursorPosition { line: 10, column: 4 }));

        bar.set_diagnostics(3, 5);

        assert_eq!(bar.errors, 3);
        assert_eq!(bar.warnings, 5);
        assert_eq!(bar.branch, "main");
        assert_eq!(bar.file_type, "Rust");
        assert_eq!(
            bar.cursor_position,
            Some(CursorPosition { line: 10, column: 4 })
        );
    }

    #[test]
    fn test_setters_are_independent() {
        let mut bar = StatusBarState::new();
        bar.set_cursor_position(Some(CursorPosition { line: 1, column: 1 }));
        bar.set_branch("feature/x");

        assert_eq!(
            bar.cursor_position,
            Some(CursorPosition { line: 1, column: 1 })
        );
        assert_eq!(bar.branch, "feature/x");
        assert!(bar.file_type.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut bar = StatusBarState::new();
        bar.set_branch("main");
        bar.set_file_type("TOML");
        bar.set_cursor_position(Some(CursorPosition { line: 7, column: 2 }));
        bar.set_diagnostics(1, 9);

        bar.reset();

        assert_eq!(bar, StatusBarState::default());
    }
}
