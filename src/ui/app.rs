use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;

use super::components::{
    ChatPanelWidget, HelpOverlay, LogPanelWidget, PreviewPanelWidget, ProgressOverlay,
    SettingsModal, SidebarWidget, StatusBarWidget, ToastWidget,
};

/// Page-level metadata: window title, tagline, search keywords.
pub struct ShellMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SHELL_META: ShellMeta = ShellMeta {
    title: "n9r",
    description: "Triage GitHub repositories and issues from the terminal",
    keywords: &["github", "issues", "triage", "terminal"],
};

impl ShellMeta {
    pub fn window_title(&self) -> String {
        format!("{} — {}", self.title, self.description)
    }
}

/// Root shell. Stateless composition over `AppState`: sidebar, panels,
/// status line, modals, toast, and the global progress overlay.
pub struct AppWidget<'a> {
    state: &'a AppState,
}

impl<'a> AppWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(self, frame: &mut Frame) {
        let size = frame.area();
        let ws = &self.state.workspace;

        let mut v_constraints = vec![Constraint::Min(6)];
        if ws.log_panel_open {
            v_constraints.push(Constraint::Length(8));
        }
        v_constraints.push(Constraint::Length(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(v_constraints)
            .split(size);

        self.render_content(frame, rows[0]);

        let mut row_idx = 1;
        if ws.log_panel_open {
            LogPanelWidget::new(&self.state.logs).render(frame, rows[row_idx]);
            row_idx += 1;
        }

        StatusBarWidget::new(&self.state.status_bar, &self.state.session)
            .render(frame, rows[row_idx]);

        if ws.settings_modal_open {
            SettingsModal::new(&self.state.config, &self.state.session).render(frame, size);
        }

        // Help stacks above settings when both are open.
        if ws.help_modal_open {
            HelpOverlay::render(frame, size);
        }

        if let Some(toast) = &self.state.toast {
            ToastWidget::new(toast).render(frame);
        }

        if self.state.is_busy() {
            let message = self
                .state
                .loading_message
                .as_deref()
                .unwrap_or("Signing in...");
            ProgressOverlay::render(frame, message, self.state.animation_frame);
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let ws = &self.state.workspace;

        let mut h_constraints: Vec<Constraint> = Vec::new();
        if ws.sidebar_open {
            let width = if ws.sidebar_collapsed { 16 } else { 34 };
            h_constraints.push(Constraint::Length(width));
        }
        if ws.preview_panel_open {
            h_constraints.push(Constraint::Min(20));
        }
        if ws.chat_panel_open {
            h_constraints.push(Constraint::Percentage(38));
        }

        if h_constraints.is_empty() {
            self.render_empty(frame, area);
            return;
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(h_constraints)
            .split(area);

        let mut col_idx = 0;

        if ws.sidebar_open {
            SidebarWidget::new(
                &self.state.repositories,
                self.state.repo_index,
                ws.selected_repository.as_deref(),
                ws.sidebar_collapsed,
                self.state.focus,
            )
            .render(frame, cols[col_idx]);
            col_idx += 1;
        }

        if ws.preview_panel_open {
            PreviewPanelWidget::new(
                &self.state.files,
                self.state.file_index,
                ws.selected_file.as_deref(),
                self.state.preview_content.as_deref(),
                self.state.preview_scroll,
                self.state.focus,
            )
            .render(frame, cols[col_idx]);
            col_idx += 1;
        }

        if ws.chat_panel_open {
            ChatPanelWidget::new(
                &self.state.issues,
                self.state.issue_index,
                self.state.selected_issue(),
                self.state.focus,
            )
            .render(frame, cols[col_idx]);
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                SHELL_META.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                SHELL_META.description,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "All panels are hidden. Press 0 to reset the layout.",
                Style::default().fg(Color::Yellow),
            )),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
