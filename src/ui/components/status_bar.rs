use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{SessionState, StatusBarState};

pub struct StatusBarWidget<'a> {
    status: &'a StatusBarState,
    session: &'a SessionState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status: &'a StatusBarState, session: &'a SessionState) -> Self {
        Self { status, session }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        match self.session.display_name() {
            Some(name) => {
                spans.push(Span::styled(
                    format!(" {} ", name),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            None => {
                spans.push(Span::styled(
                    " not signed in ",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        if !self.status.branch.is_empty() {
            spans.push(Span::styled("  ", Style::default().fg(Color::Magenta)));
            spans.push(Span::styled(
                self.status.branch.clone(),
                Style::default().fg(Color::Magenta),
            ));
        }

        if !self.status.file_type.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                self.status.file_type.clone(),
                Style::default().fg(Color::Cyan),
            ));
        }

        if let Some(pos) = self.status.cursor_position {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{}:{}", pos.line, pos.column),
                Style::default().fg(Color::White),
            ));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("✗ {}", self.status.errors),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("⚠ {}", self.status.warnings),
            Style::default().fg(Color::Yellow),
        ));

        let paragraph = Paragraph::new(Line::from(spans));
        frame.render_widget(paragraph, area);
    }
}
