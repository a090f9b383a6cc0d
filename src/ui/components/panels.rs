use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{Focus, LogEntry, LogLevel};
use crate::github::{IssueSummary, RepoFile};

/// Issue list plus the selected issue rendered as a conversation.
pub struct ChatPanelWidget<'a> {
    issues: &'a [IssueSummary],
    issue_index: usize,
    selected: Option<&'a IssueSummary>,
    focused: bool,
}

impl<'a> ChatPanelWidget<'a> {
    pub fn new(
        issues: &'a [IssueSummary],
        issue_index: usize,
        selected: Option<&'a IssueSummary>,
        focus: Focus,
    ) -> Self {
        Self {
            issues,
            issue_index,
            selected,
            focused: focus == Focus::Issues,
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if let Some(issue) = self.selected {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("#{} ", issue.number),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        issue.title.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("@{}", issue.user),
                    Style::default().fg(Color::Magenta),
                )),
                Line::from(""),
            ];
            match &issue.body {
                Some(body) => {
                    for line in body.lines() {
                        lines.push(Line::from(line.to_string()));
                    }
                }
                None => lines.push(Line::from(Span::styled(
                    "No description provided.",
                    Style::default().fg(Color::DarkGray),
                ))),
            }

            let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .title(format!(" Issue #{} ", issue.number))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            frame.render_widget(paragraph, area);
            return;
        }

        let block = Block::default()
            .title(" Issues ")
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.issues.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No open issues",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = self
            .issues
            .iter()
            .map(|issue| {
                let label_color = if issue.is_bug() {
                    Color::Red
                } else {
                    Color::Yellow
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("#{:<5}", issue.number),
                        Style::default().fg(label_color),
                    ),
                    Span::styled(issue.title.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 55))
                .add_modifier(Modifier::BOLD),
        );

        let mut list_state = ListState::default();
        list_state.select(Some(self.issue_index));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// In-app log ring, newest entries at the bottom.
pub struct LogPanelWidget<'a> {
    logs: &'a [LogEntry],
}

impl<'a> LogPanelWidget<'a> {
    pub fn new(logs: &'a [LogEntry]) -> Self {
        Self { logs }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let start = self.logs.len().saturating_sub(visible);

        let lines: Vec<Line> = self.logs[start..]
            .iter()
            .map(|entry| {
                let (color, tag) = match entry.level {
                    LogLevel::Info => (Color::Cyan, "INFO "),
                    LogLevel::Warn => (Color::Yellow, "WARN "),
                    LogLevel::Error => (Color::Red, "ERROR"),
                    LogLevel::Debug => (Color::DarkGray, "DEBUG"),
                };
                Line::from(vec![
                    Span::styled(
                        entry.timestamp.format("%H:%M:%S ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{} ", tag), Style::default().fg(color)),
                    Span::styled(entry.message.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Log ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

/// File list of the selected repository, or the text of the selected
/// file once it has been fetched.
pub struct PreviewPanelWidget<'a> {
    files: &'a [RepoFile],
    file_index: usize,
    selected_file: Option<&'a str>,
    content: Option<&'a str>,
    scroll: usize,
    focused: bool,
}

impl<'a> PreviewPanelWidget<'a> {
    pub fn new(
        files: &'a [RepoFile],
        file_index: usize,
        selected_file: Option<&'a str>,
        content: Option<&'a str>,
        scroll: usize,
        focus: Focus,
    ) -> Self {
        Self {
            files,
            file_index,
            selected_file,
            content,
            scroll,
            focused: focus == Focus::Files,
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if let (Some(path), Some(content)) = (self.selected_file, self.content) {
            let paragraph = Paragraph::new(content.to_string())
                .scroll((self.scroll as u16, 0))
                .block(
                    Block::default()
                        .title(format!(" {} ", path))
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(paragraph, area);
            return;
        }

        let block = Block::default()
            .title(" Files ")
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.files.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Select a repository to browse its files",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = self
            .files
            .iter()
            .map(|file| {
                let (icon, color) = if file.is_file() {
                    ("  ", Color::White)
                } else {
                    ("▸ ", Color::Blue)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(icon, Style::default().fg(color)),
                    Span::styled(file.name.clone(), Style::default().fg(color)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 55))
                .add_modifier(Modifier::BOLD),
        );

        let mut list_state = ListState::default();
        list_state.select(Some(self.file_index));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
