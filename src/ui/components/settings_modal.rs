use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::helpers::centered_rect;
use crate::app::{Config, SessionState};

pub struct SettingsModal<'a> {
    config: &'a Config,
    session: &'a SessionState,
}

impl<'a> SettingsModal<'a> {
    pub fn new(config: &'a Config, session: &'a SessionState) -> Self {
        Self { config, session }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(52, 12, area);

        frame.render_widget(Clear, popup_area);

        let label = |name: &'static str| {
            Span::styled(format!("  {:<14}", name), Style::default().fg(Color::Gray))
        };
        let value = |v: String| Span::styled(v, Style::default().fg(Color::White));

        let token_status = if self.config.github_token().is_some() {
            Span::styled("configured", Style::default().fg(Color::Green))
        } else {
            Span::styled("not set", Style::default().fg(Color::Red))
        };

        let account = self
            .session
            .display_name()
            .unwrap_or("signed out")
            .to_string();

        let config_path = Config::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unavailable".to_string());

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                label("Log level"),
                value(self.config.log_level.display_name().to_string()),
            ]),
            Line::from(vec![label("GitHub token"), token_status]),
            Line::from(vec![label("Account"), value(account)]),
            Line::from(vec![label("Config file"), value(config_path)]),
            Line::from(""),
            Line::from(Span::styled(
                "  Edit the config file and restart to apply changes.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(
                    " Settings ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, popup_area);
    }
}
