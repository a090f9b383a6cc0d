use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::helpers::centered_rect;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(48, 20, area);

        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let help_text = vec![
            Line::from(Span::styled(
                "n9r - workspace shell",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            section("Navigation"),
            Line::from("  j/↓      Move down"),
            Line::from("  k/↑      Move up"),
            Line::from("  Tab      Switch pane"),
            Line::from("  Enter    Select"),
            Line::from("  Esc      Clear issue selection"),
            Line::from(""),
            section("Workspace"),
            Line::from("  b        Toggle sidebar"),
            Line::from("  B        Collapse sidebar"),
            Line::from("  c        Toggle issue panel"),
            Line::from("  l        Toggle log panel"),
            Line::from("  p        Toggle preview panel"),
            Line::from("  0        Reset workspace layout"),
            Line::from(""),
            section("Other"),
            Line::from("  s        Settings"),
            Line::from("  ?        Help"),
            Line::from("  x        Sign out"),
            Line::from("  q        Quit"),
        ];

        let paragraph = Paragraph::new(help_text).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, popup_area);
    }
}
