use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::helpers::centered_rect;

/// Braille spinner frames
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Global progress overlay shown above everything while a fetch is in
/// flight.
pub struct ProgressOverlay;

impl ProgressOverlay {
    pub fn render(frame: &mut Frame, message: &str, animation_frame: usize) {
        let area = frame.area();

        let popup_width = 40;
        let popup_height = 5;

        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let spinner = SPINNER_FRAMES[animation_frame % SPINNER_FRAMES.len()];

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {}  ", spinner),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message, Style::default().fg(Color::White)),
            ]),
            Line::from(""),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Working ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Rgb(30, 30, 40))),
        );

        frame.render_widget(paragraph, popup_area);
    }
}
