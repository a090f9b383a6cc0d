use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{Toast, ToastLevel};

/// Transient notification, anchored to the top-right corner.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    pub fn render(self, frame: &mut Frame) {
        let area = toast_area(frame.area(), self.toast.message.len());
        frame.render_widget(Clear, area);

        let (color, icon, title) = match self.toast.level {
            ToastLevel::Success => (Color::Green, "✓", " ok "),
            ToastLevel::Info => (Color::Cyan, "ℹ", " info "),
            ToastLevel::Warning => (Color::Yellow, "⚠", " warning "),
            ToastLevel::Error => (Color::Red, "✗", " error "),
        };

        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", icon),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(&self.toast.message, Style::default().fg(color)),
        ]))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(paragraph, area);
    }
}

fn toast_area(frame_area: Rect, message_len: usize) -> Rect {
    let height = 3u16;
    let max_width = frame_area.width.saturating_sub(4);
    let width = (message_len as u16 + 6).clamp(20.min(max_width), max_width);

    Rect {
        x: frame_area.width.saturating_sub(width + 1),
        y: frame_area.y + 1,
        width,
        height: height.min(frame_area.height),
    }
}
