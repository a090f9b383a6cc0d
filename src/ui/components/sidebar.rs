use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::github::RepoSummary;

pub struct SidebarWidget<'a> {
    repositories: &'a [RepoSummary],
    selected_index: usize,
    selected_repository: Option<&'a str>,
    collapsed: bool,
    focused: bool,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(
        repositories: &'a [RepoSummary],
        selected_index: usize,
        selected_repository: Option<&'a str>,
        collapsed: bool,
        focus: Focus,
    ) -> Self {
        Self {
            repositories,
            selected_index,
            selected_repository,
            collapsed,
            focused: focus == Focus::Repositories,
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" Repositories ")
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.collapsed {
            // Collapsed mode shows only the active selection marker.
            let label = self
                .selected_repository
                .map(|r| r.split('/').next_back().unwrap_or(r).to_string())
                .unwrap_or_else(|| "-".to_string());
            let paragraph = Paragraph::new(Line::from(Span::styled(
                label,
                Style::default().fg(Color::White),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        if self.repositories.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No repositories loaded",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = self
            .repositories
            .iter()
            .map(|repo| {
                let active = self.selected_repository == Some(repo.full_name.as_str());
                let marker = if active { "● " } else { "  " };
                let style = if active {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(repo.full_name.clone(), style),
                    Span::styled(
                        format!(" ({})", repo.open_issues),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 55))
                .add_modifier(Modifier::BOLD),
        );

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected_index));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
