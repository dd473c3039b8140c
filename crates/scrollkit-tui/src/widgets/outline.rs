use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct OutlineWidget;

impl OutlineWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" Outline ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::ACCENT))
            .style(Style::default().bg(GruvboxMaterial::BG0));

        let items: Vec<ListItem> = app
            .document
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let is_cursor = i == app.selected_section;

                let style = if is_cursor {
                    Style::default()
                        .fg(GruvboxMaterial::FG0)
                        .bg(GruvboxMaterial::SELECTION)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(GruvboxMaterial::FG1)
                };

                let marker = if is_cursor { "> " } else { "  " };

                let line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(GruvboxMaterial::GREEN)),
                    Span::styled(section.heading.clone(), style),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(GruvboxMaterial::SELECTION)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        state.select(Some(app.selected_section));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
