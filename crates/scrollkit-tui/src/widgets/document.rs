use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::document::Row;
use crate::theme::GruvboxMaterial;

pub struct DocumentWidget;

impl DocumentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(format!(" {} ", app.document.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::GREY0))
            .style(Style::default().bg(GruvboxMaterial::BG0));

        let lines: Vec<Line> = app
            .layout
            .rows
            .iter()
            .map(|row| match row {
                Row::Blank => Line::default(),
                Row::Title(text) => Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(GruvboxMaterial::YELLOW)
                        .add_modifier(Modifier::BOLD),
                )),
                Row::Heading(index, text) => {
                    let style = if *index == app.selected_section {
                        Style::default()
                            .fg(GruvboxMaterial::ACCENT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(GruvboxMaterial::BLUE)
                            .add_modifier(Modifier::BOLD)
                    };
                    Line::from(Span::styled(text.clone(), style))
                }
                Row::Text(text) => Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(GruvboxMaterial::FG0),
                )),
            })
            .collect();

        // Fractional offsets round to whole cells only here, at render
        // time; the animation keeps its sub-row precision.
        let scroll = app.viewport.offset().round().max(0.0) as u16;

        let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
