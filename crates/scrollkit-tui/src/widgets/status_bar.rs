use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let position = format!("{:.0}/{:.0}", app.viewport.offset(), app.layout.height());

        let motion = if let Some(target) = app.viewport.pending_target() {
            format!("-> {:.0}", target)
        } else {
            "idle".to_string()
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | {} | easing: {}",
                position, motion, app.easing
            )
        };

        let help_hint = " q:quit j/k:select Enter:jump gg/G:ends e:easing ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::GREY2)
                    .bg(GruvboxMaterial::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
