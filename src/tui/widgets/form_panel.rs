//! Dispatch form widget
//!
//! City selector, two hazard toggles, the recipient email field, and the
//! run row. The focused control carries a marker and accent styling; the
//! run row doubles as the trigger label, swapping to the busy text while a
//! request is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::{Focus, FormState};

/// The dispatch form
pub struct FormPanel<'a> {
    form: &'a FormState,
    busy: bool,
}

impl<'a> FormPanel<'a> {
    pub fn new(form: &'a FormState, busy: bool) -> Self {
        Self { form, busy }
    }

    fn row_style(&self, focus: Focus) -> (Span<'static>, Style) {
        if self.form.focus == focus {
            (
                Span::styled("❯ ", Style::default().fg(Color::Cyan)),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Span::raw("  "), Style::default().fg(Color::Gray))
        }
    }

    fn checkbox(checked: bool) -> &'static str {
        if checked {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let (marker, style) = self.row_style(Focus::City);
        lines.push(Line::from(vec![
            marker,
            Span::styled("City      ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("‹ {} ›", self.form.city()), style),
        ]));
        lines.push(Line::raw(""));

        let (marker, style) = self.row_style(Focus::Festival);
        lines.push(Line::from(vec![
            marker,
            Span::styled(
                format!("{} ", Self::checkbox(self.form.is_festival)),
                style,
            ),
            Span::styled("Festival in progress", style),
        ]));

        let (marker, style) = self.row_style(Focus::FloodAlert);
        lines.push(Line::from(vec![
            marker,
            Span::styled(
                format!("{} ", Self::checkbox(self.form.is_flood_alert)),
                style,
            ),
            Span::styled("Flood alert issued", style),
        ]));
        lines.push(Line::raw(""));

        let (marker, style) = self.row_style(Focus::Email);
        let cursor = if self.form.focus == Focus::Email {
            "▏"
        } else {
            ""
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled("Email     ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}{}", self.form.email, cursor), style),
        ]));
        lines.push(Line::raw(""));

        lines.push(if self.busy {
            Line::styled(
                "  🛰 Sensing & thinking...",
                Style::default().fg(Color::Yellow),
            )
        } else {
            Line::styled(
                "  ▶ Run agent (Enter)",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        });

        lines
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Dispatch ");
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.build_lines()).render(inner, buf);
    }
}
