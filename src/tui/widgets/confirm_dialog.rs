//! Quit confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Centered modal asking whether to quit with a request in flight
pub struct ConfirmQuitDialog;

impl ConfirmQuitDialog {
    pub fn new() -> Self {
        Self
    }

    fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Default for ConfirmQuitDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ConfirmQuitDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = Self::centered_rect(area, 46, 5);
        Clear.render(dialog, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Quit? ");
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let lines = vec![
            Line::raw("A request is still in flight."),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" quit anyway   "),
                Span::styled("n", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" keep waiting"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
