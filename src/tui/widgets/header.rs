//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Header widget displaying app title and shortcuts
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);

        let content = Line::from(vec![
            Span::styled(" Crisis Ops Console 🛰", title),
            Span::raw("   "),
            Span::styled("[", dim),
            Span::styled("Enter", key),
            Span::styled("] Run  ", dim),
            Span::styled("[", dim),
            Span::styled("Tab", key),
            Span::styled("] Field  ", dim),
            Span::styled("[", dim),
            Span::styled("r", key),
            Span::styled("] Raw  ", dim),
            Span::styled("[", dim),
            Span::styled("q", key),
            Span::styled("] Quit", dim),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
