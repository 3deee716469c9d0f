//! Collapsible raw plan JSON panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::RawJsonPanel;

/// Raw plan JSON, hidden until a plan arrives, collapsed to a single title
/// line until expanded
pub struct RawJsonView<'a> {
    panel: &'a RawJsonPanel,
}

impl<'a> RawJsonView<'a> {
    pub fn new(panel: &'a RawJsonPanel) -> Self {
        Self { panel }
    }
}

impl Widget for RawJsonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(content) = &self.panel.content else {
            return;
        };

        if !self.panel.expanded {
            Paragraph::new(Line::styled(
                "▸ Raw plan JSON (press r to expand)",
                Style::default().fg(Color::DarkGray),
            ))
            .render(area, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Raw plan JSON (r to collapse) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = content.lines().map(Line::raw).collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
