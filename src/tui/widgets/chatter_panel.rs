//! Social chatter panel widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::state::ChatterState;

/// Panel listing the displayed chatter samples
pub struct ChatterPanel<'a> {
    chatter: &'a ChatterState,
}

impl<'a> ChatterPanel<'a> {
    pub fn new(chatter: &'a ChatterState) -> Self {
        Self { chatter }
    }
}

impl Widget for ChatterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Social chatter ({}) ", self.chatter.count));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = if self.chatter.shows_placeholder() {
            vec![Line::styled(
                "No recent chatter found.",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.chatter
                .items
                .iter()
                .map(|text| {
                    Line::from(vec![
                        Span::styled("• ", Style::default().fg(Color::Cyan)),
                        Span::raw(text.as_str()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
