//! Status bar widget
//!
//! Displays the submission state, the status message, and the backend URL.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::{AppState, StatusKind};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the state indicator with appropriate styling
    fn state_indicator(&self) -> Span<'static> {
        match self.state.status {
            StatusKind::Idle => Span::styled("○ Idle", Style::default().fg(Color::DarkGray)),
            StatusKind::Working => Span::styled(
                "↻ Working",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            StatusKind::Complete => Span::styled(
                "● Complete",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            StatusKind::Error => Span::styled(
                "✖ Error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        }
    }

    /// Status message for the current state
    fn status_message(&self) -> &'static str {
        match self.state.status {
            StatusKind::Idle => "Ready to dispatch",
            StatusKind::Working => "Acquiring live data from APIs...",
            StatusKind::Complete => "Plan execution complete!",
            StatusKind::Error => "Deployment or API failure",
        }
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut segments = Vec::new();

        segments.push(Span::raw(" "));
        segments.push(self.state_indicator());
        segments.push(separator.clone());
        segments.push(Span::styled(
            self.status_message(),
            Style::default().fg(Color::Gray),
        ));
        segments.push(separator);
        segments.push(Span::styled(
            self.state.settings.backend.base_url.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        segments.push(Span::raw(" "));

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as a separator line
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(self.build_segments());
        Paragraph::new(line).render(inner, buf);
    }
}
