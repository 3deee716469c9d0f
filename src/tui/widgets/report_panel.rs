//! Response plan panel widget
//!
//! Shows the plan's analysis narrative followed by the action log.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::report::{ReportKind, ReportLine};
use crate::app::state::AnalysisPanel;

/// Panel combining the analysis text and the action log
pub struct ReportPanel<'a> {
    analysis: &'a AnalysisPanel,
    action_log: &'a [ReportLine],
}

impl<'a> ReportPanel<'a> {
    pub fn new(analysis: &'a AnalysisPanel, action_log: &'a [ReportLine]) -> Self {
        Self {
            analysis,
            action_log,
        }
    }

    fn analysis_line(&self) -> Line<'static> {
        match self.analysis {
            AnalysisPanel::Idle => Line::styled(
                "Awaiting dispatch.",
                Style::default().fg(Color::DarkGray),
            ),
            AnalysisPanel::Loading => Line::styled(
                "Analyzing data and formulating plan...",
                Style::default().fg(Color::Yellow),
            ),
            AnalysisPanel::Plan(text) => Line::styled(
                format!("\"{}\"", text),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::ITALIC),
            ),
            AnalysisPanel::Failed(message) => Line::styled(
                format!("Failed to run agent: {}", message),
                Style::default().fg(Color::Red),
            ),
        }
    }

    fn log_line(entry: &ReportLine) -> Line<'static> {
        let (marker, color) = match entry.kind {
            ReportKind::Success => ("✔ ", Color::Green),
            ReportKind::Failure => ("✖ ", Color::Red),
            ReportKind::Advisory => ("▲ ", Color::Yellow),
        };

        Line::from(vec![
            Span::styled(
                format!("{} ", entry.at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(marker, Style::default().fg(color)),
            Span::styled(entry.text.clone(), Style::default().fg(color)),
        ])
    }
}

impl Widget for ReportPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Response plan ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![self.analysis_line()];
        if !self.action_log.is_empty() {
            lines.push(Line::raw(""));
            lines.extend(self.action_log.iter().map(Self::log_line));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn line(kind: ReportKind, text: &str) -> ReportLine {
        ReportLine {
            kind,
            text: text.to_string(),
            at: Local::now(),
        }
    }

    fn render_to_string(analysis: &AnalysisPanel, log: &[ReportLine]) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ReportPanel::new(analysis, log), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_analysis_and_log_lines() {
        let analysis = AnalysisPanel::Plan("Stay indoors.".to_string());
        let log = vec![
            line(ReportKind::Success, "Email sent to ops@example.com"),
            line(ReportKind::Failure, "Tweet failed: rate limited"),
            line(ReportKind::Advisory, "Supply order logged (mock): 500x N95 masks"),
        ];

        let content = render_to_string(&analysis, &log);
        assert!(content.contains("Stay indoors."));
        assert!(content.contains("Email sent to ops@example.com"));
        assert!(content.contains("Tweet failed: rate limited"));
        assert!(content.contains("Supply order logged"));
    }

    #[test]
    fn test_renders_failure_message() {
        let analysis = AnalysisPanel::Failed("backend down".to_string());
        let content = render_to_string(&analysis, &[]);
        assert!(content.contains("backend down"));
    }

    #[test]
    fn test_renders_loading_state() {
        let analysis = AnalysisPanel::Loading;
        let content = render_to_string(&analysis, &[]);
        assert!(content.contains("formulating plan"));
    }
}
