//! AQI gauge widget
//!
//! A bordered dial showing the live reading, tinted by severity band. The
//! border carries the band color and the title line carries a dimmer glow
//! shade of the same hue.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AqiValue;
use crate::core::AqiBand;

/// Display color and glow shade for a severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandStyle {
    pub color: Color,
    pub glow: Color,
}

/// Color/glow pair for each band
pub fn band_style(band: AqiBand) -> BandStyle {
    match band {
        AqiBand::Unknown => BandStyle {
            color: Color::Rgb(136, 136, 136),
            glow: Color::Rgb(68, 68, 68),
        },
        AqiBand::Good => BandStyle {
            color: Color::Rgb(0, 204, 0),
            glow: Color::Rgb(0, 102, 0),
        },
        AqiBand::Moderate => BandStyle {
            color: Color::Rgb(0, 224, 0),
            glow: Color::Rgb(0, 112, 0),
        },
        AqiBand::UnhealthySensitive => BandStyle {
            color: Color::Rgb(255, 213, 0),
            glow: Color::Rgb(128, 106, 0),
        },
        AqiBand::Unhealthy => BandStyle {
            color: Color::Rgb(255, 155, 0),
            glow: Color::Rgb(128, 78, 0),
        },
        AqiBand::VeryUnhealthy => BandStyle {
            color: Color::Rgb(255, 77, 0),
            glow: Color::Rgb(128, 38, 0),
        },
        AqiBand::Hazardous => BandStyle {
            color: Color::Rgb(217, 0, 34),
            glow: Color::Rgb(108, 0, 17),
        },
    }
}

/// Gauge widget showing the live AQI reading
pub struct AqiGauge<'a> {
    value: &'a AqiValue,
}

impl<'a> AqiGauge<'a> {
    pub fn new(value: &'a AqiValue) -> Self {
        Self { value }
    }
}

impl Widget for AqiGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let band = self.value.band();
        let style = band_style(band);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style.color))
            .title(Line::styled(" Live AQI ", Style::default().fg(style.glow)));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::raw(""),
            Line::styled(
                self.value.display(),
                Style::default()
                    .fg(style.color)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(band.label(), Style::default().fg(style.glow)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(value: &AqiValue) -> String {
        let backend = TestBackend::new(24, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(AqiGauge::new(value), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_band_styles_are_distinct() {
        let bands = [
            AqiBand::Unknown,
            AqiBand::Good,
            AqiBand::Moderate,
            AqiBand::UnhealthySensitive,
            AqiBand::Unhealthy,
            AqiBand::VeryUnhealthy,
            AqiBand::Hazardous,
        ];

        for (i, a) in bands.iter().enumerate() {
            for b in bands.iter().skip(i + 1) {
                assert_ne!(band_style(*a).color, band_style(*b).color);
            }
        }
    }

    #[test]
    fn test_renders_placeholder_before_any_reading() {
        let content = render_to_string(&AqiValue::Unset);
        assert!(content.contains("---"));
        assert!(content.contains("No data"));
    }

    #[test]
    fn test_renders_measured_value_and_band_label() {
        let content = render_to_string(&AqiValue::Measured(175.0));
        assert!(content.contains("175"));
        assert!(content.contains("Unhealthy"));
    }

    #[test]
    fn test_renders_na_for_missing_reading() {
        let content = render_to_string(&AqiValue::Missing);
        assert!(content.contains("N/A"));
    }
}
