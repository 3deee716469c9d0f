//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the dispatch form column
const FORM_WIDTH: u16 = 36;

/// Height of the sensors row (AQI gauge + chatter)
const SENSORS_HEIGHT: u16 = 8;

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub gauge: Rect,
    pub chatter: Rect,
    pub report: Rect,
    pub raw_json: Rect,
    pub status: Rect,
}

/// Create the main screen layout.
///
/// The raw JSON panel collapses to a single title line until expanded, and
/// takes no space at all while unpopulated.
pub fn create(area: Rect, raw_visible: bool, raw_expanded: bool) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Body
        Constraint::Length(2), // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(FORM_WIDTH), // Dispatch form
        Constraint::Min(40),            // Results
    ])
    .split(rows[1]);

    let raw_constraint = match (raw_visible, raw_expanded) {
        (false, _) => Constraint::Length(0),
        (true, false) => Constraint::Length(1),
        (true, true) => Constraint::Percentage(40),
    };

    let results = Layout::vertical([
        Constraint::Length(SENSORS_HEIGHT), // Gauge + chatter
        Constraint::Min(5),                 // Response plan
        raw_constraint,                     // Raw plan JSON
    ])
    .split(columns[1]);

    let sensors = Layout::horizontal([
        Constraint::Length(24), // AQI gauge
        Constraint::Min(20),    // Chatter
    ])
    .split(results[0]);

    ScreenAreas {
        header: rows[0],
        form: columns[0],
        gauge: sensors[0],
        chatter: sensors[1],
        report: results[1],
        raw_json: results[2],
        status: rows[2],
    }
}
