//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use crate::app::state::{AppState, UiMode};

use super::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(
        area,
        state.raw_json.is_visible(),
        state.raw_json.expanded,
    );

    frame.render_widget(widgets::Header::new(), areas.header);

    frame.render_widget(
        widgets::FormPanel::new(&state.form, state.is_busy()),
        areas.form,
    );

    frame.render_widget(widgets::AqiGauge::new(&state.aqi), areas.gauge);
    frame.render_widget(widgets::ChatterPanel::new(&state.chatter), areas.chatter);
    frame.render_widget(
        widgets::ReportPanel::new(&state.analysis, &state.action_log),
        areas.report,
    );
    frame.render_widget(widgets::RawJsonView::new(&state.raw_json), areas.raw_json);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modal overlay
    if state.ui_mode == UiMode::ConfirmQuit {
        frame.render_widget(widgets::ConfirmQuitDialog::new(), area);
    }
}
