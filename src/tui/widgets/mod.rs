//! Reusable UI components

pub mod aqi_gauge;
pub mod chatter_panel;
pub mod confirm_dialog;
pub mod form_panel;
pub mod header;
pub mod raw_json;
pub mod report_panel;
pub mod status_bar;

pub use aqi_gauge::AqiGauge;
pub use chatter_panel::ChatterPanel;
pub use confirm_dialog::ConfirmQuitDialog;
pub use form_panel::FormPanel;
pub use header::Header;
pub use raw_json::RawJsonView;
pub use report_panel::ReportPanel;
pub use status_bar::StatusBar;
