//! Application state (Model in TEA pattern)
//!
//! The single controller owns every piece of view state; the render pass
//! projects it onto the screen without mutating it.

use crate::backend::protocol::{CrisisData, PlanRequest, PlanResponse};
use crate::common::prelude::*;
use crate::config::Settings;
use crate::core::{AqiBand, CITIES};

use super::report::{self, ReportLine};

/// How many chatter samples are displayed at most
pub const MAX_CHATTER_ITEMS: usize = 3;

/// Trigger control state machine: Idle → Busy → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for a submission
    Idle,
    /// A submission is in flight; further submits are inert
    Busy,
    /// Shutting down
    Quitting,
}

/// Modal state of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    ConfirmQuit,
}

/// Which form control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    City,
    Festival,
    FloodAlert,
    Email,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::City => Focus::Festival,
            Focus::Festival => Focus::FloodAlert,
            Focus::FloodAlert => Focus::Email,
            Focus::Email => Focus::City,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::City => Focus::Email,
            Focus::Festival => Focus::City,
            Focus::FloodAlert => Focus::Festival,
            Focus::Email => Focus::FloodAlert,
        }
    }
}

/// Current values of the dispatch form controls
#[derive(Debug, Clone)]
pub struct FormState {
    pub city_index: usize,
    pub is_festival: bool,
    pub is_flood_alert: bool,
    pub email: String,
    pub focus: Focus,
}

impl FormState {
    fn from_settings(settings: &Settings) -> Self {
        let city_index = settings
            .form
            .default_city
            .as_deref()
            .and_then(|city| CITIES.iter().position(|c| *c == city))
            .unwrap_or(0);

        Self {
            city_index,
            is_festival: false,
            is_flood_alert: false,
            email: settings.form.default_email.clone(),
            focus: Focus::City,
        }
    }

    /// Currently selected city label
    pub fn city(&self) -> &'static str {
        CITIES[self.city_index]
    }

    pub fn select_prev_city(&mut self) {
        self.city_index = (self.city_index + CITIES.len() - 1) % CITIES.len();
    }

    pub fn select_next_city(&mut self) {
        self.city_index = (self.city_index + 1) % CITIES.len();
    }

    /// Build the request body from the current control values
    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            crisis_data: CrisisData {
                selected_city: self.city().to_string(),
                is_festival: self.is_festival,
                is_flood_alert: self.is_flood_alert,
            },
            recipient_email: self.email.clone(),
        }
    }
}

/// Status banner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Working,
    Complete,
    Error,
}

/// Contents of the analysis panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPanel {
    /// Nothing submitted yet
    Idle,
    /// Submission in flight
    Loading,
    /// The plan's analysis narrative
    Plan(String),
    /// Failure message from the last submission
    Failed(String),
}

/// Value shown on the AQI gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AqiValue {
    /// No submission has populated the gauge yet
    Unset,
    /// The backend reported no reading
    Missing,
    Measured(f64),
}

impl AqiValue {
    pub fn band(&self) -> AqiBand {
        match self {
            AqiValue::Unset | AqiValue::Missing => AqiBand::Unknown,
            AqiValue::Measured(v) => AqiBand::classify(Some(*v)),
        }
    }

    pub fn display(&self) -> String {
        match self {
            AqiValue::Unset => "---".to_string(),
            AqiValue::Missing => "N/A".to_string(),
            AqiValue::Measured(v) if v.is_nan() => "N/A".to_string(),
            AqiValue::Measured(v) => format!("{}", v),
        }
    }
}

/// Chatter panel state
#[derive(Debug, Clone)]
pub struct ChatterState {
    /// Server-supplied total, displayed independently of the sample length
    pub count: i64,
    /// Up to [`MAX_CHATTER_ITEMS`] displayed snippets
    pub items: Vec<String>,
    /// Whether a successful submission has populated the panel
    pub populated: bool,
}

impl ChatterState {
    fn empty() -> Self {
        Self {
            count: 0,
            items: Vec::new(),
            populated: false,
        }
    }

    /// The panel shows a placeholder line instead of items
    pub fn shows_placeholder(&self) -> bool {
        self.populated && self.items.is_empty()
    }
}

/// Collapsible raw plan JSON panel
#[derive(Debug, Clone, Default)]
pub struct RawJsonPanel {
    pub content: Option<String>,
    pub expanded: bool,
}

impl RawJsonPanel {
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn hide(&mut self) {
        self.content = None;
        self.expanded = false;
    }

    pub fn toggle(&mut self) {
        if self.content.is_some() {
            self.expanded = !self.expanded;
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: Phase,
    pub ui_mode: UiMode,
    pub form: FormState,
    pub status: StatusKind,
    pub analysis: AnalysisPanel,
    pub aqi: AqiValue,
    pub chatter: ChatterState,
    pub action_log: Vec<ReportLine>,
    pub raw_json: RawJsonPanel,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            phase: Phase::Idle,
            ui_mode: UiMode::Normal,
            form: FormState::from_settings(&settings),
            status: StatusKind::Idle,
            analysis: AnalysisPanel::Idle,
            aqi: AqiValue::Unset,
            chatter: ChatterState::empty(),
            action_log: Vec::new(),
            raw_json: RawJsonPanel::default(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Quitting
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Busy
    }

    /// Quit, or ask first when a request is still in flight
    pub fn request_quit(&mut self) {
        if self.is_busy() && self.settings.behavior.confirm_quit {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = Phase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = Phase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Enter the Busy phase and reset every result panel to its
    /// loading/placeholder state. Returns the request to dispatch.
    pub fn begin_submit(&mut self) -> PlanRequest {
        self.phase = Phase::Busy;
        self.status = StatusKind::Working;
        self.analysis = AnalysisPanel::Loading;
        self.aqi = AqiValue::Missing;
        self.chatter = ChatterState::empty();
        self.action_log.clear();
        self.raw_json.hide();

        self.form.to_request()
    }

    /// Render a successful plan response into the view state
    pub fn apply_plan(&mut self, response: PlanResponse) {
        info!(
            "Plan received: aqi={:?}, chatter={}, actions={}",
            response.live_aqi,
            response.chatter_count,
            response.actions_log.len()
        );

        self.status = StatusKind::Complete;
        self.analysis = AnalysisPanel::Plan(response.plan.analysis.clone());
        self.aqi = match response.live_aqi {
            Some(v) => AqiValue::Measured(v),
            None => AqiValue::Missing,
        };
        self.chatter = ChatterState {
            count: response.chatter_count,
            items: response
                .chatter_tweets
                .iter()
                .take(MAX_CHATTER_ITEMS)
                .map(|t| t.text.clone())
                .collect(),
            populated: true,
        };
        self.action_log = report::action_log_lines(&response.plan, &response.actions_log);
        self.raw_json.content = Some(
            serde_json::to_string_pretty(&response.plan)
                .unwrap_or_else(|e| format!("<plan not serializable: {}>", e)),
        );
        self.raw_json.expanded = false;

        self.phase = Phase::Idle;
    }

    /// Render a failed submission: panels stay reset, the gauge stays in the
    /// unknown band, only the status banner and analysis text change.
    pub fn apply_failure(&mut self, message: String) {
        warn!("Plan request failed: {}", message);

        self.status = StatusKind::Error;
        self.analysis = AnalysisPanel::Failed(message);
        self.aqi = AqiValue::Missing;
        self.raw_json.hide();

        self.phase = Phase::Idle;
    }
}
