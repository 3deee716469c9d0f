//! Projection of the backend's action log onto display lines

use chrono::{DateTime, Local};

use crate::backend::protocol::{ActionLogEntry, Plan};

/// Visual class of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Success,
    Failure,
    /// Planning artifact rather than a performed action
    Advisory,
}

/// One rendered line of the action log
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub kind: ReportKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl ReportLine {
    fn new(kind: ReportKind, text: String) -> Self {
        Self {
            kind,
            text,
            at: Local::now(),
        }
    }
}

/// Build the action log display lines: one per performed action, plus a
/// trailing advisory line when the plan includes a supply order.
pub fn action_log_lines(plan: &Plan, actions_log: &[ActionLogEntry]) -> Vec<ReportLine> {
    let mut lines = Vec::with_capacity(actions_log.len() + 1);

    for entry in actions_log {
        lines.push(match entry {
            ActionLogEntry::Email {
                success: true,
                destination,
                ..
            } => ReportLine::new(
                ReportKind::Success,
                format!(
                    "Email sent to {}",
                    destination.as_deref().unwrap_or("(unknown recipient)")
                ),
            ),
            ActionLogEntry::Email {
                success: false,
                error,
                ..
            } => ReportLine::new(
                ReportKind::Failure,
                format!(
                    "Email failed: {}",
                    error.as_deref().unwrap_or("unknown error")
                ),
            ),
            ActionLogEntry::Tweet {
                success: true,
                tweet_id,
                ..
            } => ReportLine::new(
                ReportKind::Success,
                format!(
                    "Tweet posted (id {})",
                    tweet_id.as_deref().unwrap_or("unknown")
                ),
            ),
            ActionLogEntry::Tweet {
                success: false,
                error,
                ..
            } => ReportLine::new(
                ReportKind::Failure,
                format!(
                    "Tweet failed: {}",
                    error.as_deref().unwrap_or("unknown error")
                ),
            ),
            ActionLogEntry::Unknown => ReportLine::new(
                ReportKind::Advisory,
                "Unrecognized action in log".to_string(),
            ),
        });
    }

    let order = &plan.actions.supply_order;
    if order.order {
        lines.push(ReportLine::new(
            ReportKind::Advisory,
            format!(
                "Supply order logged (mock): {}x {}",
                order.quantity, order.item
            ),
        ));
    }

    lines
}
