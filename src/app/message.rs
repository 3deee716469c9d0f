//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;

use crate::backend::protocol::PlanResponse;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    RequestQuit,
    /// Quit immediately
    Quit,
    /// Confirm a pending quit request
    ConfirmQuit,
    /// Cancel a pending quit request
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form control
    FocusNext,
    /// Move focus to the previous form control
    FocusPrev,
    /// Select the previous city in the roster
    CityPrev,
    /// Select the next city in the roster
    CityNext,
    /// Toggle the festival flag
    ToggleFestival,
    /// Toggle the flood alert flag
    ToggleFloodAlert,
    /// Append a character to the email field
    EmailInput(char),
    /// Delete the last character of the email field
    EmailBackspace,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Dispatch the current selection to the backend
    Submit,
    /// The backend returned a plan
    PlanReceived(Box<PlanResponse>),
    /// The submission failed (transport, HTTP, or decode)
    PlanFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Result Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Expand/collapse the raw plan JSON panel
    ToggleRawJson,
}
