//! Main update function - handles state transitions (TEA pattern)

use crate::app::message::Message;
use crate::app::state::{AppState, Phase};
use crate::common::prelude::*;

use super::{keys::handle_key, Task, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = Phase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.form.focus = state.form.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.form.focus = state.form.focus.prev();
            UpdateResult::none()
        }

        Message::CityPrev => {
            state.form.select_prev_city();
            UpdateResult::none()
        }

        Message::CityNext => {
            state.form.select_next_city();
            UpdateResult::none()
        }

        Message::ToggleFestival => {
            state.form.is_festival = !state.form.is_festival;
            UpdateResult::none()
        }

        Message::ToggleFloodAlert => {
            state.form.is_flood_alert = !state.form.is_flood_alert;
            UpdateResult::none()
        }

        Message::EmailInput(c) => {
            state.form.email.push(c);
            UpdateResult::none()
        }

        Message::EmailBackspace => {
            state.form.email.pop();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => {
            // Re-entrancy guard: the trigger is inert while a request
            // is in flight.
            if state.is_busy() {
                debug!("Submit ignored: a request is already in flight");
                return UpdateResult::none();
            }

            let request = state.begin_submit();
            info!(
                "Dispatching plan request for {} (festival={}, flood={})",
                request.crisis_data.selected_city,
                request.crisis_data.is_festival,
                request.crisis_data.is_flood_alert
            );
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchPlan { request }))
        }

        Message::PlanReceived(response) => {
            state.apply_plan(*response);
            UpdateResult::none()
        }

        Message::PlanFailed { message } => {
            state.apply_failure(message);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Result Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleRawJson => {
            state.raw_json.toggle();
            UpdateResult::none()
        }
    }
}
