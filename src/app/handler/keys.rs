//! Key event handlers for different UI modes

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::message::Message;
use crate::app::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_quit(key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('y'), _) | (KeyCode::Char('Y'), _) | (KeyCode::Enter, _) => {
            Some(Message::ConfirmQuit)
        }
        (KeyCode::Char('n'), _) | (KeyCode::Char('N'), _) | (KeyCode::Esc, _) => {
            Some(Message::CancelQuit)
        }
        // Force quit with Ctrl+C even in dialog
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: KeyEvent) -> Option<Message> {
    // Bindings that hold regardless of focus
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Message::Quit)
        }
        KeyCode::Esc => return Some(Message::RequestQuit),
        KeyCode::Enter => return Some(Message::Submit),
        KeyCode::Tab | KeyCode::Down => return Some(Message::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Message::FocusPrev),
        _ => {}
    }

    // The email field swallows printable characters
    if state.form.focus == Focus::Email {
        return match key.code {
            KeyCode::Char(c) => Some(Message::EmailInput(c)),
            KeyCode::Backspace => Some(Message::EmailBackspace),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::RequestQuit),
        KeyCode::Char('r') => Some(Message::ToggleRawJson),

        KeyCode::Left | KeyCode::Char('h') if state.form.focus == Focus::City => {
            Some(Message::CityPrev)
        }
        KeyCode::Right | KeyCode::Char('l') if state.form.focus == Focus::City => {
            Some(Message::CityNext)
        }

        KeyCode::Char(' ') if state.form.focus == Focus::Festival => {
            Some(Message::ToggleFestival)
        }
        KeyCode::Char(' ') if state.form.focus == Focus::FloodAlert => {
            Some(Message::ToggleFloodAlert)
        }

        KeyCode::Char('j') => Some(Message::FocusNext),
        KeyCode::Char('k') => Some(Message::FocusPrev),

        _ => None,
    }
}
