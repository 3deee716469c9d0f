//! Main TUI runner - entry point and event loop
//!
//! The loop drains the message channel (fetch results, signals), renders a
//! frame, then polls the terminal. Exactly one fetch task runs per
//! submission; it reports back through the same channel.

use tokio::sync::mpsc;

use crate::app::handler::{self, Task, UpdateAction};
use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::signals;
use crate::backend::PlanClient;
use crate::common::prelude::*;
use crate::config::Settings;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let client = PlanClient::new(&settings.backend.base_url)?;
    info!("Plan client ready: {}", client.base_url());

    let mut term = ratatui::init();
    let mut state = AppState::new(settings);

    // Unified message channel (fetch results, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &client);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    client: &PlanClient,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (fetch results, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, client);
        }
    }

    Ok(())
}

/// Run a message (and any follow-ups) through the update function,
/// dispatching resulting actions
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &PlanClient,
) {
    let mut current = Some(message);

    while let Some(msg) = current.take() {
        let result = handler::update(state, msg);
        current = result.message;

        if let Some(action) = result.action {
            dispatch_action(action, msg_tx, client);
        }
    }
}

/// Perform an action requested by the update function
fn dispatch_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, client: &PlanClient) {
    match action {
        UpdateAction::SpawnTask(Task::FetchPlan { request }) => {
            let client = client.clone();
            let tx = msg_tx.clone();

            tokio::spawn(async move {
                let message = match client.fetch_plan(&request).await {
                    Ok(response) => Message::PlanReceived(Box::new(response)),
                    Err(e) => Message::PlanFailed {
                        message: e.user_message(),
                    },
                };

                if tx.send(message).await.is_err() {
                    warn!("Message channel closed before plan result delivery");
                }
            });
        }
    }
}
