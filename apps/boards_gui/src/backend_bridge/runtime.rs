//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::BoardClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

// Nothing has been requested yet, so this names the backend without claiming a connection.
fn backend_notice(client: &BoardClient) -> String {
    format!("Using backend at {}", client.api_base())
}

/// Starts the worker thread. Each command runs as its own task, so overlapping
/// requests race and whichever re-fetch lands last is what the UI shows.
pub fn launch(client: BoardClient, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info(backend_notice(&client)));

        while let Ok(cmd) = cmd_rx.recv() {
            let client = client.clone();
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move {
                let event = match cmd {
                    BackendCommand::Tasks(effect) => UiEvent::Tasks(effect.run(&client).await),
                    BackendCommand::Orders(effect) => UiEvent::Orders(effect.run(&client).await),
                };
                if ui_tx.try_send(event).is_err() {
                    tracing::warn!("ui event queue unavailable; dropping backend outcome");
                }
            });
        }
        tracing::debug!("ui command queue closed; backend worker exiting");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn startup_notice_names_backend_without_claiming_connection() {
        let client = BoardClient::new("http://kitchen.local:9000", "/api").expect("client");
        let notice = backend_notice(&client);
        assert_eq!(notice, "Using backend at http://kitchen.local:9000/api");
        assert!(!notice.contains("Connected"));
    }

    #[test]
    fn worker_reports_backend_before_any_command() {
        let client = BoardClient::new("http://127.0.0.1:9", "/api").expect("client");
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        let (ui_tx, ui_rx) = bounded(4);
        launch(client, cmd_rx, ui_tx);

        match ui_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("startup notice")
        {
            UiEvent::Info(message) => assert!(message.starts_with("Using backend at")),
            _ => panic!("expected an info notice"),
        }
        drop(cmd_tx);
    }
}
