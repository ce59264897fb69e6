mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{
    config::{normalize_api_prefix, normalize_server_url},
    load_settings, BoardClient,
};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::BoardKind;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{BoardsApp, PersistedBoardSettings, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(name = "boards_gui", about = "Task and order boards in a desktop window")]
struct Args {
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    api_prefix: Option<String>,
    /// Board to open on; otherwise the last one used.
    #[arg(long)]
    board: Option<BoardKind>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = normalize_server_url(&server_url);
    }
    if let Some(api_prefix) = args.api_prefix {
        settings.api_prefix = normalize_api_prefix(&api_prefix);
    }
    let client = BoardClient::from_settings(&settings)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?;
    tracing::info!(api = %client.api_base(), "starting boards window");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Service Boards")
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    let fallback_board = settings.default_board;
    eframe::run_native(
        "Service Boards",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedBoardSettings>(&text).ok())
            });
            let active = args
                .board
                .or(persisted.map(|settings| settings.active_board))
                .unwrap_or(fallback_board);
            Ok(Box::new(BoardsApp::new(cmd_tx, ui_rx, active)))
        }),
    )
    .map_err(|err| anyhow!("boards window failed: {err}"))
}
