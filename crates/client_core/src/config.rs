use std::{collections::HashMap, fs};

use serde::Deserialize;
use shared::domain::BoardKind;
use tracing::warn;

pub const SETTINGS_FILE: &str = "boards.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    /// Origin, optionally with a path the API prefix is mounted under.
    pub server_url: String,
    pub api_prefix: String,
    pub default_board: BoardKind,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            api_prefix: "/api".into(),
            default_board: BoardKind::Tasks,
        }
    }
}

/// Defaults, then `boards.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("server_url") {
                    settings.server_url = v.clone();
                }
                if let Some(v) = file_cfg.get("api_prefix") {
                    settings.api_prefix = v.clone();
                }
                if let Some(v) = file_cfg.get("default_board") {
                    apply_board(&mut settings, v);
                }
            }
            Err(err) => warn!("ignoring unreadable {SETTINGS_FILE}: {err}"),
        }
    }

    if let Some(v) = env("BOARDS_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("BOARDS_API_PREFIX") {
        settings.api_prefix = v;
    }
    if let Some(v) = env("BOARDS_DEFAULT_BOARD") {
        apply_board(&mut settings, &v);
    }

    settings.server_url = normalize_server_url(&settings.server_url);
    settings.api_prefix = normalize_api_prefix(&settings.api_prefix);
    settings
}

fn apply_board(settings: &mut ClientSettings, raw: &str) {
    match raw.parse() {
        Ok(board) => settings.default_board = board,
        Err(err) => warn!("{err}; keeping '{}'", settings.default_board),
    }
}

pub fn normalize_server_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return ClientSettings::default().server_url;
    }
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

pub fn normalize_api_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
