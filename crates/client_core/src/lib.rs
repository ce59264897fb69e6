use reqwest::Client;
use shared::{
    domain::{BoardStatus, ItemId},
    error::ErrorBody,
    protocol::StatusUpdate,
};
use tracing::{debug, info, warn};
use url::Url;

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;

pub use board::{Board, OrderBoard, StatusOf, TaskBoard};
pub use config::{load_settings, ClientSettings};
pub use controller::{drive, BoardController, BoardEvent, Effect, Outcome};
pub use error::BoardError;
pub use render::{ListModel, OrderCounts, RenderContext, Row, StatusMessage, Tone};

/// HTTP side of both boards: one collection read, one create and one status
/// write per board. No retries and no timeouts.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: Client,
    api_base: Url,
}

impl BoardClient {
    pub fn new(server_url: &str, api_prefix: &str) -> Result<Self, BoardError> {
        let mut api_base = Url::parse(server_url).map_err(|source| BoardError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        if api_base.cannot_be_a_base() {
            return Err(BoardError::OpaqueUrl(server_url.to_string()));
        }
        // The prefix goes under whatever path the server url already carries.
        let mount = api_base.path().trim_end_matches('/').to_string();
        let prefix = api_prefix.trim_matches('/');
        if prefix.is_empty() {
            api_base.set_path(&mount);
        } else {
            api_base.set_path(&format!("{mount}/{prefix}"));
        }

        Ok(Self {
            http: Client::new(),
            api_base,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, BoardError> {
        Self::new(&settings.server_url, &settings.api_prefix)
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BoardError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| BoardError::OpaqueUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Reads the whole collection. The body is decoded whatever the status
    /// code; a body without the collection field reads as an empty board.
    pub async fn fetch<B: Board>(&self) -> Result<Vec<B::Item>, BoardError> {
        let url = self.endpoint(&[B::COLLECTION])?;
        let body = self.http.get(url).send().await?.bytes().await?;
        let collection: B::Collection = serde_json::from_slice(&body)?;
        let items: Vec<B::Item> = collection.into();
        debug!(board = %B::KIND, count = items.len(), "fetched collection");
        Ok(items)
    }

    pub async fn create<B: Board>(&self, draft: &B::Draft) -> Result<(), BoardError> {
        let url = self.endpoint(&[B::COLLECTION])?;
        let response = self.http.post(url).json(draft).send().await?;
        let status = response.status();
        if status.is_success() {
            info!(board = %B::KIND, %status, "created item");
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = ErrorBody::message_from_slice(&body);
        warn!(board = %B::KIND, %status, error = ?message, "create rejected");
        Err(BoardError::Rejected { status, message })
    }

    pub async fn update_status<B: Board>(
        &self,
        id: &ItemId,
        status: &StatusOf<B>,
    ) -> Result<(), BoardError> {
        let url = self.endpoint(&[B::COLLECTION, id.as_str()])?;
        let response = self
            .http
            .patch(url)
            .json(&StatusUpdate {
                status: status.clone(),
            })
            .send()
            .await?;
        let code = response.status();
        if code.is_success() {
            info!(board = %B::KIND, item = %id, status = status.as_str(), "status updated");
            return Ok(());
        }

        warn!(board = %B::KIND, item = %id, status = %code, "status update rejected");
        Err(BoardError::Rejected {
            status: code,
            message: None,
        })
    }
}

#[cfg(test)]
#[path = "tests/mock_backend.rs"]
mod mock_backend;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
