//! Event dispatch for one board.
//!
//! `update` and `apply` are synchronous: they decide what the host should ask
//! the backend next ([`Effect`]) and repaint through a [`RenderContext`]. Hosts
//! run effects wherever their network lives and feed the [`Outcome`] back.
//! Every successful write is followed by a full re-fetch; nothing is patched
//! locally.

use shared::domain::{BoardItem, BoardStatus, ItemId};
use tracing::{debug, warn};

use crate::{
    board::{Board, StatusOf},
    render::{RenderContext, Tone},
    BoardClient, BoardError,
};

#[derive(Debug, Clone)]
pub enum BoardEvent<B: Board> {
    Refresh,
    Create(B::Draft),
    CycleStatus(ItemId),
}

#[derive(Debug, Clone)]
pub enum Effect<B: Board> {
    Fetch,
    Create(B::Draft),
    UpdateStatus { id: ItemId, status: StatusOf<B> },
}

#[derive(Debug, Clone)]
pub enum Outcome<B: Board> {
    Loaded(Vec<B::Item>),
    Created,
    CreateRejected(Option<String>),
    StatusUpdated,
    UpdateRejected,
    /// The request never produced a usable answer; nothing is shown.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct BoardController<B: Board> {
    /// Items as last rendered, so a pill click can be resolved to a status.
    rendered: Vec<B::Item>,
}

impl<B: Board> Default for BoardController<B> {
    fn default() -> Self {
        Self {
            rendered: Vec::new(),
        }
    }
}

impl<B: Board> BoardController<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &[B::Item] {
        &self.rendered
    }

    /// Whether a pill for `id` is on screen, i.e. whether cycling it can do anything.
    pub fn is_rendered(&self, id: &ItemId) -> bool {
        self.rendered.iter().any(|item| item.id() == id)
    }

    pub fn update(&self, event: BoardEvent<B>) -> Option<Effect<B>> {
        match event {
            BoardEvent::Refresh => Some(Effect::Fetch),
            BoardEvent::Create(draft) => Some(Effect::Create(draft)),
            BoardEvent::CycleStatus(id) => {
                let Some(item) = self.rendered.iter().find(|item| item.id() == &id) else {
                    warn!(board = %B::KIND, item = %id, "status pill for an item that is no longer rendered");
                    return None;
                };
                let status = item.status().next();
                debug!(board = %B::KIND, item = %id, from = item.status().as_str(), to = status.as_str(), "cycling status");
                Some(Effect::UpdateStatus { id, status })
            }
        }
    }

    pub fn apply(&mut self, outcome: Outcome<B>, ctx: &mut RenderContext<'_>) -> Option<Effect<B>> {
        match outcome {
            Outcome::Loaded(items) => {
                ctx.render::<B>(&items);
                self.rendered = items;
                None
            }
            Outcome::Created => {
                ctx.reset_form();
                ctx.report(B::CREATED_MESSAGE, Tone::Info);
                Some(Effect::Fetch)
            }
            Outcome::CreateRejected(message) => {
                ctx.report(
                    message.as_deref().unwrap_or(B::CREATE_FAILED_MESSAGE),
                    Tone::Error,
                );
                None
            }
            Outcome::StatusUpdated => Some(Effect::Fetch),
            Outcome::UpdateRejected => {
                ctx.report(B::UPDATE_FAILED_MESSAGE, Tone::Error);
                None
            }
            Outcome::Failed(reason) => {
                warn!(board = %B::KIND, %reason, "request failed; keeping current view");
                None
            }
        }
    }
}

impl<B: Board> Effect<B> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create(_) => "create",
            Self::UpdateStatus { .. } => "update_status",
        }
    }

    pub async fn run(self, client: &BoardClient) -> Outcome<B> {
        match self {
            Self::Fetch => match client.fetch::<B>().await {
                Ok(items) => Outcome::Loaded(items),
                Err(err) => Outcome::Failed(err.to_string()),
            },
            Self::Create(draft) => match client.create::<B>(&draft).await {
                Ok(()) => Outcome::Created,
                Err(BoardError::Rejected { message, .. }) => Outcome::CreateRejected(message),
                Err(err) => Outcome::Failed(err.to_string()),
            },
            Self::UpdateStatus { id, status } => {
                match client.update_status::<B>(&id, &status).await {
                    Ok(()) => Outcome::StatusUpdated,
                    Err(err) if err.is_rejection() => Outcome::UpdateRejected,
                    Err(err) => Outcome::Failed(err.to_string()),
                }
            }
        }
    }
}

/// Runs one event to completion: each effect is awaited in turn and its
/// outcome applied until the controller has nothing left to ask for.
pub async fn drive<B: Board>(
    controller: &mut BoardController<B>,
    client: &BoardClient,
    event: BoardEvent<B>,
    ctx: &mut RenderContext<'_>,
) {
    let mut next = controller.update(event);
    while let Some(effect) = next {
        let outcome = effect.run(client).await;
        next = controller.apply(outcome, ctx);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
