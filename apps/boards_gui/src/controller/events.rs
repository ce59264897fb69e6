//! Events delivered from the backend worker to the UI thread.

use client_core::{OrderBoard, Outcome, TaskBoard};

pub enum UiEvent {
    Info(String),
    WorkerFailed(String),
    Tasks(Outcome<TaskBoard>),
    Orders(Outcome<OrderBoard>),
}
