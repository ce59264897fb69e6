//! Backend commands queued from UI to backend worker.

use client_core::{Effect, OrderBoard, TaskBoard};

pub enum BackendCommand {
    Tasks(Effect<TaskBoard>),
    Orders(Effect<OrderBoard>),
}

impl BackendCommand {
    pub fn board(&self) -> &'static str {
        match self {
            Self::Tasks(_) => "tasks",
            Self::Orders(_) => "orders",
        }
    }

    pub fn effect_name(&self) -> &'static str {
        match self {
            Self::Tasks(effect) => effect.name(),
            Self::Orders(effect) => effect.name(),
        }
    }
}

impl From<Effect<TaskBoard>> for BackendCommand {
    fn from(effect: Effect<TaskBoard>) -> Self {
        Self::Tasks(effect)
    }
}

impl From<Effect<OrderBoard>> for BackendCommand {
    fn from(effect: Effect<OrderBoard>) -> Self {
        Self::Orders(effect)
    }
}
