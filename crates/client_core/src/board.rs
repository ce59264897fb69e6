//! Per-board wiring: wire types, endpoint, row layout and user-facing copy.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{BoardItem, BoardKind, BoardStatus, Order, OrderStatus, Task},
    protocol::{OrderDraft, OrderList, TaskDraft, TaskList, ORDERS_COLLECTION, TASKS_COLLECTION},
};

use crate::render::{ItemRow, OrderCounts, StatusPill};

pub type StatusOf<B> = <<B as Board>::Item as BoardItem>::Status;

pub trait Board: fmt::Debug + Clone + Send + Sync + 'static {
    type Item: BoardItem + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static;
    type Collection: DeserializeOwned + Into<Vec<Self::Item>>;
    type Draft: Serialize + Clone + fmt::Debug + Send + Sync + 'static;

    const KIND: BoardKind;
    /// Path segment of the collection endpoint under the API prefix.
    const COLLECTION: &'static str;
    const PLACEHOLDER: &'static str;
    const PILL_TOOLTIP: &'static str;
    const CREATED_MESSAGE: &'static str;
    const CREATE_FAILED_MESSAGE: &'static str;
    const UPDATE_FAILED_MESSAGE: &'static str;

    fn row(item: &Self::Item) -> ItemRow;

    /// Summary counts shown above the list, for boards that have them.
    fn summarize(_items: &[Self::Item]) -> Option<OrderCounts> {
        None
    }
}

fn pill<B: Board>(item: &B::Item) -> StatusPill {
    let status = item.status();
    StatusPill {
        item_id: item.id().clone(),
        label: status.label().to_string(),
        style_key: format!("status-{}", status.as_str()),
        tooltip: B::PILL_TOOLTIP,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskBoard;

impl Board for TaskBoard {
    type Item = Task;
    type Collection = TaskList;
    type Draft = TaskDraft;

    const KIND: BoardKind = BoardKind::Tasks;
    const COLLECTION: &'static str = TASKS_COLLECTION;
    const PLACEHOLDER: &'static str = "No tasks yet. Add one above to get started.";
    const PILL_TOOLTIP: &'static str = "Toggle status";
    const CREATED_MESSAGE: &'static str = "Task added! Click a status pill to toggle it.";
    const CREATE_FAILED_MESSAGE: &'static str = "Unable to create task.";
    const UPDATE_FAILED_MESSAGE: &'static str = "Unable to update task status.";

    fn row(task: &Task) -> ItemRow {
        ItemRow {
            title: task.title.clone(),
            meta: format!("Task #{}", task.id),
            detail: None,
            pill: pill::<Self>(task),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderBoard;

impl Board for OrderBoard {
    type Item = Order;
    type Collection = OrderList;
    type Draft = OrderDraft;

    const KIND: BoardKind = BoardKind::Orders;
    const COLLECTION: &'static str = ORDERS_COLLECTION;
    const PLACEHOLDER: &'static str = "No orders yet. Add a walk-in order to get started.";
    const PILL_TOOLTIP: &'static str = "Cycle status";
    const CREATED_MESSAGE: &'static str = "Order added! Tap a status pill to update.";
    const CREATE_FAILED_MESSAGE: &'static str = "Unable to create order.";
    const UPDATE_FAILED_MESSAGE: &'static str = "Unable to update order status.";

    fn row(order: &Order) -> ItemRow {
        ItemRow {
            title: format!("Table {}", order.table_number),
            meta: format!("Order #{} \u{2022} {}", order.id, order.placed_at),
            detail: Some(order.items.clone()),
            pill: pill::<Self>(order),
        }
    }

    fn summarize(orders: &[Order]) -> Option<OrderCounts> {
        Some(OrderCounts::tally(orders.iter().map(|order| &order.status)))
    }
}

impl OrderCounts {
    /// Single pass over the statuses; completed and unknown statuses are not shown.
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a OrderStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                match status {
                    OrderStatus::New => counts.new += 1,
                    OrderStatus::InProgress => counts.in_progress += 1,
                    OrderStatus::Ready => counts.ready += 1,
                    OrderStatus::Completed | OrderStatus::Other(_) => {}
                }
                counts
            })
    }
}
