use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Order, Task};

pub const TASKS_COLLECTION: &str = "tasks";
pub const ORDERS_COLLECTION: &str = "orders";

// A null collection reads the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `GET /api/tasks` body. A missing or null array reads as an empty board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}

/// `GET /api/orders` body. A missing or null array reads as an empty board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<Order>,
}

impl From<OrderList> for Vec<Order> {
    fn from(list: OrderList) -> Self {
        list.orders
    }
}

/// `POST /api/tasks` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
}

/// `POST /api/orders` body, carried exactly as typed into the form. The
/// backend owns parsing and validation of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub table_number: String,
    pub items: String,
    pub placed_at: String,
}

/// `PATCH /api/{collection}/{id}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_or_missing_collections_read_as_empty() {
        let tasks: TaskList = serde_json::from_str(r#"{"tasks":null}"#).expect("tasks");
        assert!(tasks.tasks.is_empty());

        let orders: OrderList = serde_json::from_str("{}").expect("orders");
        assert!(orders.orders.is_empty());
    }

    #[test]
    fn order_rows_keep_odd_table_numbers() {
        let list: OrderList = serde_json::from_str(
            r#"{"orders":[
                {"id":1,"table_number":"7","items":"tea","placed_at":"09:00","status":"new"},
                {"id":2,"table_number":12,"items":"soup","placed_at":"09:05","status":"ready"}
            ]}"#,
        )
        .expect("orders");
        let tables: Vec<&str> = list
            .orders
            .iter()
            .map(|order| order.table_number.as_str())
            .collect();
        assert_eq!(tables, vec!["7", "12"]);
    }
}
