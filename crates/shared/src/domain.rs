use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UnknownBoard;

/// Backend-assigned item identifier.
///
/// The client never interprets it: the order backend hands out integer row ids,
/// other backends may use strings, and both are carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Self(value),
            RawId::Signed(value) => Self(value.to_string()),
            RawId::Unsigned(value) => Self(value.to_string()),
        })
    }
}

/// Reads any JSON value as display text: strings as-is, everything else in
/// its JSON form.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Status values shared by both boards: a wire form, a display label and the
/// board's cycle policy.
pub trait BoardStatus: Clone + PartialEq + fmt::Debug + Serialize + Send + Sync + 'static {
    fn as_str(&self) -> &str;

    /// Display label; unknown values fall back to the raw wire string.
    fn label(&self) -> &str;

    /// The status a pill click moves to.
    fn next(&self) -> Self;
}

/// Declares a status enum that round-trips through its raw wire string and
/// keeps unrecognized values in an `Other` variant.
macro_rules! status_enum {
    ($name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            fn wire(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw,
                }
            }

            fn display_label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> String {
                match status {
                    $name::Other(raw) => raw,
                    known => known.wire().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.wire())
            }
        }
    };
}

status_enum!(TaskStatus {
    Open => ("open", "Open"),
    Done => ("done", "Done"),
});

status_enum!(OrderStatus {
    New => ("new", "New"),
    InProgress => ("in-progress", "In Progress"),
    Ready => ("ready", "Ready"),
    Completed => ("completed", "Completed"),
});

impl BoardStatus for TaskStatus {
    fn as_str(&self) -> &str {
        self.wire()
    }

    fn label(&self) -> &str {
        self.display_label()
    }

    fn next(&self) -> Self {
        match self {
            Self::Done => Self::Open,
            _ => Self::Done,
        }
    }
}

/// Rotation order for kitchen orders.
pub const ORDER_STATUS_FLOW: [OrderStatus; 4] = [
    OrderStatus::New,
    OrderStatus::InProgress,
    OrderStatus::Ready,
    OrderStatus::Completed,
];

impl BoardStatus for OrderStatus {
    fn as_str(&self) -> &str {
        self.wire()
    }

    fn label(&self) -> &str {
        self.display_label()
    }

    // An unrecognized status sits "before" the flow and therefore rotates to `new`.
    fn next(&self) -> Self {
        let next_index = ORDER_STATUS_FLOW
            .iter()
            .position(|status| status == self)
            .map_or(0, |index| (index + 1) % ORDER_STATUS_FLOW.len());
        ORDER_STATUS_FLOW[next_index].clone()
    }
}

/// Anything rendered as a row with a status pill.
pub trait BoardItem {
    type Status: BoardStatus;

    fn id(&self) -> &ItemId;
    fn status(&self) -> &Self::Status;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: ItemId,
    pub title: String,
    pub status: TaskStatus,
}

impl BoardItem for Task {
    type Status = TaskStatus;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn status(&self) -> &TaskStatus {
        &self.status
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: ItemId,
    /// Only ever displayed, so the backend's value is kept as text.
    #[serde(deserialize_with = "display_text")]
    pub table_number: String,
    pub items: String,
    pub placed_at: String,
    pub status: OrderStatus,
}

impl BoardItem for Order {
    type Status = OrderStatus;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn status(&self) -> &OrderStatus {
        &self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    #[default]
    Tasks,
    Orders,
}

impl BoardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardKind {
    type Err = UnknownBoard;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tasks" | "task" => Ok(Self::Tasks),
            "orders" | "order" => Ok(Self::Orders),
            _ => Err(UnknownBoard(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_toggle_twice_returns_to_start() {
        for start in [TaskStatus::Open, TaskStatus::Done] {
            assert_eq!(start.next().next(), start);
        }
        assert_eq!(TaskStatus::Open.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Open);
    }

    #[test]
    fn unknown_task_status_toggles_to_done() {
        assert_eq!(TaskStatus::from("archived").next(), TaskStatus::Done);
    }

    #[test]
    fn order_rotation_wraps_after_four_steps() {
        for start in ORDER_STATUS_FLOW {
            let cycled = start.next().next().next().next();
            assert_eq!(cycled, start);
        }
        assert_eq!(OrderStatus::Completed.next(), OrderStatus::New);
        assert_eq!(OrderStatus::New.next(), OrderStatus::InProgress);
    }

    #[test]
    fn unknown_order_status_rotates_to_new() {
        assert_eq!(OrderStatus::from("cancelled").next(), OrderStatus::New);
    }

    #[test]
    fn labels_fall_back_to_raw_status() {
        assert_eq!(OrderStatus::InProgress.label(), "In Progress");
        assert_eq!(OrderStatus::from("cancelled").label(), "cancelled");
        assert_eq!(TaskStatus::Open.label(), "Open");
    }

    #[test]
    fn statuses_keep_their_wire_form() {
        let status: OrderStatus = serde_json::from_str("\"in-progress\"").expect("status");
        assert_eq!(status, OrderStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).expect("json"),
            "\"in-progress\""
        );

        let unknown: TaskStatus = serde_json::from_str("\"blocked\"").expect("status");
        assert_eq!(unknown, TaskStatus::Other("blocked".to_string()));
        assert_eq!(serde_json::to_string(&unknown).expect("json"), "\"blocked\"");
    }

    #[test]
    fn item_ids_accept_numbers_and_strings() {
        let order: Order = serde_json::from_str(
            r#"{"id":42,"table_number":7,"items":"soup","placed_at":"18:30","status":"new"}"#,
        )
        .expect("order");
        assert_eq!(order.id, ItemId::from("42"));
        assert_eq!(order.table_number, "7");

        let task: Task =
            serde_json::from_str(r#"{"id":"t-1","title":"Prep","status":"open"}"#).expect("task");
        assert_eq!(task.id.as_str(), "t-1");
    }

    #[test]
    fn board_kind_parses_singular_and_plural() {
        assert_eq!("Orders".parse::<BoardKind>().expect("kind"), BoardKind::Orders);
        assert_eq!("task".parse::<BoardKind>().expect("kind"), BoardKind::Tasks);
        assert!("menu".parse::<BoardKind>().is_err());
    }
}
