use super::*;
use crate::board::{OrderBoard, TaskBoard};
use shared::domain::{ItemId, Order, OrderStatus, Task, TaskStatus};

fn task(id: i64, title: &str, status: TaskStatus) -> Task {
    Task {
        id: ItemId::from(id),
        title: title.to_string(),
        status,
    }
}

fn order(id: i64, table_number: i64, status: &str) -> Order {
    Order {
        id: ItemId::from(id),
        table_number: table_number.to_string(),
        items: format!("items for {table_number}"),
        placed_at: "12:15".to_string(),
        status: OrderStatus::from(status),
    }
}

struct Views {
    list: ListModel,
    status: StatusMessage,
    counts: OrderCounts,
}

impl Views {
    fn new() -> Self {
        Self {
            list: ListModel::default(),
            status: StatusMessage::default(),
            counts: OrderCounts {
                new: 9,
                in_progress: 9,
                ready: 9,
            },
        }
    }

    fn render_orders(&mut self, orders: &[Order]) {
        RenderContext::new(&mut self.list, &mut self.status)
            .with_summary(&mut self.counts)
            .render::<OrderBoard>(orders);
    }
}

#[test]
fn one_row_per_item_in_received_order() {
    let mut views = Views::new();
    let tasks = vec![
        task(3, "Prep vegetables", TaskStatus::Open),
        task(1, "Sharpen knives", TaskStatus::Done),
        task(2, "Stock fridge", TaskStatus::Open),
    ];

    RenderContext::new(&mut views.list, &mut views.status).render::<TaskBoard>(&tasks);

    let titles: Vec<&str> = views
        .list
        .item_rows()
        .map(|row| row.title.as_str())
        .collect();
    assert_eq!(views.list.rows().len(), 3);
    assert_eq!(titles, vec!["Prep vegetables", "Sharpen knives", "Stock fridge"]);
}

#[test]
fn empty_board_renders_single_placeholder_and_zero_counts() {
    let mut views = Views::new();
    views.render_orders(&[]);

    assert_eq!(
        views.list.rows(),
        &[Row::Placeholder(
            "No orders yet. Add a walk-in order to get started."
        )]
    );
    assert_eq!(views.counts, OrderCounts::default());
}

#[test]
fn rerender_replaces_previous_rows() {
    let mut views = Views::new();
    views.render_orders(&[order(1, 4, "new"), order(2, 5, "ready")]);
    views.render_orders(&[order(3, 6, "completed")]);

    assert_eq!(views.list.rows().len(), 1);
    assert_eq!(views.list.item_rows().next().expect("row").title, "Table 6");
}

#[test]
fn order_row_shows_table_meta_items_and_pill() {
    let mut views = Views::new();
    views.render_orders(&[order(17, 8, "in-progress")]);

    let row = views.list.item_rows().next().expect("row");
    assert_eq!(row.title, "Table 8");
    assert_eq!(row.meta, "Order #17 \u{2022} 12:15");
    assert_eq!(row.detail.as_deref(), Some("items for 8"));
    assert_eq!(row.pill.label, "In Progress");
    assert_eq!(row.pill.style_key, "status-in-progress");
    assert_eq!(row.pill.item_id, ItemId::from(17_i64));
    assert_eq!(row.pill.tooltip, "Cycle status");
}

#[test]
fn unknown_status_label_falls_back_to_raw_value() {
    let mut views = Views::new();
    views.render_orders(&[order(1, 2, "on-hold")]);

    let row = views.list.item_rows().next().expect("row");
    assert_eq!(row.pill.label, "on-hold");
    assert_eq!(row.pill.style_key, "status-on-hold");
}

#[test]
fn counts_cover_new_in_progress_and_ready_only() {
    let mut views = Views::new();
    let orders = vec![
        order(1, 1, "new"),
        order(2, 2, "new"),
        order(3, 3, "in-progress"),
        order(4, 4, "ready"),
        order(5, 5, "completed"),
        order(6, 6, "completed"),
        order(7, 7, "mystery"),
    ];
    views.render_orders(&orders);

    assert_eq!(
        views.counts,
        OrderCounts {
            new: 2,
            in_progress: 1,
            ready: 1,
        }
    );
    let counted = views.counts.new + views.counts.in_progress + views.counts.ready;
    let active = orders
        .iter()
        .filter(|order| {
            matches!(
                order.status,
                OrderStatus::New | OrderStatus::InProgress | OrderStatus::Ready
            )
        })
        .count();
    assert_eq!(counted, active);
}

#[test]
fn task_board_leaves_summary_untouched() {
    let mut views = Views::new();
    RenderContext::new(&mut views.list, &mut views.status)
        .with_summary(&mut views.counts)
        .render::<TaskBoard>(&[task(1, "Mop", TaskStatus::Open)]);

    assert_eq!(views.counts.new, 9);
    let row = views.list.item_rows().next().expect("row");
    assert_eq!(row.meta, "Task #1");
    assert_eq!(row.pill.label, "Open");
    assert_eq!(row.pill.tooltip, "Toggle status");
}

#[test]
fn report_sets_text_and_tone() {
    let mut views = Views::new();
    let mut ctx = RenderContext::new(&mut views.list, &mut views.status);
    ctx.report("Unable to create order.", Tone::Error);
    ctx.report("Order added! Tap a status pill to update.", Tone::Info);

    assert_eq!(views.status.text, "Order added! Tap a status pill to update.");
    assert_eq!(views.status.tone, Tone::Info);
}
