//! One board on screen: its controller plus the views the controller renders into.

use client_core::{
    render::FormView, Board, BoardController, BoardEvent, Effect, ListModel, OrderCounts,
    Outcome, RenderContext, Row, StatusMessage,
};
use eframe::egui;
use shared::domain::ItemId;

use crate::ui::widgets;

pub struct BoardPanel<B: Board, F: FormView> {
    controller: BoardController<B>,
    list: ListModel,
    status: StatusMessage,
    counts: OrderCounts,
    pub form: F,
}

impl<B: Board, F: FormView + Default> Default for BoardPanel<B, F> {
    fn default() -> Self {
        Self {
            controller: BoardController::new(),
            list: ListModel::default(),
            status: StatusMessage::default(),
            counts: OrderCounts::default(),
            form: F::default(),
        }
    }
}

impl<B: Board, F: FormView> BoardPanel<B, F> {
    pub fn handle(&self, event: BoardEvent<B>) -> Option<Effect<B>> {
        self.controller.update(event)
    }

    pub fn apply(&mut self, outcome: Outcome<B>) -> Option<Effect<B>> {
        let mut ctx = RenderContext::new(&mut self.list, &mut self.status)
            .with_summary(&mut self.counts)
            .with_form(&mut self.form);
        self.controller.apply(outcome, &mut ctx)
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn counts(&self) -> OrderCounts {
        self.counts
    }

    pub fn list(&self) -> &ListModel {
        &self.list
    }

    /// Draws the rows and returns the item whose pill was activated this frame.
    pub fn show_rows(&self, ui: &mut egui::Ui) -> Option<ItemId> {
        let mut activated = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in self.list.rows() {
                    match row {
                        Row::Placeholder(text) => widgets::card(ui, |ui| {
                            ui.weak(*text);
                        }),
                        Row::Item(item) => widgets::card(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.strong(item.title.as_str());
                                    ui.weak(item.meta.as_str());
                                    if let Some(detail) = &item.detail {
                                        ui.label(detail.as_str());
                                    }
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if widgets::status_pill(ui, &item.pill).clicked() {
                                            activated = Some(item.pill.item_id.clone());
                                        }
                                    },
                                );
                            });
                        }),
                    }
                    ui.add_space(6.0);
                }
            });
        activated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::forms::{OrderForm, TaskForm};
    use client_core::{OrderBoard, TaskBoard, Tone};
    use shared::domain::{Order, OrderStatus, Task, TaskStatus};

    fn order(id: i64, status: OrderStatus) -> Order {
        Order {
            id: ItemId::from(id),
            table_number: "4".into(),
            items: "soup".into(),
            placed_at: "12:00".into(),
            status,
        }
    }

    #[test]
    fn loaded_orders_fill_rows_and_counts() {
        let mut panel = BoardPanel::<OrderBoard, OrderForm>::default();
        let next = panel.apply(Outcome::Loaded(vec![
            order(2, OrderStatus::New),
            order(1, OrderStatus::Ready),
        ]));

        assert!(next.is_none());
        assert_eq!(panel.list().rows().len(), 2);
        assert_eq!(
            panel.counts(),
            OrderCounts {
                new: 1,
                in_progress: 0,
                ready: 1,
            }
        );
    }

    #[test]
    fn pill_activation_becomes_status_update() {
        let mut panel = BoardPanel::<TaskBoard, TaskForm>::default();
        panel.apply(Outcome::Loaded(vec![Task {
            id: ItemId::from("t-9"),
            title: "Prep vegetables".into(),
            status: TaskStatus::Open,
        }]));

        match panel.handle(BoardEvent::CycleStatus(ItemId::from("t-9"))) {
            Some(Effect::UpdateStatus { id, status }) => {
                assert_eq!(id.as_str(), "t-9");
                assert_eq!(status, TaskStatus::Done);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn created_clears_form_and_refetches() {
        let mut panel = BoardPanel::<OrderBoard, OrderForm>::default();
        panel.form.table_number = "3".into();
        panel.form.items = "tea".into();

        let next = panel.apply(Outcome::Created);

        assert!(matches!(next, Some(Effect::Fetch)));
        assert_eq!(panel.form, OrderForm::default());
        assert_eq!(panel.status().tone, Tone::Info);
    }

    #[test]
    fn rejected_create_keeps_typed_fields() {
        let mut panel = BoardPanel::<TaskBoard, TaskForm>::default();
        panel.form.title = "   ".into();

        panel.apply(Outcome::CreateRejected(Some("Title is required.".into())));

        assert_eq!(panel.form.title, "   ");
        assert_eq!(panel.status().text, "Title is required.");
        assert_eq!(panel.status().tone, Tone::Error);
    }
}
