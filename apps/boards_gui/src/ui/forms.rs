//! Create forms. Fields are sent exactly as typed; the backend validates them.

use client_core::render::FormView;
use eframe::egui;
use shared::protocol::{OrderDraft, TaskDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
}

impl TaskForm {
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
        }
    }
}

impl FormView for TaskForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub table_number: String,
    pub items: String,
    pub placed_at: String,
}

impl OrderForm {
    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            table_number: self.table_number.clone(),
            items: self.items.clone(),
            placed_at: self.placed_at.clone(),
        }
    }
}

impl FormView for OrderForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter))
}

pub fn show_task_form(ui: &mut egui::Ui, form: &mut TaskForm) -> Option<TaskDraft> {
    let mut submit = false;
    ui.horizontal(|ui| {
        ui.label("Title");
        let title = ui.add(
            egui::TextEdit::singleline(&mut form.title)
                .hint_text("Prep vegetables")
                .desired_width(280.0),
        );
        submit |= submitted_with_enter(ui, &title);
        submit |= ui.button("Add task").clicked();
    });
    submit.then(|| form.draft())
}

pub fn show_order_form(ui: &mut egui::Ui, form: &mut OrderForm) -> Option<OrderDraft> {
    let mut submit = false;
    egui::Grid::new("order_form")
        .num_columns(2)
        .spacing([10.0, 6.0])
        .show(ui, |ui| {
            ui.label("Table");
            let table = ui.add(egui::TextEdit::singleline(&mut form.table_number).hint_text("12"));
            submit |= submitted_with_enter(ui, &table);
            ui.end_row();

            ui.label("Items");
            let items =
                ui.add(egui::TextEdit::singleline(&mut form.items).hint_text("2x ramen, 1x tea"));
            submit |= submitted_with_enter(ui, &items);
            ui.end_row();

            ui.label("Placed at");
            let placed_at =
                ui.add(egui::TextEdit::singleline(&mut form.placed_at).hint_text("18:30"));
            submit |= submitted_with_enter(ui, &placed_at);
            ui.end_row();
        });
    submit |= ui.button("Add order").clicked();
    submit.then(|| form.draft())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_draft_keeps_fields_as_typed() {
        let form = OrderForm {
            table_number: " 7 ".into(),
            items: "soup".into(),
            placed_at: "".into(),
        };
        assert_eq!(
            form.draft(),
            OrderDraft {
                table_number: " 7 ".into(),
                items: "soup".into(),
                placed_at: String::new(),
            }
        );
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = OrderForm {
            table_number: "7".into(),
            items: "soup".into(),
            placed_at: "18:00".into(),
        };
        form.reset();
        assert_eq!(form, OrderForm::default());

        let mut task = TaskForm {
            title: "Mop floors".into(),
        };
        task.reset();
        assert!(task.title.is_empty());
    }
}
