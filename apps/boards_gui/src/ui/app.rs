use std::time::Duration;

use client_core::{BoardEvent, OrderBoard, TaskBoard};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::BoardKind;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::{
    forms::{self, OrderForm, TaskForm},
    panels::BoardPanel,
    widgets,
};

pub const SETTINGS_STORAGE_KEY: &str = "boards_gui_settings";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PersistedBoardSettings {
    pub active_board: BoardKind,
}

pub struct BoardsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    active: BoardKind,
    tasks: BoardPanel<TaskBoard, TaskForm>,
    orders: BoardPanel<OrderBoard, OrderForm>,
    /// Worker and queue health, shown in the footer.
    status: String,
}

impl BoardsApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, active: BoardKind) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            active,
            tasks: BoardPanel::default(),
            orders: BoardPanel::default(),
            status: "Starting backend worker...".to_string(),
        };
        app.send_tasks(BoardEvent::Refresh);
        app.send_orders(BoardEvent::Refresh);
        app
    }

    fn send_tasks(&mut self, event: BoardEvent<TaskBoard>) {
        if let Some(effect) = self.tasks.handle(event) {
            dispatch_backend_command(&self.cmd_tx, effect.into(), &mut self.status);
        }
    }

    fn send_orders(&mut self, event: BoardEvent<OrderBoard>) {
        if let Some(effect) = self.orders.handle(event) {
            dispatch_backend_command(&self.cmd_tx, effect.into(), &mut self.status);
        }
    }

    fn refresh_active(&mut self) {
        match self.active {
            BoardKind::Tasks => self.send_tasks(BoardEvent::Refresh),
            BoardKind::Orders => self.send_orders(BoardEvent::Refresh),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::WorkerFailed(message) => {
                    tracing::error!("{message}");
                    self.status = message;
                }
                UiEvent::Tasks(outcome) => {
                    if let Some(effect) = self.tasks.apply(outcome) {
                        dispatch_backend_command(&self.cmd_tx, effect.into(), &mut self.status);
                    }
                }
                UiEvent::Orders(outcome) => {
                    if let Some(effect) = self.orders.apply(outcome) {
                        dispatch_backend_command(&self.cmd_tx, effect.into(), &mut self.status);
                    }
                }
            }
        }
    }

    fn show_task_board(&mut self, ui: &mut egui::Ui) {
        ui.heading("Task Board");
        ui.add_space(6.0);
        if let Some(draft) = forms::show_task_form(ui, &mut self.tasks.form) {
            self.send_tasks(BoardEvent::Create(draft));
        }
        widgets::status_line(ui, self.tasks.status());
        ui.separator();
        if let Some(id) = self.tasks.show_rows(ui) {
            self.send_tasks(BoardEvent::CycleStatus(id));
        }
    }

    fn show_order_board(&mut self, ui: &mut egui::Ui) {
        ui.heading("Order Board");
        let counts = self.orders.counts();
        ui.horizontal(|ui| {
            widgets::count_chip(ui, "New", counts.new, "status-new");
            widgets::count_chip(ui, "In Progress", counts.in_progress, "status-in-progress");
            widgets::count_chip(ui, "Ready", counts.ready, "status-ready");
        });
        ui.add_space(6.0);
        if let Some(draft) = forms::show_order_form(ui, &mut self.orders.form) {
            self.send_orders(BoardEvent::Create(draft));
        }
        widgets::status_line(ui, self.orders.status());
        ui.separator();
        if let Some(id) = self.orders.show_rows(ui) {
            self.send_orders(BoardEvent::CycleStatus(id));
        }
    }
}

impl eframe::App for BoardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut refresh = false;
        egui::TopBottomPanel::top("board_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active, BoardKind::Tasks, "Task Board");
                ui.selectable_value(&mut self.active, BoardKind::Orders, "Order Board");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    refresh = ui.button("Refresh").clicked();
                });
            });
        });
        if refresh {
            self.refresh_active();
        }

        egui::TopBottomPanel::bottom("worker_status").show(ctx, |ui| {
            ui.weak(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active {
            BoardKind::Tasks => self.show_task_board(ui),
            BoardKind::Orders => self.show_order_board(ui),
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedBoardSettings {
            active_board: self.active,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
