//! UI layer for the boards window: app shell, board panels, forms and widgets.

pub mod app;
pub mod forms;
pub mod panels;
pub mod widgets;

pub use app::{BoardsApp, PersistedBoardSettings, SETTINGS_STORAGE_KEY};
