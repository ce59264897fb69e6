//! Rendering: rebuild a list view from an authoritative snapshot.
//!
//! Views are plain traits so hosts decide what a "row" looks like on screen.
//! Render functions receive every view they touch through [`RenderContext`]
//! instead of reaching for globals.

use shared::domain::ItemId;

use crate::board::Board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPill {
    pub item_id: ItemId,
    pub label: String,
    /// Style hook of the form `status-{raw status}`.
    pub style_key: String,
    pub tooltip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub title: String,
    pub meta: String,
    pub detail: Option<String>,
    pub pill: StatusPill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Placeholder(&'static str),
    Item(ItemRow),
}

impl Row {
    pub fn pill(&self) -> Option<&StatusPill> {
        match self {
            Self::Item(row) => Some(&row.pill),
            Self::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderCounts {
    pub new: usize,
    pub in_progress: usize,
    pub ready: usize,
}

pub trait ListView {
    fn clear(&mut self);
    fn push(&mut self, row: Row);
}

pub trait StatusLine {
    fn show(&mut self, message: &str, tone: Tone);
}

pub trait SummaryView {
    fn set_counts(&mut self, counts: OrderCounts);
}

pub trait FormView {
    fn reset(&mut self);
}

pub struct RenderContext<'a> {
    pub list: &'a mut dyn ListView,
    pub status: &'a mut dyn StatusLine,
    pub summary: Option<&'a mut dyn SummaryView>,
    pub form: Option<&'a mut dyn FormView>,
}

impl<'a> RenderContext<'a> {
    pub fn new(list: &'a mut dyn ListView, status: &'a mut dyn StatusLine) -> Self {
        Self {
            list,
            status,
            summary: None,
            form: None,
        }
    }

    pub fn with_summary(mut self, summary: &'a mut dyn SummaryView) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_form(mut self, form: &'a mut dyn FormView) -> Self {
        self.form = Some(form);
        self
    }

    /// Clears the list and repopulates it in received order.
    pub fn render<B: Board>(&mut self, items: &[B::Item]) {
        self.list.clear();

        if let (Some(summary), Some(counts)) = (self.summary.as_deref_mut(), B::summarize(items)) {
            summary.set_counts(counts);
        }

        if items.is_empty() {
            self.list.push(Row::Placeholder(B::PLACEHOLDER));
            return;
        }

        for item in items {
            self.list.push(Row::Item(B::row(item)));
        }
    }

    pub fn report(&mut self, message: &str, tone: Tone) {
        self.status.show(message, tone);
    }

    pub fn reset_form(&mut self) {
        if let Some(form) = self.form.as_deref_mut() {
            form.reset();
        }
    }
}

/// In-memory list, the backing store for hosts that repaint from data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    rows: Vec<Row>,
}

impl ListModel {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn item_rows(&self) -> impl Iterator<Item = &ItemRow> {
        self.rows.iter().filter_map(|row| match row {
            Row::Item(row) => Some(row),
            Row::Placeholder(_) => None,
        })
    }
}

impl ListView for ListModel {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine for StatusMessage {
    fn show(&mut self, message: &str, tone: Tone) {
        self.text = message.to_string();
        self.tone = tone;
    }
}

impl SummaryView for OrderCounts {
    fn set_counts(&mut self, counts: OrderCounts) {
        *self = counts;
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
