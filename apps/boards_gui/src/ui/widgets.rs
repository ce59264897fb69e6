//! Small reusable widgets: cards, status pills, the status line and count chips.

use client_core::{render::StatusPill, StatusMessage, Tone};
use eframe::egui::{self, Color32, RichText};

pub const ERROR_RED: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);

pub fn pill_fill(style_key: &str) -> Color32 {
    match style_key {
        "status-new" | "status-open" => Color32::from_rgb(0x1e, 0x88, 0xe5),
        "status-in-progress" => Color32::from_rgb(0xfb, 0x8c, 0x00),
        "status-ready" => Color32::from_rgb(0x43, 0xa0, 0x47),
        "status-completed" | "status-done" => Color32::from_rgb(0x75, 0x75, 0x75),
        _ => Color32::from_rgb(0x9e, 0x9e, 0x9e),
    }
}

pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(10.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Focusable button; Enter or Space while focused counts as a click.
pub fn status_pill(ui: &mut egui::Ui, pill: &StatusPill) -> egui::Response {
    let text = RichText::new(pill.label.as_str())
        .color(Color32::WHITE)
        .strong();
    ui.add(
        egui::Button::new(text)
            .fill(pill_fill(&pill.style_key))
            .corner_radius(12.0),
    )
    .on_hover_text(pill.tooltip)
}

pub fn status_line(ui: &mut egui::Ui, status: &StatusMessage) {
    if status.text.is_empty() {
        return;
    }
    let text = RichText::new(status.text.as_str());
    let text = match status.tone {
        Tone::Error => text.color(ERROR_RED),
        Tone::Info => text,
    };
    ui.label(text);
}

pub fn count_chip(ui: &mut egui::Ui, label: &str, count: usize, style_key: &str) {
    egui::Frame::NONE
        .fill(pill_fill(style_key).gamma_multiply(0.25))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("{label} {count}")).strong());
        });
}

#[cfg(test)]
mod tests {
    use super::pill_fill;

    #[test]
    fn known_statuses_get_distinct_colors() {
        let keys = ["status-new", "status-in-progress", "status-ready", "status-completed"];
        for (index, key) in keys.iter().enumerate() {
            for other in &keys[index + 1..] {
                assert_ne!(pill_fill(key), pill_fill(other), "{key} vs {other}");
            }
        }
    }

    #[test]
    fn unknown_statuses_share_neutral_color() {
        assert_eq!(pill_fill("status-on-hold"), pill_fill("status-"));
    }
}
