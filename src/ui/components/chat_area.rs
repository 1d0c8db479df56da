use eframe::egui;

use crate::common::Role;
use crate::ui::state::{AppState, RenderedMessage};

const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const BOT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &state.messages {
                message_bubble(ui, message);
            }

            if state.scroll_to_end {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                state.scroll_to_end = false;
            }
        });
}

fn message_bubble(ui: &mut egui::Ui, message: &RenderedMessage) {
    let (align, fill) = match message.role {
        Role::User => (egui::Align::Max, USER_BUBBLE),
        Role::Bot => (egui::Align::Min, BOT_BUBBLE),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.label(egui::RichText::new(&message.text).color(egui::Color32::WHITE));
            });
        ui.label(egui::RichText::new(&message.ts).small().weak());
    });
    ui.add_space(4.0);
}
