use eframe::egui;

use crate::ui::state::AppState;

#[derive(Default)]
pub struct HeaderActions {
    pub export: bool,
    pub clear: bool,
    pub close: bool,
}

pub fn render(ui: &mut egui::Ui, state: &AppState) -> HeaderActions {
    let mut actions = HeaderActions::default();

    ui.horizontal(|ui| {
        ui.heading("Chat Assistant");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Minimize").clicked() {
                actions.close = true;
            }
            if ui.button("Clear").clicked() {
                actions.clear = true;
            }
            if ui.button("Export").clicked() {
                actions.export = true;
            }
        });
    });

    let status = state.send_state.label();
    if !status.is_empty() {
        ui.label(egui::RichText::new(status).italics().weak());
    } else if let Some(notice) = &state.notice {
        ui.label(egui::RichText::new(notice).weak());
    }

    actions
}
