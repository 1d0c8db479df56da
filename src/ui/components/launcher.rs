use eframe::egui;

/// Floating button shown while the shell is collapsed. Returns true when clicked.
pub fn render(ctx: &egui::Context) -> bool {
    let mut open = false;
    egui::Area::new(egui::Id::new("chat_launcher"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            let button = egui::Button::new(egui::RichText::new("💬").size(28.0))
                .corner_radius(egui::CornerRadius::same(24));
            if ui.add(button).on_hover_text("Open chat").clicked() {
                open = true;
            }
        });
    open
}
