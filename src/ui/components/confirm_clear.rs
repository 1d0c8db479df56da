use eframe::egui;

/// `Some(true)` on confirm, `Some(false)` on cancel, `None` while undecided.
pub fn render(ctx: &egui::Context) -> Option<bool> {
    let mut answer = None;
    egui::Window::new("Clear chat history?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("This removes every stored message.");
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });
    answer
}
