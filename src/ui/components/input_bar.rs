use eframe::egui;

use crate::ui::state::AppState;

/// Returns true when the user asked to send the current input.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input_text)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - 60.0),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    send
}
