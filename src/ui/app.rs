use eframe::egui;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{ChatCommand, ChatEvent};

use super::components::{chat_area, confirm_clear, header, input_bar, launcher};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ChatCommand>,
    event_receiver: mpsc::UnboundedReceiver<ChatEvent>,
    shutdown: CancellationToken,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ChatCommand>,
        event_receiver: mpsc::UnboundedReceiver<ChatEvent>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
            shutdown,
        }
    }

    fn handle_chat_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply(event);
        }
    }

    fn send_command(&mut self, command: ChatCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to chat worker: {err}");
        }
    }

    fn show_shell(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            let actions = header::render(ui, &self.state);
            if actions.export {
                self.send_command(ChatCommand::Export);
            }
            if actions.clear {
                self.state.chrome.request_clear();
            }
            if actions.close {
                self.state.chrome.collapse();
            }
        });

        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(4.0);
            if input_bar::render(ui, &mut self.state) {
                self.state.dispatch_input(&self.command_sender);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, &mut self.state);
        });

        if self.state.chrome.is_confirming_clear() {
            if let Some(confirmed) = confirm_clear::render(ctx) {
                if self.state.chrome.resolve_clear(confirmed) {
                    self.send_command(ChatCommand::Clear);
                }
            }
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_chat_events();

        if self.state.chrome.is_collapsed() {
            egui::CentralPanel::default().show(ctx, |_ui| {});
            if launcher::render(ctx) {
                self.state.chrome.expand();
            }
        } else {
            self.show_shell(ctx);
        }

        ctx.request_repaint();
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        // Abort any request or animation still running in the worker.
        self.shutdown.cancel();
    }
}
