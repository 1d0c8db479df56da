mod chat;
mod common;
mod config;
mod network;
mod storage;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use chat::{ChannelRenderer, SendController};
use config::AppConfig;
use network::{ChatWorker, HttpBackend};
use storage::{Database, HistoryStore};
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "chat_widget",
    version,
    about = "Desktop chat widget for a /predict chatbot backend"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Base URL of the chatbot backend (overrides the config file)
    #[arg(long, env = "CHAT_BACKEND_URL", value_name = "URL")]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(url) = cli.backend_url {
        app_config.backend_url = url;
    }

    let backend = match HttpBackend::new(&app_config.backend_url, app_config.request_timeout()) {
        Ok(backend) => backend,
        Err(err) => {
            log::error!("Unable to build HTTP client: {err}");
            std::process::exit(1);
        }
    };
    log::info!("Using chatbot backend at {}", backend.endpoint());

    run_widget(app_config, backend).await
}

fn open_history(app_config: &AppConfig) -> HistoryStore {
    if let Err(err) = storage::ensure_data_dir(&app_config.data_dir) {
        log::warn!(
            "Unable to create data dir {}: {err}",
            app_config.data_dir.display()
        );
    }

    let path = app_config.database_path();
    let db = match Database::new(&path) {
        Ok(db) => db,
        Err(err) => {
            log::warn!(
                "Failed to open {} ({err}); history will not survive restart",
                path.display()
            );
            match Database::in_memory() {
                Ok(db) => db,
                Err(err) => {
                    log::error!("Failed to open in-memory database: {err}");
                    std::process::exit(1);
                }
            }
        }
    };

    HistoryStore::new(db, app_config.history_limit)
}

async fn run_widget(app_config: AppConfig, backend: HttpBackend) -> Result<(), eframe::Error> {
    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Worker -> UI
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();

    let controller = SendController::new(
        backend,
        ChannelRenderer::new(event_tx.clone()),
        open_history(&app_config),
        app_config.typing_delay(),
        shutdown.child_token(),
    );
    let worker = ChatWorker::new(
        controller,
        cmd_rx,
        event_tx,
        app_config.export_dir.clone(),
        shutdown.child_token(),
    );
    tokio::spawn(worker.run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([280.0, 360.0]),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Chat Widget",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                shutdown.clone(),
            )))
        }),
    )
}
