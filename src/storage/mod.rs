pub mod database;
pub mod history;

pub use database::Database;
pub use history::HistoryStore;

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ensure data directory exists
pub fn ensure_data_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
