use std::fs;
use std::path::{Path, PathBuf};

use crate::common::ChatEntry;

use super::StorageError;
use super::database::Database;

pub const HISTORY_KEY: &str = "ml_chatbot_history_v2";
pub const DEFAULT_HISTORY_LIMIT: usize = 200;
pub const EXPORT_FILE_NAME: &str = "chat_history.json";

/// Bounded chat log stored as one JSON array under [`HISTORY_KEY`].
///
/// Every write replaces the whole array. There is no cross-process locking,
/// so two widgets sharing a database file race with last-writer-wins.
pub struct HistoryStore {
    db: Database,
    limit: usize,
}

impl HistoryStore {
    pub fn new(db: Database, limit: usize) -> Self {
        Self {
            db,
            limit: limit.max(1),
        }
    }

    /// Read the persisted log. Missing or unreadable data yields an empty log.
    pub fn load(&self) -> Vec<ChatEntry> {
        let raw = match self.db.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("Failed to read chat history: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ChatEntry>>(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Stored chat history is corrupt ({err}); starting empty");
                Vec::new()
            }
        }
    }

    pub fn append(&self, entry: ChatEntry) -> Result<(), StorageError> {
        let mut entries = self.load();
        entries.push(entry);
        if entries.len() > self.limit {
            let excess = entries.len() - self.limit;
            entries.drain(..excess);
        }
        self.save(&entries)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.db.remove(HISTORY_KEY)?;
        Ok(())
    }

    pub fn export_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(&self.load())?)
    }

    /// Write the log to `dir/chat_history.json`, returning the file path.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(EXPORT_FILE_NAME);
        fs::write(&path, self.export_json()?)?;
        Ok(path)
    }

    fn save(&self, entries: &[ChatEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.db.set(HISTORY_KEY, &raw)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &Database {
        &self.db
    }
}
