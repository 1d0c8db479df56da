use rusqlite::{Connection, OptionalExtension, Result as SqlResult, params};
use std::path::Path;

/// SQLite connection holding a single key/value table.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> SqlResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn in_memory() -> SqlResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> SqlResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
    }

    /// Overwrite the value stored under `key`.
    pub fn set(&self, key: &str, value: &str) -> SqlResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> SqlResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_remove_deletes() {
        let db = Database::in_memory().unwrap();
        assert_eq!(db.get("k").unwrap(), None);

        db.set("k", "one").unwrap();
        db.set("k", "two").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("two"));

        db.remove("k").unwrap();
        assert_eq!(db.get("k").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.db");

        Database::new(&path).unwrap().set("k", "kept").unwrap();

        let reopened = Database::new(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("kept"));
    }
}
