//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// SQLite store for promoted player characters and battle history.
///
/// Both tables are append-only: triggers reject UPDATE and DELETE.
pub struct CharacterDatabase {
    pub(crate) conn: Connection,
}

impl CharacterDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database, used by tests and `match` previews
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_characters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image_file TEXT NOT NULL DEFAULT '',
                image_url TEXT NOT NULL DEFAULT '',
                image_data TEXT NOT NULL DEFAULT '',
                attack INTEGER NOT NULL,
                defense INTEGER NOT NULL,
                speed INTEGER NOT NULL,
                luck INTEGER NOT NULL,
                charisma INTEGER NOT NULL,
                creator_name TEXT NOT NULL,
                summary TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS battle_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_name TEXT NOT NULL,
                opponent_name TEXT NOT NULL,
                result TEXT NOT NULL CHECK (result IN ('player', 'opponent')),
                player_title TEXT NOT NULL,
                opponent_title TEXT NOT NULL,
                opponent_source TEXT NOT NULL,
                fought_at INTEGER NOT NULL
            )",
            [],
        )?;

        for table in ["player_characters", "battle_history"] {
            self.conn.execute_batch(&format!(
                "CREATE TRIGGER IF NOT EXISTS {table}_no_update
                 BEFORE UPDATE ON {table}
                 BEGIN SELECT RAISE(ABORT, '{table} is append-only'); END;
                 CREATE TRIGGER IF NOT EXISTS {table}_no_delete
                 BEFORE DELETE ON {table}
                 BEGIN SELECT RAISE(ABORT, '{table} is append-only'); END;",
                table = table
            ))?;
        }

        Ok(())
    }
}
