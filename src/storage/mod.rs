//! Storage layer for promoted characters and battle history
//!
//! Organized into logical components:
//! - `models`: Data structures
//! - `schema`: SQLite connection and schema management
//! - `queries`: Append and read operations
//! - `memory`: Mutex-guarded in-memory store
//!
//! Both backends are append-only. No retention or deduplication policy is
//! applied; the collections grow for as long as the store lives.

pub mod memory;
pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

use anyhow::Result;

// Re-export the main types and database struct for easy access
pub use memory::MemoryStore;
pub use models::*;
pub use schema::CharacterDatabase;

/// The durable artifacts a fight produces, behind one seam.
pub trait BattleStore {
    /// Append a character, returning it as stored.
    fn append_character(&mut self, character: &PlayerCharacter) -> Result<PlayerCharacter>;

    fn characters(&self) -> Result<Vec<PlayerCharacter>>;

    fn record_battle(&mut self, record: &BattleRecord) -> Result<BattleRecord>;

    /// Record a fight and its optional promotion as one all-or-nothing write.
    fn record_fight(
        &mut self,
        record: &BattleRecord,
        promoted: Option<&PlayerCharacter>,
    ) -> Result<(BattleRecord, Option<PlayerCharacter>)>;

    fn recent_battles(&self, limit: Option<u32>) -> Result<Vec<BattleRecord>>;

    fn battle_tally(&self) -> Result<BattleTally>;

    fn character_count(&self) -> Result<usize> {
        Ok(self.characters()?.len())
    }
}

impl BattleStore for CharacterDatabase {
    fn append_character(&mut self, character: &PlayerCharacter) -> Result<PlayerCharacter> {
        CharacterDatabase::append_character(self, character)
    }

    fn characters(&self) -> Result<Vec<PlayerCharacter>> {
        CharacterDatabase::characters(self)
    }

    fn record_battle(&mut self, record: &BattleRecord) -> Result<BattleRecord> {
        CharacterDatabase::record_battle(self, record)
    }

    fn record_fight(
        &mut self,
        record: &BattleRecord,
        promoted: Option<&PlayerCharacter>,
    ) -> Result<(BattleRecord, Option<PlayerCharacter>)> {
        CharacterDatabase::record_fight(self, record, promoted)
    }

    fn recent_battles(&self, limit: Option<u32>) -> Result<Vec<BattleRecord>> {
        CharacterDatabase::recent_battles(self, limit)
    }

    fn battle_tally(&self) -> Result<BattleTally> {
        CharacterDatabase::battle_tally(self)
    }

    fn character_count(&self) -> Result<usize> {
        CharacterDatabase::character_count(self)
    }
}

impl BattleStore for MemoryStore {
    fn append_character(&mut self, character: &PlayerCharacter) -> Result<PlayerCharacter> {
        MemoryStore::append_character(self, character)
    }

    fn characters(&self) -> Result<Vec<PlayerCharacter>> {
        MemoryStore::characters(self)
    }

    fn record_battle(&mut self, record: &BattleRecord) -> Result<BattleRecord> {
        MemoryStore::record_battle(self, record)
    }

    fn record_fight(
        &mut self,
        record: &BattleRecord,
        promoted: Option<&PlayerCharacter>,
    ) -> Result<(BattleRecord, Option<PlayerCharacter>)> {
        MemoryStore::record_fight(self, record, promoted)
    }

    fn recent_battles(&self, limit: Option<u32>) -> Result<Vec<BattleRecord>> {
        MemoryStore::recent_battles(self, limit)
    }

    fn battle_tally(&self) -> Result<BattleTally> {
        MemoryStore::battle_tally(self)
    }
}
