//! Process-lifetime store shared between sessions.

use super::models::*;
use super::queries::now_secs;
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    characters: Vec<PlayerCharacter>,
    history: Vec<BattleRecord>,
}

/// Mutex-guarded append-only lists.
///
/// Clones share the same underlying lists, so an append made through one
/// handle is visible to every other handle once the lock is released.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

fn stamp_character(character: &PlayerCharacter) -> Result<PlayerCharacter> {
    let mut stored = character.clone();
    if stored.created_at == 0 {
        stored.created_at = now_secs()?;
    }
    Ok(stored)
}

fn stamp_battle(record: &BattleRecord) -> Result<BattleRecord> {
    let mut stored = record.clone();
    if stored.fought_at == 0 {
        stored.fought_at = now_secs()?;
    }
    Ok(stored)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }

    pub fn append_character(&self, character: &PlayerCharacter) -> Result<PlayerCharacter> {
        let stored = stamp_character(character)?;
        self.lock()?.characters.push(stored.clone());
        Ok(stored)
    }

    pub fn characters(&self) -> Result<Vec<PlayerCharacter>> {
        Ok(self.lock()?.characters.clone())
    }

    pub fn record_battle(&self, record: &BattleRecord) -> Result<BattleRecord> {
        let stored = stamp_battle(record)?;
        self.lock()?.history.push(stored.clone());
        Ok(stored)
    }

    /// Both rows are pushed under a single lock.
    pub fn record_fight(
        &self,
        record: &BattleRecord,
        promoted: Option<&PlayerCharacter>,
    ) -> Result<(BattleRecord, Option<PlayerCharacter>)> {
        let record = stamp_battle(record)?;
        let promoted = promoted.map(stamp_character).transpose()?;

        let mut guard = self.lock()?;
        guard.history.push(record.clone());
        if let Some(character) = &promoted {
            guard.characters.push(character.clone());
        }
        Ok((record, promoted))
    }

    pub fn recent_battles(&self, limit: Option<u32>) -> Result<Vec<BattleRecord>> {
        let guard = self.lock()?;
        let take = limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(guard.history.iter().rev().take(take).cloned().collect())
    }

    pub fn battle_tally(&self) -> Result<BattleTally> {
        let guard = self.lock()?;
        let wins = guard
            .history
            .iter()
            .filter(|r| r.result == crate::Side::Player)
            .count() as u32;
        Ok(BattleTally {
            wins,
            losses: guard.history.len() as u32 - wins,
        })
    }
}
