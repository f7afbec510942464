//! Data models for the storage layer

use crate::cli::types::{Side, Source, StatBlock};
use crate::models::Portrait;
use serde::{Deserialize, Serialize};

/// Snapshot of a past winning player, eligible to reappear as an opponent.
///
/// Created once at promotion time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub name: String,
    pub title: String,
    pub description: String,
    pub portrait: Portrait,
    pub stats: StatBlock,
    /// The original player's name.
    pub creator_name: String,
    /// One-line summary of the battle that earned the promotion.
    pub summary: String,
    #[serde(default)]
    pub created_at: u64,
}

/// One completed fight, as shown in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub player_name: String,
    pub opponent_name: String,
    pub result: Side,
    pub player_title: String,
    pub opponent_title: String,
    pub opponent_source: Source,
    #[serde(default)]
    pub fought_at: u64,
}

/// Win/loss totals across the recorded history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTally {
    pub wins: u32,
    pub losses: u32,
}

impl BattleTally {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }
}
