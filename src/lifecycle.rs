//! Character lifecycle: turning winning players into future opponents.
//!
//! A player is promoted if and only if they won and their realized portrait
//! is non-empty. Promoted records are appended to the store and never
//! changed or removed.

use crate::cli::types::Side;
use crate::models::Fighter;
use crate::storage::{BattleRecord, BattleStore, PlayerCharacter};
use anyhow::Result;
use log::{debug, info};

/// What promotion needs to know about a finished fight.
#[derive(Debug, Clone, Copy)]
pub struct BattleOutcome<'a> {
    /// The human player as resolved for this fight.
    pub player: &'a Fighter,
    pub winner: Side,
    /// One-line battle summary from the narrative.
    pub summary: &'a str,
}

fn describe(title: &str, summary: &str) -> String {
    match (title.is_empty(), summary.is_empty()) {
        (_, true) => title.to_string(),
        (true, false) => summary.to_string(),
        (false, false) => format!("{} - {}", title, summary),
    }
}

/// The record promotion would create, or `None` when the rule is not met.
pub fn promotion_candidate(outcome: &BattleOutcome<'_>) -> Option<PlayerCharacter> {
    if outcome.winner != Side::Player {
        return None;
    }
    if outcome.player.portrait.is_empty() {
        debug!(
            "{} won without a portrait; not promoted",
            outcome.player.name
        );
        return None;
    }

    let player = outcome.player;
    Some(PlayerCharacter {
        name: player.name.clone(),
        title: player.title.clone(),
        description: describe(&player.title, outcome.summary),
        portrait: player.portrait.clone(),
        stats: player.stats,
        creator_name: player.name.clone(),
        summary: outcome.summary.to_string(),
        created_at: 0,
    })
}

/// Apply the promotion rule and append the new record to `store`.
///
/// Returns the record as stored, or `None` when the player was not promoted.
pub fn promote<S: BattleStore + ?Sized>(
    store: &mut S,
    outcome: &BattleOutcome<'_>,
) -> Result<Option<PlayerCharacter>> {
    let Some(character) = promotion_candidate(outcome) else {
        return Ok(None);
    };

    let stored = store.append_character(&character)?;
    log_promotion(store, &stored)?;
    Ok(Some(stored))
}

/// Append the fight's history row and apply promotion as one store write.
///
/// A failed write leaves neither the history row nor the promoted character.
pub fn record_and_promote<S: BattleStore + ?Sized>(
    store: &mut S,
    record: &BattleRecord,
    outcome: &BattleOutcome<'_>,
) -> Result<(BattleRecord, Option<PlayerCharacter>)> {
    let candidate = promotion_candidate(outcome);
    let (record, promoted) = store.record_fight(record, candidate.as_ref())?;
    if let Some(character) = &promoted {
        log_promotion(store, character)?;
    }
    Ok((record, promoted))
}

fn log_promotion<S: BattleStore + ?Sized>(store: &S, character: &PlayerCharacter) -> Result<()> {
    info!(
        "Promoted {} to the opponent pool ({} characters)",
        character.name,
        store.character_count()?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{Source, StatBlock};
    use crate::models::Portrait;
    use crate::storage::MemoryStore;

    fn player(portrait: &str) -> Fighter {
        let mut fighter = Fighter::new("Alice", Source::Player);
        fighter.title = "Flame Swordsman".to_string();
        fighter.portrait = Portrait::inline(portrait);
        fighter.stats = StatBlock::new(80, 70, 75, 80, 75);
        fighter
    }

    #[test]
    fn test_winner_without_portrait_is_not_promoted() {
        let alice = player("");
        let mut store = MemoryStore::new();
        let outcome = BattleOutcome {
            player: &alice,
            winner: Side::Player,
            summary: "close fight",
        };

        assert!(promote(&mut store, &outcome).unwrap().is_none());
        assert!(store.characters().unwrap().is_empty());
    }

    #[test]
    fn test_winner_with_portrait_is_promoted_once() {
        let alice = player("abc");
        let mut store = MemoryStore::new();
        let outcome = BattleOutcome {
            player: &alice,
            winner: Side::Player,
            summary: "close fight",
        };

        let record = promote(&mut store, &outcome).unwrap().unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.creator_name, "Alice");
        assert_eq!(record.title, "Flame Swordsman");
        assert_eq!(record.portrait, Portrait::inline("abc"));
        assert_eq!(record.stats, alice.stats);
        assert_eq!(record.description, "Flame Swordsman - close fight");

        let stored = store.characters().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, record.name);
    }

    #[test]
    fn test_promote_returns_record_as_stored() {
        let alice = player("abc");
        let mut store = MemoryStore::new();
        let outcome = BattleOutcome {
            player: &alice,
            winner: Side::Player,
            summary: "close fight",
        };

        let record = promote(&mut store, &outcome).unwrap().unwrap();
        assert!(record.created_at > 0);
        assert_eq!(store.characters().unwrap()[0], record);
    }

    #[test]
    fn test_record_and_promote_writes_both() {
        let alice = player("abc");
        let mut store = MemoryStore::new();
        let outcome = BattleOutcome {
            player: &alice,
            winner: Side::Player,
            summary: "close fight",
        };
        let battle = BattleRecord {
            player_name: "Alice".to_string(),
            opponent_name: "Iron Duke".to_string(),
            result: Side::Player,
            player_title: "Flame Swordsman".to_string(),
            opponent_title: "Warden".to_string(),
            opponent_source: Source::Predefined,
            fought_at: 0,
        };

        let (record, promoted) = record_and_promote(&mut store, &battle, &outcome).unwrap();
        assert!(record.fought_at > 0);
        assert_eq!(store.recent_battles(None).unwrap(), vec![record]);
        assert_eq!(store.characters().unwrap(), vec![promoted.unwrap()]);
    }

    #[test]
    fn test_loser_is_never_promoted() {
        let alice = player("abc");
        let outcome = BattleOutcome {
            player: &alice,
            winner: Side::Opponent,
            summary: "",
        };
        assert!(promotion_candidate(&outcome).is_none());
    }

    #[test]
    fn test_url_portrait_counts_as_realized() {
        let mut alice = player("");
        alice.portrait.image_url = "https://example.com/alice.png".to_string();
        let outcome = BattleOutcome {
            player: &alice,
            winner: Side::Player,
            summary: "",
        };
        let record = promotion_candidate(&outcome).unwrap();
        assert_eq!(record.description, "Flame Swordsman");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("", "summary"), "summary");
        assert_eq!(describe("Title", ""), "Title");
        assert_eq!(describe("", ""), "");
    }
}
