//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{Side, Source, StatBlock};
use crate::models::Portrait;

fn create_test_db() -> CharacterDatabase {
    CharacterDatabase::new_in_memory().unwrap()
}

fn sample_character(name: &str) -> PlayerCharacter {
    PlayerCharacter {
        name: name.to_string(),
        title: "Flame Swordsman".to_string(),
        description: "Flame Swordsman - won in three rounds".to_string(),
        portrait: Portrait::inline("abc"),
        stats: StatBlock::new(80, 70, 75, 80, 75),
        creator_name: name.to_string(),
        summary: "won in three rounds".to_string(),
        created_at: 0,
    }
}

fn sample_battle(player: &str, result: Side) -> BattleRecord {
    BattleRecord {
        player_name: player.to_string(),
        opponent_name: "Iron Duke".to_string(),
        result,
        player_title: "Challenger".to_string(),
        opponent_title: "Warden".to_string(),
        opponent_source: Source::Predefined,
        fought_at: 0,
    }
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert_eq!(db.character_count().unwrap(), 0);
    assert!(db.characters().unwrap().is_empty());
}

#[test]
fn test_append_and_read_characters_in_order() {
    let mut db = create_test_db();

    db.append_character(&sample_character("Alice")).unwrap();
    db.append_character(&sample_character("Bob")).unwrap();

    let characters = db.characters().unwrap();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].name, "Alice");
    assert_eq!(characters[1].name, "Bob");
    assert_eq!(characters[0].portrait, Portrait::inline("abc"));
    assert_eq!(characters[0].stats.total(), 380);
    assert!(characters[0].created_at > 0);
    assert_eq!(db.character_count().unwrap(), 2);
}

#[test]
fn test_duplicate_names_are_kept() {
    let mut db = create_test_db();

    db.append_character(&sample_character("Alice")).unwrap();
    db.append_character(&sample_character("Alice")).unwrap();

    assert_eq!(db.character_count().unwrap(), 2);
}

#[test]
fn test_characters_are_append_only() {
    let mut db = create_test_db();
    db.append_character(&sample_character("Alice")).unwrap();

    let update = db
        .conn
        .execute("UPDATE player_characters SET name = 'Mallory'", []);
    assert!(update.is_err());

    let delete = db.conn.execute("DELETE FROM player_characters", []);
    assert!(delete.is_err());

    assert_eq!(db.characters().unwrap()[0].name, "Alice");
}

#[test]
fn test_history_is_append_only() {
    let mut db = create_test_db();
    db.record_battle(&sample_battle("Alice", Side::Player)).unwrap();

    assert!(db.conn.execute("DELETE FROM battle_history", []).is_err());
    assert_eq!(db.recent_battles(None).unwrap().len(), 1);
}

#[test]
fn test_recent_battles_newest_first_with_limit() {
    let mut db = create_test_db();

    db.record_battle(&sample_battle("Alice", Side::Player)).unwrap();
    db.record_battle(&sample_battle("Bob", Side::Opponent)).unwrap();
    db.record_battle(&sample_battle("Carol", Side::Player)).unwrap();

    let all = db.recent_battles(None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].player_name, "Carol");
    assert_eq!(all[2].player_name, "Alice");

    let limited = db.recent_battles(Some(2)).unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[1].player_name, "Bob");
    assert_eq!(limited[1].result, Side::Opponent);
    assert_eq!(limited[1].opponent_source, Source::Predefined);
}

#[test]
fn test_battle_tally() {
    let mut db = create_test_db();
    assert_eq!(db.battle_tally().unwrap(), BattleTally::default());

    db.record_battle(&sample_battle("Alice", Side::Player)).unwrap();
    db.record_battle(&sample_battle("Alice", Side::Player)).unwrap();
    db.record_battle(&sample_battle("Alice", Side::Opponent)).unwrap();

    let tally = db.battle_tally().unwrap();
    assert_eq!(tally.wins, 2);
    assert_eq!(tally.losses, 1);
    assert_eq!(tally.total(), 3);
}

#[test]
fn test_database_reopens_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("characters.db");

    {
        let mut db = CharacterDatabase::open(&path).unwrap();
        db.append_character(&sample_character("Alice")).unwrap();
    }

    let db = CharacterDatabase::open(&path).unwrap();
    assert_eq!(db.characters().unwrap()[0].name, "Alice");
}

#[test]
fn test_memory_store_shares_appends_between_handles() {
    let store = MemoryStore::new();
    let other = store.clone();

    store.append_character(&sample_character("Alice")).unwrap();
    other.append_character(&sample_character("Bob")).unwrap();

    assert_eq!(store.characters().unwrap().len(), 2);
    assert_eq!(other.characters().unwrap()[0].name, "Alice");
}

#[test]
fn test_memory_store_concurrent_appends_are_not_lost() {
    let store = MemoryStore::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                for j in 0..25 {
                    store
                        .append_character(&sample_character(&format!("P{}-{}", i, j)))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.characters().unwrap().len(), 200);
}

#[test]
fn test_memory_store_history_through_trait() {
    let mut store = MemoryStore::new();
    let backend: &mut dyn BattleStore = &mut store;

    backend.record_battle(&sample_battle("Alice", Side::Player)).unwrap();
    backend.record_battle(&sample_battle("Bob", Side::Opponent)).unwrap();

    assert_eq!(backend.recent_battles(Some(1)).unwrap()[0].player_name, "Bob");
    assert_eq!(backend.battle_tally().unwrap().wins, 1);
    assert_eq!(backend.character_count().unwrap(), 0);
}

#[test]
fn test_append_returns_stored_row() {
    let mut db = create_test_db();

    let stored = db.append_character(&sample_character("Alice")).unwrap();
    assert!(stored.created_at > 0);
    assert_eq!(db.characters().unwrap(), vec![stored]);
}

#[test]
fn test_record_fight_writes_both_rows() {
    let mut db = create_test_db();
    let alice = sample_character("Alice");

    let (record, promoted) = db
        .record_fight(&sample_battle("Alice", Side::Player), Some(&alice))
        .unwrap();

    assert!(record.fought_at > 0);
    assert_eq!(db.recent_battles(None).unwrap(), vec![record]);
    assert_eq!(db.characters().unwrap(), vec![promoted.unwrap()]);
}

#[test]
fn test_record_fight_rolls_back_history_on_failed_promotion() {
    let mut db = create_test_db();
    db.conn
        .execute_batch(
            "CREATE TRIGGER reject_characters BEFORE INSERT ON player_characters
             BEGIN SELECT RAISE(ABORT, 'character store full'); END;",
        )
        .unwrap();

    let result = db.record_fight(
        &sample_battle("Alice", Side::Player),
        Some(&sample_character("Alice")),
    );

    assert!(result.is_err());
    assert!(db.recent_battles(None).unwrap().is_empty());
    assert_eq!(db.character_count().unwrap(), 0);
}

#[test]
fn test_memory_store_record_fight_without_promotion() {
    let store = MemoryStore::new();

    let (record, promoted) = store
        .record_fight(&sample_battle("Alice", Side::Opponent), None)
        .unwrap();

    assert!(promoted.is_none());
    assert_eq!(store.recent_battles(None).unwrap(), vec![record]);
    assert!(store.characters().unwrap().is_empty());
}
