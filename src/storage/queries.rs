//! Append and read operations on the character database

use super::{models::*, schema::CharacterDatabase};
use crate::cli::types::{Side, Source, StatBlock};
use crate::models::Portrait;
use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, Row};
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn insert_character(conn: &Connection, character: &PlayerCharacter) -> Result<PlayerCharacter> {
    let mut stored = character.clone();
    if stored.created_at == 0 {
        stored.created_at = now_secs()?;
    }

    conn.execute(
        "INSERT INTO player_characters
         (name, title, description, image_file, image_url, image_data,
          attack, defense, speed, luck, charisma,
          creator_name, summary, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            stored.name,
            stored.title,
            stored.description,
            stored.portrait.image_file,
            stored.portrait.image_url,
            stored.portrait.image_data,
            stored.stats.attack,
            stored.stats.defense,
            stored.stats.speed,
            stored.stats.luck,
            stored.stats.charisma,
            stored.creator_name,
            stored.summary,
            stored.created_at
        ],
    )?;
    Ok(stored)
}

fn insert_battle(conn: &Connection, record: &BattleRecord) -> Result<BattleRecord> {
    let mut stored = record.clone();
    if stored.fought_at == 0 {
        stored.fought_at = now_secs()?;
    }

    conn.execute(
        "INSERT INTO battle_history
         (player_name, opponent_name, result, player_title, opponent_title,
          opponent_source, fought_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        params![
            stored.player_name,
            stored.opponent_name,
            stored.result.as_str(),
            stored.player_title,
            stored.opponent_title,
            stored.opponent_source.as_str(),
            stored.fought_at
        ],
    )?;
    Ok(stored)
}

impl CharacterDatabase {
    /// Append a promoted player character. Existing rows are never touched.
    ///
    /// Returns the row as stored, with `created_at` filled in.
    pub fn append_character(&mut self, character: &PlayerCharacter) -> Result<PlayerCharacter> {
        insert_character(&self.conn, character)
    }

    /// All player characters in promotion order
    pub fn characters(&self) -> Result<Vec<PlayerCharacter>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, title, description, image_file, image_url, image_data,
                    attack, defense, speed, luck, charisma,
                    creator_name, summary, created_at
             FROM player_characters
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| self.row_to_character(row))?;

        let mut characters = Vec::new();
        for row in rows {
            characters.push(row?);
        }
        Ok(characters)
    }

    pub fn character_count(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM player_characters", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Append one completed fight to the history
    pub fn record_battle(&mut self, record: &BattleRecord) -> Result<BattleRecord> {
        insert_battle(&self.conn, record)
    }

    /// Write a fight's history row and its promotion in one transaction.
    ///
    /// Either both rows land or neither does.
    pub fn record_fight(
        &mut self,
        record: &BattleRecord,
        promoted: Option<&PlayerCharacter>,
    ) -> Result<(BattleRecord, Option<PlayerCharacter>)> {
        let tx = self.conn.transaction()?;
        let record = insert_battle(&tx, record)?;
        let promoted = promoted
            .map(|character| insert_character(&tx, character))
            .transpose()?;
        tx.commit()?;
        Ok((record, promoted))
    }

    /// Most recent battles first
    pub fn recent_battles(&self, limit: Option<u32>) -> Result<Vec<BattleRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, opponent_name, result, player_title, opponent_title,
                    opponent_source, fought_at
             FROM battle_history
             ORDER BY id DESC
             LIMIT ?",
        )?;

        // SQLite treats a negative LIMIT as "no limit"
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, u64>(6)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (player_name, opponent_name, result, player_title, opponent_title, source, fought_at) =
                row?;
            records.push(BattleRecord {
                player_name,
                opponent_name,
                result: result
                    .parse::<Side>()
                    .map_err(|e| anyhow!("corrupt battle_history row: {}", e))?,
                player_title,
                opponent_title,
                opponent_source: source
                    .parse::<Source>()
                    .map_err(|e| anyhow!("corrupt battle_history row: {}", e))?,
                fought_at,
            });
        }
        Ok(records)
    }

    /// Wins and losses for the human side across all recorded battles
    pub fn battle_tally(&self) -> Result<BattleTally> {
        let (wins, losses): (i64, i64) = self.conn.query_row(
            "SELECT COALESCE(SUM(CASE WHEN result = 'player' THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN result = 'opponent' THEN 1 ELSE 0 END), 0)
             FROM battle_history",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(BattleTally {
            wins: wins as u32,
            losses: losses as u32,
        })
    }

    /// Helper to convert a database row to PlayerCharacter
    fn row_to_character(&self, row: &Row) -> rusqlite::Result<PlayerCharacter> {
        Ok(PlayerCharacter {
            name: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            portrait: Portrait {
                image_file: row.get(3)?,
                image_url: row.get(4)?,
                image_data: row.get(5)?,
            },
            stats: StatBlock::new(row.get(6)?, row.get(7)?, row.get(8)?, row.get(9)?, row.get(10)?),
            creator_name: row.get(11)?,
            summary: row.get(12)?,
            created_at: row.get(13)?,
        })
    }
}
