//! Battle history command implementation

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    storage::{BattleRecord, BattleStore, BattleTally},
    Result, Side,
};

use super::common::open_store;

#[derive(Debug, Clone, Serialize)]
pub struct HistorySummary {
    pub tally: BattleTally,
    pub battles: Vec<BattleRecord>,
}

pub fn load_history<S: BattleStore + ?Sized>(
    store: &S,
    limit: Option<u32>,
) -> Result<HistorySummary> {
    Ok(HistorySummary {
        tally: store.battle_tally()?,
        battles: store.recent_battles(limit)?,
    })
}

/// Handle the history command
pub fn handle_history(db: Option<PathBuf>, limit: Option<u32>, as_json: bool) -> Result<()> {
    let store = open_store(db)?;
    let summary = load_history(&store, limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?); // tarpaulin::skip
        return Ok(());
    }

    if summary.battles.is_empty() {
        println!("No battles recorded yet.");
        return Ok(());
    }

    for record in &summary.battles {
        let verdict = match record.result {
            Side::Player => "WIN ",
            Side::Opponent => "LOSS",
        };
        println!(
            "{}  {} ({}) vs {} ({}) [{}]",
            verdict,
            record.player_name,
            record.player_title,
            record.opponent_name,
            record.opponent_title,
            record.opponent_source
        );
    }

    let tally = summary.tally;
    println!(
        "\nRecord: {} wins, {} losses ({} battles)",
        tally.wins,
        tally.losses,
        tally.total()
    );

    Ok(())
}
