//! Match preview command implementation

use serde::Serialize;

use crate::{
    core::{Catalog, GameRng},
    matchmaking::{Matchmaker, MatchmakingConfig, Tier},
    storage::BattleStore,
    BattleError, Fighter, Result,
};

use super::common::CommandContext;
use crate::cli::MatchArgs;

/// The opponent a name would face, without deciding or recording anything.
#[derive(Debug, Clone, Serialize)]
pub struct MatchPreview {
    pub player_name: String,
    pub tier: Tier,
    pub roll: f64,
    pub pool_size: usize,
    pub opponent: Fighter,
}

/// Run matchmaking only.
pub fn preview_match<S: BattleStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
    config: &MatchmakingConfig,
    player_name: &str,
    rng: &mut GameRng,
) -> Result<MatchPreview> {
    let player_name = player_name.trim();
    if player_name.is_empty() {
        return Err(BattleError::EmptyPlayerName);
    }

    let characters = store.characters()?;
    let selection = Matchmaker::new(config, catalog).select(player_name, &characters, rng);

    Ok(MatchPreview {
        player_name: player_name.to_string(),
        tier: selection.tier,
        roll: selection.roll,
        pool_size: characters.len(),
        opponent: selection.opponent,
    })
}

/// Handle the match command
pub fn handle_match(args: MatchArgs, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(args.catalog, args.store.db, None)?;
    let mut rng = GameRng::from_option(args.seed);

    let preview = preview_match(&ctx.db, &ctx.catalog, &ctx.config, &args.name, &mut rng)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&preview)?); // tarpaulin::skip
        return Ok(());
    }

    let opponent = &preview.opponent;
    println!(
        "{} would face {} ({} opponent)",
        preview.player_name,
        opponent.label(),
        opponent.source
    );
    if let Some(creator) = &opponent.creator_name {
        println!("  Created by: {}", creator);
    }
    if !opponent.description.is_empty() {
        println!("  {}", opponent.description);
    }
    println!("  Stats: {}", opponent.stats);
    println!(
        "  Tier: {} ({} player characters), roll {:.4}",
        preview.tier, preview.pool_size, preview.roll
    );

    Ok(())
}
