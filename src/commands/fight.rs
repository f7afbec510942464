//! Fight command implementation

use std::path::PathBuf;

use log::warn;
use serde::Serialize;

use crate::{
    battle::{
        collaborators::PortraitArtist, conclude_battle, prepare_battle, resolve_battle,
        BattleResult, Collaborators, MonogramArtist, NoPortraits, PreparedBattle,
        ScriptedNarrator, SilentAnnouncer,
    },
    core::{Catalog, GameRng},
    matchmaking::{Matchmaker, MatchmakingConfig, Tier},
    storage::{BattleStore, PlayerCharacter},
    Result, Seed, Side, WinProbability,
};

use super::common::CommandContext;

/// Attempts at dressing a prepared fight before giving up.
pub const RESOLVE_ATTEMPTS: u32 = 3;

/// Parameters for the fight command
#[derive(Debug, Clone)]
pub struct FightParams {
    pub name: String,
    pub seed: Option<Seed>,
    pub catalog: Option<PathBuf>,
    pub db: Option<PathBuf>,
    pub win_rate: Option<WinProbability>,
    pub no_portraits: bool,
    pub as_json: bool,
}

/// Everything one fight produced, as shown to the player.
#[derive(Debug, Clone, Serialize)]
pub struct FightReport {
    pub tier: Tier,
    pub roll: f64,
    pub seed: Option<u64>,
    pub battle: BattleResult,
    pub promoted: Option<PlayerCharacter>,
}

/// Dress a prepared fight, retrying failed narratives. The winner stays fixed
/// across attempts.
pub fn resolve_with_retry(
    prepared: &PreparedBattle,
    collaborators: &Collaborators<'_>,
    attempts: u32,
) -> Result<BattleResult> {
    let mut attempt = 1;
    loop {
        match resolve_battle(prepared, collaborators) {
            Ok(result) => return Ok(result),
            Err(e) if attempt < attempts => {
                warn!("Attempt {} to resolve fight failed: {}", attempt, e);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Match, decide, dress and record one fight.
pub fn run_fight<S: BattleStore + ?Sized>(
    store: &mut S,
    catalog: &Catalog,
    config: &MatchmakingConfig,
    player_name: &str,
    rng: &mut GameRng,
    collaborators: &Collaborators<'_>,
) -> Result<FightReport> {
    let characters = store.characters()?;
    let selection =
        Matchmaker::new(config, catalog).select(player_name.trim(), &characters, rng);

    let prepared = prepare_battle(player_name, selection.opponent, config.win_probability, rng)?;
    let battle = resolve_with_retry(&prepared, collaborators, RESOLVE_ATTEMPTS)?;

    let conclusion = conclude_battle(store, battle.clone())?;
    Ok(FightReport {
        tier: selection.tier,
        roll: selection.roll,
        seed: rng.seed,
        battle,
        promoted: conclusion.promoted,
    })
}

fn print_report(report: &FightReport) {
    let battle = &report.battle;
    println!(
        "{} vs {} [{} opponent, {} tier]",
        battle.player.label(),
        battle.opponent.label(),
        battle.opponent.source,
        report.tier
    );
    println!("  You:      {}", battle.player.stats);
    println!("  Opponent: {}", battle.opponent.stats);
    println!();
    println!("{}", battle.story);
    println!();
    if !battle.victory_line.is_empty() {
        println!("\"{}\"", battle.victory_line);
    }

    match battle.winner {
        Side::Player => println!("✓ {} wins!", battle.player.name),
        Side::Opponent => println!("✗ {} wins.", battle.opponent.name),
    }
    if let Some(character) = &report.promoted {
        println!("★ {} joins the arena as a future opponent.", character.name);
    }
    if let Some(seed) = report.seed {
        println!("Seed: {}", seed);
    }
}

/// Handle the fight command
pub fn handle_fight(params: FightParams) -> Result<()> {
    let mut ctx = CommandContext::new(params.catalog, params.db, params.win_rate)?;
    let mut rng = GameRng::from_option(params.seed);

    let artist: &dyn PortraitArtist = if params.no_portraits {
        &NoPortraits
    } else {
        &MonogramArtist
    };
    let collaborators = Collaborators {
        narrator: &ScriptedNarrator,
        artist,
        announcer: Some(&SilentAnnouncer),
    };

    let report = run_fight(
        &mut ctx.db,
        &ctx.catalog,
        &ctx.config,
        &params.name,
        &mut rng,
        &collaborators,
    )?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        print_report(&report); // tarpaulin::skip
    }

    Ok(())
}
