//! Fight orchestration.
//!
//! A fight runs in three steps:
//! 1. [`prepare_battle`] decides the winner and freezes it.
//! 2. [`resolve_battle`] asks the collaborators to dress the decided outcome.
//!    It can be retried after a collaborator failure and never re-rolls.
//! 3. [`conclude_battle`] appends the history entry and applies promotion in
//!    one write.

pub mod collaborators;


use crate::cli::types::{Side, Source, StatBlock, WinProbability};
use crate::error::{BattleError, Result};
use crate::lifecycle::{self, BattleOutcome};
use crate::matchmaking::{outcome, roll_stat_budget};
use crate::models::{Fighter, Portrait};
use crate::storage::{BattleRecord, BattleStore, PlayerCharacter};
use collaborators::{Announcer, Narrator, PortraitArtist, Story, StoryRequest};
use log::{info, warn};
use rand::Rng;
use serde::Serialize;

pub use collaborators::{MonogramArtist, NoPortraits, ScriptedNarrator, SilentAnnouncer};

pub const DEFAULT_PLAYER_TITLE: &str = "Challenger";
pub const DEFAULT_OPPONENT_TITLE: &str = "Unknown Warrior";
pub const DEFAULT_APPEARANCE: &str = "fantasy warrior";
pub const ROUND_COUNT: usize = 3;

/// A matched fight whose winner has already been decided.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBattle {
    pub player_name: String,
    pub player_stats: StatBlock,
    pub opponent: Fighter,
    pub winner: Side,
}

impl PreparedBattle {
    pub fn winner_name(&self) -> &str {
        match self.winner {
            Side::Player => &self.player_name,
            Side::Opponent => &self.opponent.name,
        }
    }
}

/// Decide the outcome before any narrative is requested.
pub fn prepare_battle<R: Rng + ?Sized>(
    player_name: &str,
    opponent: Fighter,
    win_probability: WinProbability,
    rng: &mut R,
) -> Result<PreparedBattle> {
    let player_name = player_name.trim();
    if player_name.is_empty() {
        return Err(BattleError::EmptyPlayerName);
    }

    let winner = outcome::decide_side(win_probability, rng);
    Ok(PreparedBattle {
        player_name: player_name.to_string(),
        player_stats: roll_stat_budget(rng),
        opponent,
        winner,
    })
}

/// The services that turn a decided outcome into a presentable fight.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub narrator: &'a dyn Narrator,
    pub artist: &'a dyn PortraitArtist,
    pub announcer: Option<&'a dyn Announcer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleRound {
    pub number: u8,
    pub description: String,
}

/// A fully dressed fight, ready to display and record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleResult {
    pub player: Fighter,
    pub opponent: Fighter,
    pub winner: Side,
    pub rounds: Vec<BattleRound>,
    pub victory_line: String,
    pub battle_summary: String,
    pub story: String,
    #[serde(skip)]
    pub audio: Vec<u8>,
}

impl BattleResult {
    pub fn winner_name(&self) -> &str {
        match self.winner {
            Side::Player => &self.player.name,
            Side::Opponent => &self.opponent.name,
        }
    }

    pub fn outcome(&self) -> BattleOutcome<'_> {
        BattleOutcome {
            player: &self.player,
            winner: self.winner,
            summary: &self.battle_summary,
        }
    }

    pub fn to_record(&self) -> BattleRecord {
        BattleRecord {
            player_name: self.player.name.clone(),
            opponent_name: self.opponent.name.clone(),
            result: self.winner,
            player_title: self.player.title.clone(),
            opponent_title: self.opponent.title.clone(),
            opponent_source: self.opponent.source,
            fought_at: 0,
        }
    }
}

fn non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
}

fn render_portrait(artist: &dyn PortraitArtist, name: &str, hint: &str) -> Portrait {
    match artist.render(name, hint) {
        Ok(Some(data)) => Portrait::inline(data),
        Ok(None) => Portrait::default(),
        Err(e) => {
            warn!("Portrait for {} failed: {}", name, e);
            Portrait::default()
        }
    }
}

fn assemble_story(rounds: &[BattleRound]) -> String {
    rounds
        .iter()
        .map(|r| format!("[ Round {} ]\n{}", r.number, r.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Dress a prepared fight. Only narrative failure is an error; portrait and
/// audio failures degrade to empty values.
pub fn resolve_battle(
    prepared: &PreparedBattle,
    collaborators: &Collaborators<'_>,
) -> Result<BattleResult> {
    let mut opponent = prepared.opponent.clone();

    let story: Story = collaborators.narrator.narrate(&StoryRequest {
        player_name: &prepared.player_name,
        opponent_name: &opponent.name,
        opponent_title: &opponent.title,
        winner_name: prepared.winner_name(),
    })?;

    let mut player = Fighter::new(prepared.player_name.clone(), Source::Player);
    player.title = non_empty(&[story.player_title.as_str(), DEFAULT_PLAYER_TITLE]).to_string();
    player.stats = prepared.player_stats;
    player.appearance_hint =
        non_empty(&[story.player_appearance.as_str(), DEFAULT_APPEARANCE]).to_string();
    player.portrait =
        render_portrait(collaborators.artist, &player.name, &player.appearance_hint);

    if opponent.title.is_empty() {
        opponent.title =
            non_empty(&[story.opponent_title.as_str(), DEFAULT_OPPONENT_TITLE]).to_string();
    }

    // A curated file/url or a stored character's image wins over rendering
    if opponent.portrait.is_empty() {
        let hint = non_empty(&[
            opponent.appearance_hint.as_str(),
            story.opponent_appearance.as_str(),
            DEFAULT_APPEARANCE,
        ])
        .to_string();
        opponent.portrait = render_portrait(collaborators.artist, &opponent.name, &hint);
    }

    let rounds: Vec<BattleRound> = (0..ROUND_COUNT)
        .map(|i| BattleRound {
            number: (i + 1) as u8,
            description: story.rounds.get(i).cloned().unwrap_or_default(),
        })
        .collect();
    let full_story = assemble_story(&rounds);

    let winner_name = prepared.winner_name();
    let audio = match collaborators.announcer {
        Some(announcer) => {
            match announcer.announce(&full_story, &story.victory_line, winner_name) {
                Ok(audio) => audio.unwrap_or_default(),
                Err(e) => {
                    warn!("Narration failed: {}", e);
                    Vec::new()
                }
            }
        }
        None => Vec::new(),
    };

    Ok(BattleResult {
        player,
        opponent,
        winner: prepared.winner,
        rounds,
        victory_line: story.victory_line,
        battle_summary: story.battle_summary,
        story: full_story,
        audio,
    })
}

/// Durable effects of one recorded fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conclusion {
    pub record: BattleRecord,
    pub promoted: Option<PlayerCharacter>,
}

/// Record the fight and apply promotion. Consumes the result so a fight can
/// only be recorded once.
///
/// The history row and the promotion are written together: on error neither
/// is stored.
pub fn conclude_battle<S: BattleStore + ?Sized>(
    store: &mut S,
    result: BattleResult,
) -> Result<Conclusion> {
    let (record, promoted) =
        lifecycle::record_and_promote(store, &result.to_record(), &result.outcome())?;
    info!(
        "Recorded {} vs {}: {} wins",
        record.player_name,
        record.opponent_name,
        result.winner_name()
    );
    Ok(Conclusion { record, promoted })
}
