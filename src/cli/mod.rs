//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Seed, WinProbability};

/// Storage location shared by every command that touches the store
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// SQLite store path (or set `NAME_BATTLE_DB` env var).
    #[clap(long)]
    pub db: Option<PathBuf>,
}

/// Inputs shared by the commands that run matchmaking
#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    /// The player's typed name.
    pub name: String,

    /// Seed for reproducible opponent selection and outcome.
    #[clap(long, short)]
    pub seed: Option<Seed>,

    /// Curated opponent catalog (or set `NAME_BATTLE_CATALOG` env var).
    #[clap(long, short)]
    pub catalog: Option<PathBuf>,

    #[clap(flatten)]
    pub store: StoreArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fight an opponent and record the result.
    ///
    /// The winner is decided before the story is written. A winning player
    /// with a portrait joins the opponent pool.
    Fight {
        #[clap(flatten)]
        args: MatchArgs,

        /// Probability that the player wins (0.0 - 1.0).
        #[clap(long, short = 'w')]
        win_rate: Option<WinProbability>,

        /// Skip portrait rendering; the player will not be promoted.
        #[clap(long)]
        no_portraits: bool,

        /// Output the fight as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Preview which opponent a name would be matched against, without fighting.
    Match {
        #[clap(flatten)]
        args: MatchArgs,

        /// Output the selection as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// List recent battles and the overall win/loss record.
    History {
        #[clap(flatten)]
        store: StoreArgs,

        /// Number of battles to show (all when omitted).
        #[clap(long, short)]
        limit: Option<u32>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List promoted player characters.
    Characters {
        #[clap(flatten)]
        store: StoreArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the matchmaking tier table and the active tier.
    Tiers {
        #[clap(flatten)]
        store: StoreArgs,
    },

    /// List curated opponents with their selection weights and any defects.
    Catalog {
        /// Curated opponent catalog (or set `NAME_BATTLE_CATALOG` env var).
        #[clap(long, short)]
        catalog: Option<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "name-battle", about = "Name Battle: type a name, fight an opponent")]
pub struct NameBattle {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
