//! Name Battle Library
//!
//! The game core of a party game where a player types a name and fights a
//! single AI-dressed opponent.
//!
//! ## Features
//!
//! - **Curated Pool**: Rarity-weighted catalog of predefined opponents
//! - **Procedural Opponents**: Generated names, titles and 380-point stat budgets
//! - **Tiered Matchmaking**: Source mix shifts as the player-character pool grows
//! - **Promotion**: Winning players with a portrait join the opponent pool
//! - **Outcome Determination**: The winner is decided before any narrative exists
//! - **Battle History**: Append-only SQLite storage of every fight
//!
//! ## Quick Start
//!
//! ```rust
//! use name_battle::{
//!     battle::{prepare_battle, resolve_battle, Collaborators, MonogramArtist, ScriptedNarrator},
//!     core::{Catalog, GameRng},
//!     matchmaking::{Matchmaker, MatchmakingConfig},
//!     Side,
//! };
//!
//! # fn example() -> name_battle::Result<()> {
//! let config = MatchmakingConfig::default();
//! let catalog = Catalog::default();
//! let mut rng = GameRng::from_seed(42);
//!
//! let selection = Matchmaker::new(&config, &catalog).select("Alice", &[], &mut rng);
//! let prepared = prepare_battle("Alice", selection.opponent, config.win_probability, &mut rng)?;
//! let collaborators = Collaborators {
//!     narrator: &ScriptedNarrator,
//!     artist: &MonogramArtist,
//!     announcer: None,
//! };
//! let result = resolve_battle(&prepared, &collaborators)?;
//! assert!(matches!(result.winner, Side::Player | Side::Opponent));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NAME_BATTLE_CATALOG=data/predefined_opponents.json
//! export NAME_BATTLE_DB=/tmp/characters.db
//! ```

pub mod battle;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod lifecycle;
pub mod matchmaking;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Seed, Side, Source, StatBlock, WinProbability};
pub use error::{BattleError, Result};
pub use models::{Fighter, Portrait, PortraitRef};

pub const CATALOG_ENV_VAR: &str = "NAME_BATTLE_CATALOG";
pub const DATABASE_ENV_VAR: &str = "NAME_BATTLE_DB";
