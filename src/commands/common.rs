//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use std::path::PathBuf;

use log::{debug, warn};

use crate::{
    core::{catalog_path, database_path, load_pool, Catalog},
    matchmaking::MatchmakingConfig,
    storage::CharacterDatabase,
    Result, WinProbability,
};

/// Context containing common resources needed by the fight and match commands
pub struct CommandContext {
    pub db: CharacterDatabase,
    pub catalog: Catalog,
    pub config: MatchmakingConfig,
}

impl CommandContext {
    /// Validate configuration, open the store and load the curated pool.
    ///
    /// Configuration defects are fatal here, before any fight runs. A missing
    /// or malformed catalog is not, and catalog issues are only logged.
    pub fn new(
        catalog: Option<PathBuf>,
        db: Option<PathBuf>,
        win_rate: Option<WinProbability>,
    ) -> Result<Self> {
        let mut config = MatchmakingConfig::default();
        if let Some(p) = win_rate {
            config = config.with_win_probability(p);
        }
        config.validate()?;

        let db = open_store(db)?;
        let catalog = load_pool(&catalog_path(catalog));
        for issue in catalog.validate() {
            warn!("Catalog issue: {}", issue);
        }

        Ok(Self {
            db,
            catalog,
            config,
        })
    }
}

/// Open the SQLite store at the resolved path, creating it on first use.
pub fn open_store(db: Option<PathBuf>) -> Result<CharacterDatabase> {
    let path = database_path(db);
    debug!("Opening character store at {}", path.display());
    Ok(CharacterDatabase::open(&path)?)
}
