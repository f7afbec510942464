//! Tiered opponent selection.
//!
//! One uniform roll `r` in [0, 1) is compared against the cumulative tier
//! weights in the order user character, predefined, random. A bucket that is
//! rolled but empty falls through to the next one, ending at procedural
//! generation, so selection never fails.

use super::generator;
use super::tiers::{MatchmakingConfig, Tier, TierWeights};
use crate::cli::types::Source;
use crate::core::catalog::{Catalog, CatalogEntry};
use crate::models::Fighter;
use crate::storage::PlayerCharacter;
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

/// A chosen opponent plus the decision inputs that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub opponent: Fighter,
    pub tier: Tier,
    pub roll: f64,
}

/// Picks opponents from the curated catalog, the player-character pool, or
/// the procedural generator.
pub struct Matchmaker<'a> {
    config: &'a MatchmakingConfig,
    catalog: &'a Catalog,
}

impl<'a> Matchmaker<'a> {
    pub fn new(config: &'a MatchmakingConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    /// Select an opponent for `player_name`, drawing the roll from `rng`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        player_name: &str,
        characters: &[PlayerCharacter],
        rng: &mut R,
    ) -> Selection {
        let roll: f64 = rng.gen();
        self.resolve(player_name, characters, roll, rng)
    }

    /// Select with a caller-supplied roll. `rng` is only used to pick within
    /// the chosen bucket.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        player_name: &str,
        characters: &[PlayerCharacter],
        roll: f64,
        rng: &mut R,
    ) -> Selection {
        let tier = self.config.tier_for(characters.len());
        let TierWeights {
            predefined,
            user_character,
            ..
        } = self.config.weights(tier);

        debug!(
            "Matchmaking roll {:.4} in {} tier ({} player characters)",
            roll,
            tier,
            characters.len()
        );

        let opponent = self
            .pick_user_character(roll, user_character, player_name, characters, rng)
            .or_else(|| self.pick_predefined(roll, user_character + predefined, rng))
            .unwrap_or_else(|| generator::generate(rng));

        debug!("Matched {} from {} source", opponent.name, opponent.source);

        Selection {
            opponent,
            tier,
            roll,
        }
    }

    fn pick_user_character<R: Rng + ?Sized>(
        &self,
        roll: f64,
        threshold: f64,
        player_name: &str,
        characters: &[PlayerCharacter],
        rng: &mut R,
    ) -> Option<Fighter> {
        if roll >= threshold {
            return None;
        }
        // Exact, case-sensitive self-exclusion
        let eligible: Vec<&PlayerCharacter> =
            characters.iter().filter(|c| c.name != player_name).collect();
        eligible.choose(rng).map(|c| materialize_user_character(c))
    }

    fn pick_predefined<R: Rng + ?Sized>(
        &self,
        roll: f64,
        threshold: f64,
        rng: &mut R,
    ) -> Option<Fighter> {
        if roll >= threshold {
            return None;
        }
        weighted_choice(self.catalog, rng).map(materialize_predefined)
    }
}

/// Rarity-weighted draw from the catalog. `None` when nothing is drawable.
pub fn weighted_choice<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    rng: &mut R,
) -> Option<&'c CatalogEntry> {
    if catalog.is_empty() {
        return None;
    }
    let index = WeightedIndex::new(catalog.sampling_weights()).ok()?;
    catalog.characters.get(index.sample(rng))
}

fn materialize_user_character(record: &PlayerCharacter) -> Fighter {
    Fighter {
        name: record.name.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        portrait: record.portrait.clone(),
        stats: record.stats,
        source: Source::UserCharacter,
        creator_name: Some(record.creator_name.clone()),
        appearance_hint: String::new(),
    }
}

fn materialize_predefined(entry: &CatalogEntry) -> Fighter {
    Fighter {
        name: entry.name.clone(),
        title: entry.title.clone(),
        description: entry.description.clone(),
        portrait: entry.portrait(),
        stats: entry.stats,
        source: Source::Predefined,
        creator_name: None,
        appearance_hint: entry.appearance_hint.clone(),
    }
}
