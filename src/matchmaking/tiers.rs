//! Probability tiers and matchmaking configuration.
//!
//! The tier is a deterministic function of how many player characters exist.
//! Each tier carries a weight triple over the three opponent sources; every
//! triple must sum to 1.0 and [`MatchmakingConfig::validate`] rejects a
//! configuration that breaks this.

use crate::cli::types::WinProbability;
use crate::error::{BattleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pool size at which player characters start reappearing.
pub const GROWTH_THRESHOLD: usize = 10;

/// Pool size at which player characters are as common as curated ones.
pub const MATURE_THRESHOLD: usize = 50;

/// Allowed drift when checking that a tier's weights sum to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

pub const EARLY_WEIGHTS: TierWeights = TierWeights::new(0.60, 0.40, 0.00);
pub const GROWTH_WEIGHTS: TierWeights = TierWeights::new(0.45, 0.40, 0.15);
pub const MATURE_WEIGHTS: TierWeights = TierWeights::new(0.30, 0.35, 0.35);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Early,
    Growth,
    Mature,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Early, Tier::Growth, Tier::Mature];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Early => "early",
            Tier::Growth => "growth",
            Tier::Mature => "mature",
        };
        write!(f, "{}", s)
    }
}

/// Probability of drawing each opponent source within one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    pub predefined: f64,
    pub random: f64,
    pub user_character: f64,
}

impl TierWeights {
    pub const fn new(predefined: f64, random: f64, user_character: f64) -> Self {
        Self {
            predefined,
            random,
            user_character,
        }
    }

    pub fn sum(&self) -> f64 {
        self.predefined + self.random + self.user_character
    }

    /// Check each weight lies in [0, 1] and the triple sums to 1.0.
    pub fn validate(&self, tier: Tier) -> Result<()> {
        for weight in [self.predefined, self.random, self.user_character] {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(BattleError::WeightOutOfRange {
                    tier: tier.to_string(),
                    weight,
                });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(BattleError::InvalidTierWeights {
                tier: tier.to_string(),
                sum,
            });
        }
        Ok(())
    }
}

/// Tunable constants for matchmaking and outcome determination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingConfig {
    pub growth_threshold: usize,
    pub mature_threshold: usize,
    pub early: TierWeights,
    pub growth: TierWeights,
    pub mature: TierWeights,
    pub win_probability: WinProbability,
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            growth_threshold: GROWTH_THRESHOLD,
            mature_threshold: MATURE_THRESHOLD,
            early: EARLY_WEIGHTS,
            growth: GROWTH_WEIGHTS,
            mature: MATURE_WEIGHTS,
            win_probability: WinProbability::default(),
        }
    }
}

impl MatchmakingConfig {
    /// Surface configuration defects before any fight runs.
    pub fn validate(&self) -> Result<()> {
        if self.growth_threshold >= self.mature_threshold {
            return Err(BattleError::InvalidThresholds {
                growth: self.growth_threshold,
                mature: self.mature_threshold,
            });
        }
        for tier in Tier::ALL {
            self.weights(tier).validate(tier)?;
        }
        // Re-check in case the struct was built by deserialization
        WinProbability::new(self.win_probability.as_f64())?;
        Ok(())
    }

    pub fn with_win_probability(mut self, win_probability: WinProbability) -> Self {
        self.win_probability = win_probability;
        self
    }

    /// Tier for a given number of player characters.
    pub fn tier_for(&self, pool_size: usize) -> Tier {
        if pool_size < self.growth_threshold {
            Tier::Early
        } else if pool_size < self.mature_threshold {
            Tier::Growth
        } else {
            Tier::Mature
        }
    }

    pub fn weights(&self, tier: Tier) -> TierWeights {
        match tier {
            Tier::Early => self.early,
            Tier::Growth => self.growth,
            Tier::Mature => self.mature,
        }
    }
}
