//! Opponent matchmaking and outcome determination
//!
//! - `tiers`: probability tiers keyed on the player-character pool size
//! - `generator`: procedural names, titles and stat budgets
//! - `selector`: the tiered source roll and bucket resolution
//! - `outcome`: the weighted coin flip deciding the winner

pub mod generator;
pub mod outcome;
pub mod selector;
pub mod tiers;


pub use generator::{generate, roll_stat_budget, STAT_BUDGET};
pub use outcome::{decide, decide_side, side_for_roll};
pub use selector::{weighted_choice, Matchmaker, Selection};
pub use tiers::{
    MatchmakingConfig, Tier, TierWeights, EARLY_WEIGHTS, GROWTH_THRESHOLD, GROWTH_WEIGHTS,
    MATURE_THRESHOLD, MATURE_WEIGHTS,
};
