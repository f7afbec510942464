//! Tier table command implementation

use std::path::PathBuf;

use crate::{
    matchmaking::{MatchmakingConfig, Tier},
    Result,
};

use super::common::open_store;

fn pool_range(config: &MatchmakingConfig, tier: Tier) -> String {
    match tier {
        Tier::Early => format!("0-{}", config.growth_threshold.saturating_sub(1)),
        Tier::Growth => format!(
            "{}-{}",
            config.growth_threshold,
            config.mature_threshold.saturating_sub(1)
        ),
        Tier::Mature => format!("{}+", config.mature_threshold),
    }
}

/// Render the tier table, marking the tier active for `pool_size`.
pub fn tier_table(config: &MatchmakingConfig, pool_size: usize) -> Vec<String> {
    let active = config.tier_for(pool_size);
    let mut lines = vec![format!(
        "  {:<8} {:>10} {:>11} {:>7} {:>15}",
        "tier", "pool size", "predefined", "random", "user_character"
    )];

    for tier in Tier::ALL {
        let w = config.weights(tier);
        lines.push(format!(
            "{} {:<8} {:>10} {:>10.0}% {:>6.0}% {:>14.0}%",
            if tier == active { "*" } else { " " },
            tier.to_string(),
            pool_range(config, tier),
            w.predefined * 100.0,
            w.random * 100.0,
            w.user_character * 100.0
        ));
    }
    lines
}

/// Handle the tiers command
pub fn handle_tiers(db: Option<PathBuf>) -> Result<()> {
    let config = MatchmakingConfig::default();
    config.validate()?;

    let store = open_store(db)?;
    let pool_size = store.character_count()?;

    for line in tier_table(&config, pool_size) {
        println!("{}", line);
    }
    println!(
        "\n{} player characters; active tier: {}; player win probability: {}",
        pool_size,
        config.tier_for(pool_size),
        config.win_probability
    );

    Ok(())
}
