//! Procedural opponent generation.
//!
//! Names are assembled from three word pools using one of three templates.
//! The title is sampled independently, so name and title only loosely agree.

use crate::cli::types::{Source, StatBlock};
use crate::models::Fighter;
use rand::seq::SliceRandom;
use rand::Rng;

/// Total the five stats are rescaled towards.
pub const STAT_BUDGET: u32 = 380;

/// Inclusive range each raw stat is drawn from before rescaling.
pub const RAW_STAT_MIN: u32 = 50;
pub const RAW_STAT_MAX: u32 = 95;

pub const PREFIXES: &[&str] = &[
    "Blazing", "Shadow", "Thunder", "Frost", "Golden", "Dark", "Storm", "Iron", "Secret",
    "Ancient", "Abyssal", "Sky", "Earthen", "Silver", "Holy", "Cursed", "Forgotten",
    "Eternal",
];

pub const CORES: &[&str] = &[
    "Swordsman", "Mage", "Archer", "Knight", "Assassin", "Alchemist", "Druid", "Monk", "Sage",
    "Hunter", "Pirate", "Ninja", "Guardian", "Destroyer", "Wanderer", "Prophet",
];

pub const SUFFIXES: &[&str] = &[
    "Raiden", "Arkas", "Selena", "Morgan", "Chiron", "Evan", "Rian", "Taris", "Nova", "Zeros",
    "Lumia", "Kandra", "Iris", "Belion", "Kronos", "Terra",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameTemplate {
    PrefixSuffix,
    CoreSuffix,
    PrefixCore,
}

const NAME_TEMPLATES: [NameTemplate; 3] = [
    NameTemplate::PrefixSuffix,
    NameTemplate::CoreSuffix,
    NameTemplate::PrefixCore,
];

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn build_title<R: Rng + ?Sized>(prefix: &str, core: &str, rng: &mut R) -> String {
    match rng.gen_range(0..5) {
        0 => format!("Wandering {}", core),
        1 => format!("{} Guardian", prefix),
        2 => format!("Legendary {}", core),
        3 => "Unknown Challenger".to_string(),
        _ => format!("{} Warrior", prefix),
    }
}

/// Draw five raw stats and rescale them so they sum to roughly [`STAT_BUDGET`].
///
/// Rounding lets the realized sum drift by a few points; this is not corrected.
pub fn roll_stat_budget<R: Rng + ?Sized>(rng: &mut R) -> StatBlock {
    let raw: [u32; 5] = std::array::from_fn(|_| rng.gen_range(RAW_STAT_MIN..=RAW_STAT_MAX));
    rescale(raw, STAT_BUDGET)
}

fn rescale(raw: [u32; 5], budget: u32) -> StatBlock {
    let total: u32 = raw.iter().sum();
    StatBlock::from_array(
        raw.map(|v| (f64::from(v) * f64::from(budget) / f64::from(total)).round() as u32),
    )
}

/// Synthesize a random opponent. No persisted state, no external input.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Fighter {
    let prefix = pick(PREFIXES, rng);
    let core = pick(CORES, rng);
    let suffix = pick(SUFFIXES, rng);

    let name = match NAME_TEMPLATES.choose(rng).copied().unwrap_or(NameTemplate::PrefixSuffix) {
        NameTemplate::PrefixSuffix => format!("{} {}", prefix, suffix),
        NameTemplate::CoreSuffix => format!("{} {}", core, suffix),
        NameTemplate::PrefixCore => format!("{} {}", prefix, core),
    };

    let mut fighter = Fighter::new(name, Source::Random);
    fighter.title = build_title(prefix, core, rng);
    fighter.stats = roll_stat_budget(rng);
    fighter
}
