//! Rarity-weighted catalog of curated opponents.
//!
//! The catalog is a read-only JSON document:
//!
//! ```json
//! {
//!   "characters": [
//!     { "name": "Iron Duke", "title": "Warden of the Gate", "description": "...",
//!       "stats": { "attack": 80, "defense": 95, "speed": 60, "luck": 70, "charisma": 75 },
//!       "rarity": "common", "appearance_prompt": "...", "image_url": "", "image_file": "" }
//!   ],
//!   "rarities": { "common": { "weight": 1.0 }, "rare": { "weight": 2.0 } }
//! }
//! ```
//!
//! Loading never fails: a missing or malformed document yields an empty
//! catalog and callers fall back to procedural generation.

use crate::cli::types::StatBlock;
use crate::core::paths::try_read_to_string;
use crate::models::Portrait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Weight used when an entry's rarity is missing from the rarity mapping.
pub const DEFAULT_RARITY_WEIGHT: f64 = 0.4;

/// Rarity assumed for entries without a rarity tag.
pub const DEFAULT_RARITY: &str = "common";

/// A curated opponent template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: StatBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, alias = "appearance_prompt")]
    pub appearance_hint: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_file: String,
}

impl CatalogEntry {
    pub fn rarity_name(&self) -> &str {
        self.rarity.as_deref().unwrap_or(DEFAULT_RARITY)
    }

    /// Portrait references carried by the template (never inline data).
    pub fn portrait(&self) -> Portrait {
        Portrait {
            image_file: self.image_file.clone(),
            image_url: self.image_url.clone(),
            image_data: String::new(),
        }
    }
}

/// A named rarity tier and its selection weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityClass {
    #[serde(default = "default_rarity_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_rarity_weight() -> f64 {
    DEFAULT_RARITY_WEIGHT
}

/// Curated opponents plus their rarity-to-weight mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub characters: Vec<CatalogEntry>,
    pub rarities: BTreeMap<String, RarityClass>,
}

/// A problem found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    InvalidRarityWeight { rarity: String, weight: f64 },
    UnknownRarity { name: String, rarity: String },
    NonPositiveStats { name: String },
    EmptyName { index: usize },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::InvalidRarityWeight { rarity, weight } => {
                write!(f, "rarity '{}' has invalid weight {}", rarity, weight)
            }
            CatalogIssue::UnknownRarity { name, rarity } => write!(
                f,
                "'{}' uses unknown rarity '{}' (weight {} applies)",
                name, rarity, DEFAULT_RARITY_WEIGHT
            ),
            CatalogIssue::NonPositiveStats { name } => {
                write!(f, "'{}' has a stat that is not positive", name)
            }
            CatalogIssue::EmptyName { index } => write!(f, "entry #{} has an empty name", index),
        }
    }
}

impl Catalog {
    pub fn new(characters: Vec<CatalogEntry>, rarities: BTreeMap<String, RarityClass>) -> Self {
        Self {
            characters,
            rarities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Selection weight for an entry, defaulting to [`DEFAULT_RARITY_WEIGHT`].
    pub fn weight_for(&self, entry: &CatalogEntry) -> f64 {
        self.rarities
            .get(entry.rarity_name())
            .map(|r| r.weight)
            .unwrap_or(DEFAULT_RARITY_WEIGHT)
    }

    /// Weights usable for sampling; invalid weights collapse to zero.
    ///
    /// Entries that cannot be served as an opponent (blank name or a
    /// non-positive stat) are never drawn.
    pub fn sampling_weights(&self) -> Vec<f64> {
        self.characters
            .iter()
            .map(|entry| {
                if entry.name.trim().is_empty() || !entry.stats.is_positive() {
                    return 0.0;
                }
                let w = self.weight_for(entry);
                if w.is_finite() && w > 0.0 {
                    w
                } else {
                    0.0
                }
            })
            .collect()
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for (rarity, class) in &self.rarities {
            if !class.weight.is_finite() || class.weight <= 0.0 {
                issues.push(CatalogIssue::InvalidRarityWeight {
                    rarity: rarity.clone(),
                    weight: class.weight,
                });
            }
        }

        for (index, entry) in self.characters.iter().enumerate() {
            if entry.name.trim().is_empty() {
                issues.push(CatalogIssue::EmptyName { index });
                continue;
            }
            if !self.rarities.contains_key(entry.rarity_name()) {
                issues.push(CatalogIssue::UnknownRarity {
                    name: entry.name.clone(),
                    rarity: entry.rarity_name().to_string(),
                });
            }
            if !entry.stats.is_positive() {
                issues.push(CatalogIssue::NonPositiveStats {
                    name: entry.name.clone(),
                });
            }
        }

        issues
    }
}

/// Parse a catalog document, returning an empty catalog on malformed input.
pub fn parse_pool(contents: &str) -> Catalog {
    match serde_json::from_str::<Catalog>(contents) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("Ignoring malformed opponent catalog: {}", e);
            Catalog::default()
        }
    }
}

/// Load the curated pool from disk. Safe to call on every fight.
pub fn load_pool(path: &Path) -> Catalog {
    match try_read_to_string(path) {
        Some(contents) => {
            let catalog = parse_pool(&contents);
            debug!(
                "Loaded {} curated opponents and {} rarities from {}",
                catalog.characters.len(),
                catalog.rarities.len(),
                path.display()
            );
            catalog
        }
        None => {
            warn!("Opponent catalog not found at {}", path.display());
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "characters": [
            {"name": "Iron Duke", "title": "Warden", "description": "Stubborn.",
             "stats": {"attack": 80, "defense": 95, "speed": 60, "luck": 70, "charisma": 75},
             "rarity": "common"},
            {"name": "Shadow Fang", "title": "Night Blade", "description": "Quick.",
             "stats": {"attack": 90, "defense": 60, "speed": 95, "luck": 70, "charisma": 65},
             "rarity": "rare", "appearance_prompt": "hooded rogue", "image_file": "fang.png"}
        ],
        "rarities": {"common": {"weight": 1.0}, "rare": {"weight": 2.0, "label": "Rare"}}
    }"#;

    #[test]
    fn test_parse_pool() {
        let catalog = parse_pool(SAMPLE);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.characters[1].appearance_hint, "hooded rogue");
        assert_eq!(catalog.characters[1].image_file, "fang.png");
        assert_eq!(catalog.rarities["rare"].label.as_deref(), Some("Rare"));
    }

    #[test]
    fn test_malformed_pool_is_empty() {
        assert!(parse_pool("{not json").is_empty());
        assert!(parse_pool(r#"{"characters": []}"#).rarities.is_empty());
        assert!(parse_pool(r#"{"rarities": {}}"#).is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let catalog = load_pool(Path::new("/no/such/catalog.json"));
        assert!(catalog.is_empty());
        assert!(catalog.rarities.is_empty());
    }

    #[test]
    fn test_load_pool_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_pool(file.path());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.characters[0].name, "Iron Duke");
    }

    #[test]
    fn test_weight_defaults() {
        let mut catalog = parse_pool(SAMPLE);
        assert_eq!(catalog.weight_for(&catalog.characters[0]), 1.0);
        assert_eq!(catalog.weight_for(&catalog.characters[1]), 2.0);

        catalog.characters[0].rarity = Some("mythic".to_string());
        assert_eq!(catalog.weight_for(&catalog.characters[0]), DEFAULT_RARITY_WEIGHT);

        // No tag means "common"
        catalog.characters[0].rarity = None;
        assert_eq!(catalog.weight_for(&catalog.characters[0]), 1.0);
    }

    #[test]
    fn test_sampling_weights_zero_out_invalid() {
        let mut catalog = parse_pool(SAMPLE);
        catalog.rarities.get_mut("rare").unwrap().weight = f64::NAN;
        assert_eq!(catalog.sampling_weights(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_entry_without_stats_is_never_drawn() {
        let catalog = parse_pool(
            r#"{
            "characters": [
                {"name": "Iron Duke", "rarity": "common"},
                {"name": "Shadow Fang", "rarity": "common",
                 "stats": {"attack": 90, "defense": 60, "speed": 95, "luck": 70, "charisma": 65}},
                {"name": "  ", "rarity": "common",
                 "stats": {"attack": 90, "defense": 60, "speed": 95, "luck": 70, "charisma": 65}}
            ],
            "rarities": {"common": {"weight": 1.0}}
        }"#,
        );

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.characters[0].stats, StatBlock::default());
        assert_eq!(catalog.sampling_weights(), vec![0.0, 1.0, 0.0]);
        assert_eq!(
            catalog.validate(),
            vec![
                CatalogIssue::NonPositiveStats {
                    name: "Iron Duke".to_string()
                },
                CatalogIssue::EmptyName { index: 2 },
            ]
        );
    }

    #[test]
    fn test_rarity_without_weight_uses_default() {
        let catalog = parse_pool(
            r#"{
            "characters": [
                {"name": "Iron Duke", "rarity": "common",
                 "stats": {"attack": 80, "defense": 95, "speed": 60, "luck": 70, "charisma": 75}}
            ],
            "rarities": {"common": {"label": "Common"}}
        }"#,
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rarities["common"].weight, DEFAULT_RARITY_WEIGHT);
        assert_eq!(catalog.rarities["common"].label.as_deref(), Some("Common"));
        assert_eq!(catalog.sampling_weights(), vec![DEFAULT_RARITY_WEIGHT]);
    }

    #[test]
    fn test_validate() {
        let mut catalog = parse_pool(SAMPLE);
        assert!(catalog.validate().is_empty());

        catalog.rarities.get_mut("common").unwrap().weight = -1.0;
        catalog.characters[1].rarity = Some("mythic".to_string());
        catalog.characters[1].stats.luck = 0;

        let issues = catalog.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&CatalogIssue::UnknownRarity {
            name: "Shadow Fang".to_string(),
            rarity: "mythic".to_string(),
        }));
        assert!(issues[0].to_string().contains("invalid weight"));
    }

    #[test]
    fn test_entry_portrait() {
        let catalog = parse_pool(SAMPLE);
        let portrait = catalog.characters[1].portrait();
        assert_eq!(portrait.image_file, "fang.png");
        assert!(portrait.image_data.is_empty());
    }
}
