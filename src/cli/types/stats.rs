//! Fighter stat blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the five stat axes, in storage order.
pub const STAT_NAMES: [&str; 5] = ["attack", "defense", "speed", "luck", "charisma"];

/// Five flavor stats carried by every fighter.
///
/// Stats are internally consistent per fighter but never normalized across
/// fighters, and they do not influence who wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBlock {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub luck: u32,
    pub charisma: u32,
}

impl StatBlock {
    pub fn new(attack: u32, defense: u32, speed: u32, luck: u32, charisma: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
            luck,
            charisma,
        }
    }

    pub fn from_array(values: [u32; 5]) -> Self {
        let [attack, defense, speed, luck, charisma] = values;
        Self::new(attack, defense, speed, luck, charisma)
    }

    pub fn to_array(&self) -> [u32; 5] {
        [self.attack, self.defense, self.speed, self.luck, self.charisma]
    }

    pub fn total(&self) -> u32 {
        self.to_array().iter().sum()
    }

    /// True when every axis is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.to_array().iter().all(|v| *v > 0)
    }

    /// Pairs of (axis name, value).
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> {
        STAT_NAMES.into_iter().zip(self.to_array())
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ATK {} / DEF {} / SPD {} / LCK {} / CHA {}",
            self.attack, self.defense, self.speed, self.luck, self.charisma
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_positive() {
        let stats = StatBlock::new(80, 70, 75, 80, 75);
        assert_eq!(stats.total(), 380);
        assert!(stats.is_positive());
        assert!(!StatBlock::new(80, 0, 75, 80, 75).is_positive());
    }

    #[test]
    fn test_deserialize_from_stat_mapping() {
        let stats: StatBlock = serde_json::from_str(
            r#"{"attack": 90, "defense": 60, "speed": 85, "luck": 70, "charisma": 75}"#,
        )
        .unwrap();
        assert_eq!(stats.to_array(), [90, 60, 85, 70, 75]);
    }

    #[test]
    fn test_iter_names_match_axes() {
        let names: Vec<_> = StatBlock::default().iter().map(|(n, _)| n).collect();
        assert_eq!(names, STAT_NAMES.to_vec());
    }

    #[test]
    fn test_display() {
        let stats = StatBlock::new(1, 2, 3, 4, 5);
        assert_eq!(stats.to_string(), "ATK 1 / DEF 2 / SPD 3 / LCK 4 / CHA 5");
    }
}
