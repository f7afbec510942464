//! Newtypes for values passed on the command line.

use crate::error::{BattleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seed for the injected random source.
///
/// The same seed replays the same matchmaking roll, opponent and outcome.
///
/// # Examples
///
/// ```rust
/// use name_battle::Seed;
///
/// let seed: Seed = "42".parse().unwrap();
/// assert_eq!(seed.as_u64(), 42);
/// assert_eq!(seed.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u64);

impl Seed {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Probability that the human player wins, checked to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinProbability(f64);

impl WinProbability {
    /// Slight player favor. A tunable constant, not derived from stats.
    pub const DEFAULT: f64 = 0.55;

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BattleError::InvalidWinProbability { value })
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for WinProbability {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for WinProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for WinProbability {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim().parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parse() {
        assert_eq!(" 7 ".parse::<Seed>().unwrap(), Seed::new(7));
        assert!(matches!(
            "seven".parse::<Seed>(),
            Err(BattleError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_win_probability_bounds() {
        assert!(WinProbability::new(0.0).is_ok());
        assert!(WinProbability::new(1.0).is_ok());
        assert!(WinProbability::new(-0.1).is_err());
        assert!(WinProbability::new(1.01).is_err());
        assert!(WinProbability::new(f64::NAN).is_err());
    }

    #[test]
    fn test_win_probability_default() {
        assert_eq!(WinProbability::default().as_f64(), 0.55);
        assert_eq!("0.7".parse::<WinProbability>().unwrap().as_f64(), 0.7);
    }
}
