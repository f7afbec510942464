//! Source categories and battle sides.

use crate::error::BattleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a fighter came from.
///
/// Opponents are always one of `Predefined`, `Random` or `UserCharacter`.
/// `Player` tags the human challenger in a resolved battle.
///
/// # Examples
///
/// ```rust
/// use name_battle::Source;
///
/// let source: Source = "user_character".parse().unwrap();
/// assert_eq!(source, Source::UserCharacter);
/// assert_eq!(Source::Predefined.to_string(), "predefined");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Predefined,
    Random,
    UserCharacter,
    Player,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Predefined => "predefined",
            Source::Random => "random",
            Source::UserCharacter => "user_character",
            Source::Player => "player",
        }
    }

    /// True for the three categories an opponent can be drawn from.
    pub fn is_opponent(&self) -> bool {
        !matches!(self, Source::Player)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "predefined" => Ok(Source::Predefined),
            "random" => Ok(Source::Random),
            "user_character" | "user-character" => Ok(Source::UserCharacter),
            "player" => Ok(Source::Player),
            _ => Err(BattleError::InvalidSource {
                source_name: s.to_string(),
            }),
        }
    }
}

/// The side that won a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "player" => Ok(Side::Player),
            "opponent" => Ok(Side::Opponent),
            _ => Err(BattleError::InvalidSide {
                side: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trips_through_text() {
        for source in [
            Source::Predefined,
            Source::Random,
            Source::UserCharacter,
            Source::Player,
        ] {
            assert_eq!(source.as_str().parse::<Source>().unwrap(), source);
        }
    }

    #[test]
    fn test_source_serde_uses_snake_case() {
        let json = serde_json::to_string(&Source::UserCharacter).unwrap();
        assert_eq!(json, "\"user_character\"");
    }

    #[test]
    fn test_invalid_source() {
        match "legendary".parse::<Source>() {
            Err(BattleError::InvalidSource { source_name }) => assert_eq!(source_name, "legendary"),
            other => panic!("Expected InvalidSource, got {:?}", other),
        }
    }

    #[test]
    fn test_player_is_not_an_opponent_source() {
        assert!(!Source::Player.is_opponent());
        assert!(Source::Random.is_opponent());
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("Player".parse::<Side>().unwrap(), Side::Player);
        assert_eq!("opponent".parse::<Side>().unwrap(), Side::Opponent);
        assert!("draw".parse::<Side>().is_err());
    }
}
