//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod battle_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let battle_error = BattleError::from(json_error);

        match battle_error {
            BattleError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let battle_error = BattleError::from(io_error);

        match battle_error {
            BattleError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let battle_error = BattleError::from(parse_error);

        match battle_error {
            BattleError::InvalidSeed(_) => (),
            _ => panic!("Expected InvalidSeed error variant"),
        }
    }

    #[test]
    fn test_invalid_tier_weights_error() {
        let error = BattleError::InvalidTierWeights {
            tier: "growth".to_string(),
            sum: 0.9,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("growth"));
        assert!(error_string.contains("0.9"));
    }

    #[test]
    fn test_invalid_win_probability_error() {
        let error = BattleError::InvalidWinProbability { value: 1.5 };
        assert_eq!(error.to_string(), "Win probability 1.5 is outside [0, 1]");
    }

    #[test]
    fn test_collaborator_error() {
        let error = BattleError::collaborator("narrative", "rate limited");
        let error_string = error.to_string();
        assert!(error_string.contains("narrative collaborator failed"));
        assert!(error_string.contains("rate limited"));
    }

    #[test]
    fn test_empty_player_name_error() {
        let error = BattleError::EmptyPlayerName;
        assert_eq!(error.to_string(), "Player name must not be empty");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let battle_error = BattleError::from(io_error);

        let error_trait: &dyn std::error::Error = &battle_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(BattleError::EmptyPlayerName)
        }

        match test_function().unwrap_err() {
            BattleError::EmptyPlayerName => (),
            _ => panic!("Expected EmptyPlayerName error"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");
        let battle_error = BattleError::from(anyhow_error);

        match battle_error {
            BattleError::Storage { message } => {
                assert!(message.contains("Test anyhow error message"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_sqlite_error_surfaces_as_storage() {
        let db_error = rusqlite::Error::InvalidColumnType(
            0,
            "test_column".to_string(),
            rusqlite::types::Type::Null,
        );
        let battle_error = BattleError::from(anyhow::Error::from(db_error));

        match battle_error {
            BattleError::Storage { message } => assert!(message.contains("test_column")),
            _ => panic!("Expected Storage error variant"),
        }
    }
}
