//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod league_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let league_error = LeagueError::from(json_error);

        match league_error {
            LeagueError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let league_error = LeagueError::from(io_error);

        match league_error {
            LeagueError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let league_error = LeagueError::from(parse_error);

        match league_error {
            LeagueError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_boxed_error_conversion() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "disk on fire".into();
        let league_error = LeagueError::from(boxed);

        match league_error {
            LeagueError::Storage { message } => assert_eq!(message, "disk on fire"),
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_validation_helper() {
        let err = LeagueError::validation("matchups must be an array");
        match err {
            LeagueError::Validation { ref message } => {
                assert_eq!(message, "matchups must be an array")
            }
            _ => panic!("Expected Validation error variant"),
        }
    }

    #[test]
    fn test_error_display_messages() {
        let err = LeagueError::SeasonNotFound {
            year: "2019".to_string(),
        };
        assert_eq!(err.to_string(), "Season not found: 2019");

        let err = LeagueError::WeekNotFound {
            year: "2021".to_string(),
            week: 14,
        };
        assert_eq!(err.to_string(), "Week not found: 14 in season 2021");

        let err = LeagueError::SeasonExists {
            year: "2024".to_string(),
        };
        assert_eq!(err.to_string(), "Season already exists: 2024");
    }
}
