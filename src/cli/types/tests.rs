//! Unit tests for identifier and time newtypes

use super::*;
use std::str::FromStr;

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn test_team_id_display_and_parse() {
        let id = TeamId::new("gridiron-gang");
        assert_eq!(id.to_string(), "gridiron-gang");
        assert_eq!(TeamId::from_str("gridiron-gang").unwrap(), id);
    }

    #[test]
    fn test_team_id_serde_transparent() {
        let id = TeamId::new("sharks");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sharks\"");
    }
}

#[cfg(test)]
mod time_tests {
    use super::*;

    #[test]
    fn test_year_parse_and_key() {
        let year = Year::from_str("2023").unwrap();
        assert_eq!(year.as_u16(), 2023);
        assert_eq!(year.as_key(), "2023");
    }

    #[test]
    fn test_year_parse_failure() {
        assert!(Year::from_str("twenty-three").is_err());
    }

    #[test]
    fn test_week_number_default_and_display() {
        assert_eq!(WeekNumber::default().as_u16(), 1);
        assert_eq!(WeekNumber::new(14).to_string(), "14");
        assert_eq!(WeekNumber::from_str("14").unwrap(), WeekNumber::new(14));
    }
}
