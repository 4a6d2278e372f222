//! Seasons and the persisted league file shape.

use super::{standings::StandingRow, team::Team, week::Week};
use crate::cli::types::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One year's full league state: roster, week map, derived standings.
///
/// Week map keys are decimal week numbers as strings; non-numeric keys are
/// tolerated in the file and ignored by the recompute engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub weeks: BTreeMap<String, Week>,
    #[serde(default)]
    pub standings: Vec<StandingRow>,
}

impl Season {
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::default()
        }
    }

    /// Look up a roster entry by id.
    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    /// Week numbers present in this season, ascending, non-numeric keys
    /// skipped.
    pub fn week_numbers(&self) -> Vec<u16> {
        let mut numbers: Vec<u16> = self
            .weeks
            .keys()
            .filter_map(|k| k.parse::<u16>().ok())
            .collect();
        numbers.sort_unstable();
        numbers
    }
}

/// The whole persisted store: a map from year string to season.
pub type League = BTreeMap<String, Season>;
