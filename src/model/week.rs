//! Weeks: ordered collections of matchups keyed by week number.

use super::matchup::Matchup;
use serde::{Deserialize, Serialize};

/// One week's slate of matchups.
///
/// Week identity lives in the season's week map key, which is the decimal
/// week number as a string. Weeks are mutable: the admin UI replaces a
/// week's matchup list wholesale on every edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Week {
    #[serde(default)]
    pub matchups: Vec<Matchup>,
}

impl Week {
    pub fn new(matchups: Vec<Matchup>) -> Self {
        Self { matchups }
    }

    /// A week counts as "scored" once at least one matchup has both
    /// scores recorded.
    pub fn has_played_matchup(&self) -> bool {
        self.matchups.iter().any(Matchup::is_played)
    }
}
