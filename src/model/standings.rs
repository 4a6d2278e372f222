//! Derived standings rows.

use crate::cli::types::TeamId;
use serde::{Deserialize, Serialize};

/// Points line for one postseason phase.
///
/// Postseason phases track points only; win/loss records for those games
/// live in team metadata, not in the standings columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseLine {
    pub points_for: f64,
    pub points_against: f64,
}

/// One team's derived record and rank for a season.
///
/// Every field is recomputed from the week map except `champion` and
/// `playoff_finish`, which are carried forward from the prior standings
/// row for the same team id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    /// Dense 1..N placement after the tie-break ordering.
    pub rank: u32,
    /// Placement as of the checkpoint before the final regular-season
    /// scored week; equals `rank` when no checkpoint exists.
    pub previous_rank: u32,
    #[serde(default)]
    pub playoff: PhaseLine,
    #[serde(default)]
    pub consolation: PhaseLine,
    #[serde(default)]
    pub dead_rubber: PhaseLine,
    #[serde(default)]
    pub champion: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_finish: Option<String>,
}

impl StandingRow {
    /// A zeroed row for a team, ranked by roster position until the
    /// engine assigns a real placement.
    pub fn zeroed(team_id: TeamId, rank: u32) -> Self {
        Self {
            team_id,
            wins: 0,
            losses: 0,
            ties: 0,
            points_for: 0.0,
            points_against: 0.0,
            rank,
            previous_rank: rank,
            playoff: PhaseLine::default(),
            consolation: PhaseLine::default(),
            dead_rubber: PhaseLine::default(),
            champion: false,
            playoff_finish: None,
        }
    }

    /// Rank movement since the checkpoint: positive means the team
    /// climbed, negative means it fell.
    pub fn rank_delta(&self) -> i32 {
        self.previous_rank as i32 - self.rank as i32
    }
}
