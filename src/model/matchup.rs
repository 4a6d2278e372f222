//! Matchups: one scheduled game between two team slots.

use crate::cli::types::TeamId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sentinel string for a BYE side in the persisted JSON.
const BYE_SENTINEL: &str = "BYE";

/// One side of a matchup.
///
/// Serialized as the team id string, the literal `"BYE"`, or `null` when
/// the slot has not been assigned yet. BYE and unassigned slots never
/// contribute statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamSlot {
    Team(TeamId),
    Bye,
    #[default]
    Unassigned,
}

impl TeamSlot {
    /// The team id if this slot resolves to a real team.
    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            TeamSlot::Team(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSlot::Team(id) => write!(f, "{}", id),
            TeamSlot::Bye => write!(f, "{}", BYE_SENTINEL),
            TeamSlot::Unassigned => write!(f, "-"),
        }
    }
}

impl Serialize for TeamSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TeamSlot::Team(id) => serializer.serialize_str(id.as_str()),
            TeamSlot::Bye => serializer.serialize_str(BYE_SENTINEL),
            TeamSlot::Unassigned => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for TeamSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw {
            None => TeamSlot::Unassigned,
            Some(s) if s == BYE_SENTINEL => TeamSlot::Bye,
            Some(s) => TeamSlot::Team(TeamId::new(s)),
        })
    }
}

/// Classification of a matchup, controlling which stat bucket it affects.
///
/// Only meaningful at or after the playoff-start week; earlier weeks always
/// count as regular season regardless of the stored phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Regular,
    Playoff,
    Consolation,
    DeadRubber,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Regular => "regular",
            Phase::Playoff => "playoff",
            Phase::Consolation => "consolation",
            Phase::DeadRubber => "dead-rubber",
        };
        write!(f, "{}", s)
    }
}

/// One scheduled game within a week.
///
/// A matchup with either score unset is unplayed: it never counts toward
/// win/loss/tie records and is never a 0-0 tie. A score that is present
/// still accumulates into the points columns even when the opposing score
/// is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    #[serde(default)]
    pub team_a: TeamSlot,
    #[serde(default)]
    pub team_b: TeamSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    /// Optional display label, e.g. "Championship" or "3rd place game".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Matchup {
    /// A bare matchup between two teams with no scores recorded.
    pub fn scheduled(team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            team_a: TeamSlot::Team(TeamId::new(team_a)),
            team_b: TeamSlot::Team(TeamId::new(team_b)),
            score_a: None,
            score_b: None,
            phase: None,
            label: None,
        }
    }

    /// A played matchup between two teams.
    pub fn played(
        team_a: impl Into<String>,
        score_a: f64,
        team_b: impl Into<String>,
        score_b: f64,
    ) -> Self {
        Self {
            score_a: Some(score_a),
            score_b: Some(score_b),
            ..Self::scheduled(team_a, team_b)
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Both scores present, regardless of value. 0-0 counts as played
    /// (a tie); a lone 0 against a missing score does not.
    pub fn is_played(&self) -> bool {
        self.score_a.is_some() && self.score_b.is_some()
    }
}
