//! Roster entries for a single season.

use crate::cli::types::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a franchise stands in the league's membership history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MembershipState {
    #[default]
    Active,
    Inactive,
    Legacy,
    Unowned,
}

impl fmt::Display for MembershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MembershipState::Active => "active",
            MembershipState::Inactive => "inactive",
            MembershipState::Legacy => "legacy",
            MembershipState::Unowned => "unowned",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MembershipState {
    type Err = crate::error::LeagueError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "active" => Ok(MembershipState::Active),
            "inactive" => Ok(MembershipState::Inactive),
            "legacy" => Ok(MembershipState::Legacy),
            "unowned" => Ok(MembershipState::Unowned),
            other => Err(crate::error::LeagueError::validation(format!(
                "unknown membership state: {}",
                other
            ))),
        }
    }
}

/// One roster entry for one season.
///
/// Teams are created when a season is initialized and their ids stay stable
/// for the life of the season; only metadata (membership state, playoff
/// record) is edited afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub display_name: String,
    pub owner_name: String,
    #[serde(default)]
    pub membership_state: MembershipState,
    /// Free-form postseason record, e.g. "2-1". Maintained by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_record: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            display_name: display_name.into(),
            owner_name: String::new(),
            membership_state: MembershipState::default(),
            playoff_record: None,
        }
    }
}
