//! ID types for league rosters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for team roster keys.
///
/// Team ids are opaque strings assigned when a season is initialized and
/// stable for the life of that season; matchups refer to teams by this key.
///
/// # Examples
///
/// ```rust
/// use ffl_keeper::TeamId;
///
/// let team_id = TeamId::new("gridiron-gang");
/// assert_eq!(team_id.as_str(), "gridiron-gang");
/// assert_eq!(team_id.to_string(), "gridiron-gang");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    /// Create a new TeamId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
