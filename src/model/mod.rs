//! Data model for league seasons: rosters, weeks, matchups, standings.

pub mod matchup;
pub mod season;
pub mod standings;
pub mod team;
pub mod week;


pub use matchup::{Matchup, Phase, TeamSlot};
pub use season::{League, Season};
pub use standings::{PhaseLine, StandingRow};
pub use team::{MembershipState, Team};
pub use week::Week;
