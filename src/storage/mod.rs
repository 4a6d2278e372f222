//! Storage layer for the league keeper
//!
//! This module provides the flat-file JSON store and the read-side
//! snapshot cache:
//! - `store`: league file load, atomic replace, per-season locks
//! - `cache`: in-memory LRU of last-written standings per year

pub mod cache;
pub mod store;

#[cfg(test)]
mod tests;

pub use cache::StandingsCache;
pub use store::LeagueStore;
