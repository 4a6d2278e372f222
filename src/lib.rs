//! Fantasy Football League Keeper
//!
//! A Rust library and CLI for tracking a fantasy-football league across
//! years: team rosters, week-by-week matchup scores, and derived standings
//! with rank-movement tracking.
//!
//! ## Features
//!
//! - **Standings Recalculation**: One engine derives the ranked table from
//!   the week map, with playoff/consolation/dead-rubber point buckets and
//!   previous-rank checkpointing
//! - **Score Editing**: Replace any historical week's matchups; standings
//!   recompute and persist atomically with the edit
//! - **Flat-File Storage**: The whole league lives in one JSON document
//!   with atomic replace and per-season write locking
//! - **Snapshot Reads**: Standings reads are lock-free, served from an
//!   in-memory LRU of last-written tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_keeper::{engine::EngineConfig, service::LeagueService, WeekNumber, Year};
//! use ffl_keeper::model::Matchup;
//!
//! # fn example() -> ffl_keeper::Result<()> {
//! let service = LeagueService::open(EngineConfig::default())?;
//! let outcome = service.submit_week_edit(
//!     &Year::new(2025),
//!     WeekNumber::new(3),
//!     vec![Matchup::played("sharks", 101.5, "jets", 88.0)],
//! )?;
//! println!("leader: {}", outcome.standings[0].team_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the keeper at a specific league file to avoid passing it in every
//! command:
//! ```bash
//! export FFL_KEEPER_DATA_FILE=/path/to/league.json
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod model;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{TeamId, WeekNumber, Year};
pub use error::{LeagueError, Result};
pub use model::{Matchup, Phase, Season, StandingRow, Team, TeamSlot, Week};

pub const DATA_FILE_ENV_VAR: &str = "FFL_KEEPER_DATA_FILE";
