//! CLI argument definitions and parsing structures.

use super::types::{WeekNumber, Year};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// League data file (or set `FFL_KEEPER_DATA_FILE` env var).
    #[clap(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// First week number counted as postseason.
    #[clap(long, global = true, default_value_t = 14)]
    pub playoff_start: u16,
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-keeper", about = "Fantasy football league record keeper")]
pub struct FflKeeper {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a season's standings table.
    ///
    /// Recomputes from the week map on every run, so the table is correct
    /// even when the persisted standings array is stale.
    Standings {
        /// Season year (e.g. 2025).
        #[clap(long, short)]
        year: Year,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// List a season's weeks and matchups.
    Weeks {
        /// Season year (e.g. 2025).
        #[clap(long, short)]
        year: Year,

        /// Only show this week.
        #[clap(long, short)]
        week: Option<WeekNumber>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Replace one week's matchups and recompute standings.
    ///
    /// The matchup list replaces the week wholesale (not a merge); the
    /// new standings persist atomically with the edited week.
    EditWeek {
        /// Season year (e.g. 2025).
        #[clap(long, short)]
        year: Year,

        /// Week number to replace.
        #[clap(long, short)]
        week: WeekNumber,

        /// JSON file holding the matchup array, or '-' for stdin.
        #[clap(long, short)]
        matchups: String,

        /// Output the new standings as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// List the years with a stored season.
    Years,

    /// Create a season from a roster file.
    ///
    /// Seasons are never created implicitly; editing a week of an
    /// unknown year fails until the year is initialized here.
    InitSeason {
        /// Season year (e.g. 2025).
        #[clap(long, short)]
        year: Year,

        /// JSON file holding the team array, or '-' for stdin.
        #[clap(long, short)]
        roster: String,
    },
}
