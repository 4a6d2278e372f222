//! `init-season` command: create a season from a roster file.

use super::common::{read_json_input, CommandContext};
use crate::cli::types::Year;
use crate::error::{LeagueError, Result};
use crate::model::Team;

pub fn handle_init_season(ctx: &CommandContext, year: Year, roster_source: &str) -> Result<()> {
    let raw = read_json_input(roster_source)?;
    let teams: Vec<Team> = serde_json::from_str(&raw).map_err(|e| {
        LeagueError::validation(format!("roster must be a JSON array of teams: {}", e))
    })?;

    let standings = ctx.service.init_season(&year, teams)?;
    println!(
        "✓ Season {} initialized with {} teams",
        year,
        standings.len()
    );
    Ok(())
}
