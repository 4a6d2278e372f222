//! `edit-week` command: replace a week's matchups and show the new table.

use super::common::{read_json_input, render_standings_table, CommandContext};
use crate::cli::types::{WeekNumber, Year};
use crate::error::{LeagueError, Result};
use crate::model::Matchup;

pub fn handle_edit_week(
    ctx: &CommandContext,
    year: Year,
    week: WeekNumber,
    matchups_source: &str,
    as_json: bool,
) -> Result<()> {
    let raw = read_json_input(matchups_source)?;
    let matchups: Vec<Matchup> = serde_json::from_str(&raw).map_err(|e| {
        LeagueError::validation(format!("matchups must be a JSON array of matchups: {}", e))
    })?;

    let outcome = ctx.service.submit_week_edit(&year, week, matchups)?;

    // Warnings go to stderr so JSON output stays parseable.
    for warning in &outcome.warnings {
        eprintln!("⚠ {}", warning);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.standings)?);
        return Ok(());
    }

    println!("✓ Week {} of {} replaced", week, year);
    let season = ctx.service.store().get_season(&year)?;
    print!(
        "{}",
        render_standings_table(&outcome.standings, &season.teams, &year)
    );
    Ok(())
}
