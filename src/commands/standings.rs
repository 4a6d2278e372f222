//! `standings` command: show a season's ranked table.

use super::common::{render_standings_table, CommandContext};
use crate::cli::types::Year;
use crate::error::Result;

pub fn handle_standings(ctx: &CommandContext, year: Year, as_json: bool) -> Result<()> {
    let standings = ctx.service.get_standings(&year)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    let season = ctx.service.store().get_season(&year)?;
    print!("{}", render_standings_table(&standings, &season.teams, &year));
    Ok(())
}
