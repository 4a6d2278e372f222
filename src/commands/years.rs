//! `years` command: list stored seasons.

use super::common::CommandContext;
use crate::error::Result;

pub fn handle_years(ctx: &CommandContext) -> Result<()> {
    let years = ctx.service.list_years()?;
    if years.is_empty() {
        println!("No seasons stored yet. Use init-season to create one.");
        return Ok(());
    }
    for year in years {
        println!("{}", year);
    }
    Ok(())
}
