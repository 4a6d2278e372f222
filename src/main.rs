//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_keeper::{
    cli::{Commands, FflKeeper},
    commands::{
        common::CommandContext, edit_week::handle_edit_week, init_season::handle_init_season,
        standings::handle_standings, weeks::handle_weeks, years::handle_years,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = FflKeeper::parse();
    let ctx = CommandContext::new(app.global.data_file, app.global.playoff_start)?;

    match app.command {
        Commands::Standings { year, json } => handle_standings(&ctx, year, json)?,

        Commands::Weeks { year, week, json } => handle_weeks(&ctx, year, week, json)?,

        Commands::EditWeek {
            year,
            week,
            matchups,
            json,
        } => handle_edit_week(&ctx, year, week, &matchups, json)?,

        Commands::Years => handle_years(&ctx)?,

        Commands::InitSeason { year, roster } => handle_init_season(&ctx, year, &roster)?,
    }

    Ok(())
}
