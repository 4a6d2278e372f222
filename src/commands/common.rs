//! Common utilities shared across command handlers.

use crate::cli::types::Year;
use crate::engine::EngineConfig;
use crate::error::Result;
use crate::model::{StandingRow, Team};
use crate::service::LeagueService;
use crate::storage::LeagueStore;
use std::io::Read;
use std::path::PathBuf;

/// Context containing the resources every command needs.
pub struct CommandContext {
    pub service: LeagueService,
}

impl CommandContext {
    /// Build the service from the global CLI options.
    pub fn new(data_file: Option<PathBuf>, playoff_start: u16) -> Result<Self> {
        let store = match data_file {
            Some(path) => LeagueStore::open_at(path),
            None => LeagueStore::open()?,
        };
        let config = EngineConfig {
            playoff_start_week: playoff_start,
        };
        Ok(Self {
            service: LeagueService::new(store, config),
        })
    }
}

/// Read a JSON input argument: a file path, or stdin when the argument
/// is `-`.
pub fn read_json_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

/// Render a standings table the way the dashboard shows it.
pub fn render_standings_table(rows: &[StandingRow], teams: &[Team], year: &Year) -> String {
    let mut out = String::new();
    out.push_str(&format!("Season {} standings\n", year));
    out.push_str(&format!(
        "{:<4} {:<24} {:>8} {:>9} {:>9} {:>5}\n",
        "Rank", "Team", "W-L-T", "PF", "PA", "Move"
    ));
    for row in rows {
        let name = teams
            .iter()
            .find(|t| t.id == row.team_id)
            .map(|t| t.display_name.as_str())
            .unwrap_or_else(|| row.team_id.as_str());
        let record = format!("{}-{}-{}", row.wins, row.losses, row.ties);
        let movement = match row.rank_delta() {
            0 => "–".to_string(),
            d if d > 0 => format!("↑{}", d),
            d => format!("↓{}", -d),
        };
        let badge = if row.champion { " 🏆" } else { "" };
        out.push_str(&format!(
            "{:<4} {:<24} {:>8} {:>9.1} {:>9.1} {:>5}{}\n",
            row.rank, name, record, row.points_for, row.points_against, movement, badge
        ));
    }
    out
}
