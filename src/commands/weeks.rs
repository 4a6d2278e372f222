//! `weeks` command: list a season's matchups.

use super::common::CommandContext;
use crate::cli::types::{WeekNumber, Year};
use crate::error::{LeagueError, Result};
use crate::model::{Matchup, Week};
use std::collections::BTreeMap;

pub fn handle_weeks(
    ctx: &CommandContext,
    year: Year,
    week: Option<WeekNumber>,
    as_json: bool,
) -> Result<()> {
    let mut weeks = ctx.service.get_weeks(&year)?;

    if let Some(week) = week {
        let key = week.as_key();
        let Some(single) = weeks.remove(&key) else {
            return Err(LeagueError::WeekNotFound {
                year: year.as_key(),
                week: week.as_u16(),
            });
        };
        weeks = BTreeMap::from([(key, single)]);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&weeks)?);
        return Ok(());
    }

    // Numeric keys in week order first, then any stray non-numeric keys.
    let mut keys: Vec<&String> = weeks.keys().collect();
    keys.sort_by_key(|k| (k.parse::<u16>().is_err(), k.parse::<u16>().unwrap_or(0)));

    for key in keys {
        println!("Week {}:", key);
        print_week(&weeks[key]);
    }
    Ok(())
}

fn print_week(week: &Week) {
    if week.matchups.is_empty() {
        println!("  (no matchups)");
        return;
    }
    for matchup in &week.matchups {
        println!("  {}", format_matchup(matchup));
    }
}

fn format_matchup(matchup: &Matchup) -> String {
    let score = |s: Option<f64>| s.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".into());
    let mut line = if matchup.is_played() {
        format!(
            "{} {} vs {} {}",
            matchup.team_a,
            score(matchup.score_a),
            matchup.team_b,
            score(matchup.score_b),
        )
    } else {
        format!("{} vs {} (unplayed)", matchup.team_a, matchup.team_b)
    };
    if let Some(phase) = matchup.phase {
        line.push_str(&format!(" [{}]", phase));
    }
    if let Some(label) = &matchup.label {
        line.push_str(&format!(" ({})", label));
    }
    line
}
