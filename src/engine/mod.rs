//! Standings recalculation engine.
//!
//! The engine is a pure function of `(teams, weeks, prior standings)`: it
//! holds no state between calls and re-running it on unchanged input yields
//! identical output. All derivation rules live here so that every caller
//! (edit ingestion, recompute-on-read, tests) agrees on exactly one answer
//! to the two questions that matter: is a matchup played, and which bucket
//! do its points land in.

use crate::cli::types::TeamId;
use crate::model::{Matchup, Phase, PhaseLine, StandingRow, Team, TeamSlot, Week};
use std::collections::{BTreeMap, HashMap};
use std::fmt;


/// Engine tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// First week number that counts as postseason. Weeks below this are
    /// regular season no matter what phase a matchup carries.
    pub playoff_start_week: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playoff_start_week: 14,
        }
    }
}

/// Non-fatal problems found while recomputing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecomputeWarning {
    /// A matchup referenced a team id missing from the season roster; its
    /// stat contribution was skipped. The roster is the source of truth.
    UnknownTeam { week: u16, team_id: TeamId },
}

impl fmt::Display for RecomputeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomputeWarning::UnknownTeam { week, team_id } => {
                write!(f, "week {}: unknown team id '{}', matchup skipped", week, team_id)
            }
        }
    }
}

/// Output of one recompute pass.
#[derive(Debug, Clone)]
pub struct RecomputeOutput {
    /// One row per roster team, in rank order.
    pub standings: Vec<StandingRow>,
    pub warnings: Vec<RecomputeWarning>,
}

/// Per-team running totals while walking the scored weeks.
#[derive(Debug, Clone, Default)]
struct Aggregate {
    wins: u32,
    losses: u32,
    ties: u32,
    regular: PhaseLine,
    playoff: PhaseLine,
    consolation: PhaseLine,
    dead_rubber: PhaseLine,
}

impl Aggregate {
    fn bucket_mut(&mut self, week: u16, phase: Option<Phase>, config: &EngineConfig) -> &mut PhaseLine {
        if week < config.playoff_start_week {
            return &mut self.regular;
        }
        // Unlabeled postseason matchups default to dead-rubber so they
        // never leak into the regular-season points columns.
        match phase.unwrap_or(Phase::DeadRubber) {
            Phase::Regular => &mut self.regular,
            Phase::Playoff => &mut self.playoff,
            Phase::Consolation => &mut self.consolation,
            Phase::DeadRubber => &mut self.dead_rubber,
        }
    }
}

/// Recompute a season's standings from its roster and week map.
///
/// `prior_standings` supplies the non-derived badge fields (`champion`,
/// `playoff_finish`), merged forward by team id; everything else is
/// rebuilt from scratch. Unknown team references are skipped and reported
/// in the output's warning list rather than failing the recompute.
pub fn recompute(
    teams: &[Team],
    weeks: &BTreeMap<String, Week>,
    prior_standings: &[StandingRow],
    config: &EngineConfig,
) -> RecomputeOutput {
    let roster_index: HashMap<&TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (&t.id, i))
        .collect();

    let mut aggregates: Vec<Aggregate> = vec![Aggregate::default(); teams.len()];
    let mut warnings: Vec<RecomputeWarning> = Vec::new();

    // Weeks with at least one played matchup, ascending by parsed week
    // number. Non-numeric keys are ignored.
    let mut scored_weeks: Vec<(u16, &Week)> = weeks
        .iter()
        .filter_map(|(key, week)| key.parse::<u16>().ok().map(|n| (n, week)))
        .filter(|(_, week)| week.has_played_matchup())
        .collect();
    scored_weeks.sort_unstable_by_key(|(n, _)| *n);

    // The checkpoint is taken after the second-to-last regular-season
    // scored week, so previous_rank reflects the table going into the
    // final regular-season slate.
    let regular_scored: Vec<u16> = scored_weeks
        .iter()
        .map(|(n, _)| *n)
        .filter(|n| *n < config.playoff_start_week)
        .collect();
    let checkpoint_week: Option<u16> = if regular_scored.len() >= 2 {
        Some(regular_scored[regular_scored.len() - 2])
    } else {
        None
    };

    let mut previous_ranks: Option<HashMap<TeamId, u32>> = None;

    for (week_number, week) in &scored_weeks {
        for matchup in &week.matchups {
            apply_matchup(
                matchup,
                *week_number,
                &roster_index,
                &mut aggregates,
                &mut warnings,
                config,
            );
        }
        if Some(*week_number) == checkpoint_week {
            let order = ranked_order(&aggregates);
            let mut snapshot = HashMap::with_capacity(teams.len());
            for (rank_zero, roster_pos) in order.iter().enumerate() {
                snapshot.insert(teams[*roster_pos].id.clone(), rank_zero as u32 + 1);
            }
            previous_ranks = Some(snapshot);
        }
    }

    let prior_by_id: HashMap<&TeamId, &StandingRow> = prior_standings
        .iter()
        .map(|row| (&row.team_id, row))
        .collect();

    let order = ranked_order(&aggregates);
    let mut standings = Vec::with_capacity(teams.len());
    for (rank_zero, roster_pos) in order.iter().enumerate() {
        let team = &teams[*roster_pos];
        let agg = &aggregates[*roster_pos];
        let rank = rank_zero as u32 + 1;
        let previous_rank = previous_ranks
            .as_ref()
            .and_then(|snapshot| snapshot.get(&team.id).copied())
            .unwrap_or(rank);
        let prior = prior_by_id.get(&team.id);

        standings.push(StandingRow {
            team_id: team.id.clone(),
            wins: agg.wins,
            losses: agg.losses,
            ties: agg.ties,
            points_for: agg.regular.points_for,
            points_against: agg.regular.points_against,
            rank,
            previous_rank,
            playoff: agg.playoff,
            consolation: agg.consolation,
            dead_rubber: agg.dead_rubber,
            champion: prior.map(|p| p.champion).unwrap_or(false),
            playoff_finish: prior.and_then(|p| p.playoff_finish.clone()),
        });
    }

    RecomputeOutput {
        standings,
        warnings,
    }
}

/// Fold one matchup into the running aggregates.
fn apply_matchup(
    matchup: &Matchup,
    week_number: u16,
    roster_index: &HashMap<&TeamId, usize>,
    aggregates: &mut [Aggregate],
    warnings: &mut Vec<RecomputeWarning>,
    config: &EngineConfig,
) {
    // Both sides must resolve to roster teams. A BYE or unassigned slot
    // contributes nothing to either side; an unknown id is a warning.
    let (id_a, id_b) = match (&matchup.team_a, &matchup.team_b) {
        (TeamSlot::Team(a), TeamSlot::Team(b)) => (a, b),
        _ => return,
    };

    let pos_a = roster_index.get(id_a).copied();
    let pos_b = roster_index.get(id_b).copied();
    for (id, pos) in [(id_a, pos_a), (id_b, pos_b)] {
        if pos.is_none() {
            warnings.push(RecomputeWarning::UnknownTeam {
                week: week_number,
                team_id: id.clone(),
            });
        }
    }
    let (Some(pos_a), Some(pos_b)) = (pos_a, pos_b) else {
        return;
    };

    // Points accumulate whenever a score is present, independent of
    // whether the matchup counts toward the win/loss/tie record.
    if let Some(score_a) = matchup.score_a {
        let line = aggregates[pos_a].bucket_mut(week_number, matchup.phase, config);
        line.points_for += score_a;
        let line = aggregates[pos_b].bucket_mut(week_number, matchup.phase, config);
        line.points_against += score_a;
    }
    if let Some(score_b) = matchup.score_b {
        let line = aggregates[pos_b].bucket_mut(week_number, matchup.phase, config);
        line.points_for += score_b;
        let line = aggregates[pos_a].bucket_mut(week_number, matchup.phase, config);
        line.points_against += score_b;
    }

    // Win/loss/tie requires both scores, and only matchups that resolve
    // to the regular bucket count toward it. Postseason advancement is
    // tracked via team metadata, not the standings record.
    let regular = week_number < config.playoff_start_week || matchup.phase == Some(Phase::Regular);
    if !regular {
        return;
    }
    if let (Some(score_a), Some(score_b)) = (matchup.score_a, matchup.score_b) {
        if score_a > score_b {
            aggregates[pos_a].wins += 1;
            aggregates[pos_b].losses += 1;
        } else if score_b > score_a {
            aggregates[pos_b].wins += 1;
            aggregates[pos_a].losses += 1;
        } else {
            aggregates[pos_a].ties += 1;
            aggregates[pos_b].ties += 1;
        }
    }
}

/// Roster positions sorted into placement order: wins descending, then
/// regular-season points-for descending, then original roster order.
///
/// The roster-order fallback is a deliberate last resort so that ranks
/// stay deterministic when records tie all the way down; the stable sort
/// preserves it without an explicit comparator term.
fn ranked_order(aggregates: &[Aggregate]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..aggregates.len()).collect();
    order.sort_by(|&a, &b| {
        let (aa, ab) = (&aggregates[a], &aggregates[b]);
        ab.wins.cmp(&aa.wins).then_with(|| {
            ab.regular
                .points_for
                .partial_cmp(&aa.regular.points_for)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    order
}
