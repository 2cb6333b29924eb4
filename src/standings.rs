use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::StandingsError;
use crate::match_result::MatchResult;
use crate::points::PointsSystem;
use crate::standing::TeamStanding;

/// Running totals keyed by team identifier.
type Table = HashMap<String, TeamStanding>;

/// Compute the league table with the default points system.
///
/// Teams are ranked by points descending, then by name ascending (see
/// `compare_team_names`). An empty slice yields an empty table. Malformed
/// matches are absorbed: each still counts as played for both teams, but
/// an unknown result or a winner that is neither team contributes no wins,
/// losses or points.
pub fn compute_standings(matches: &[MatchResult]) -> Vec<TeamStanding> {
    compute_standings_with(matches, &PointsSystem::default())
}

/// Compute the league table with a custom points system.
pub fn compute_standings_with(matches: &[MatchResult], system: &PointsSystem) -> Vec<TeamStanding> {
    if matches.is_empty() {
        return Vec::new();
    }

    let mut table = Table::new();
    for (index, m) in matches.iter().enumerate() {
        record_match(&mut table, index, m, system);
    }

    finish(table, matches.len())
}

/// Parallel version of `compute_standings_with`.
///
/// Matches are folded into per-thread tables which are then merged. The
/// output is identical to the sequential version.
pub fn compute_standings_par(matches: &[MatchResult], system: &PointsSystem) -> Vec<TeamStanding> {
    if matches.is_empty() {
        return Vec::new();
    }

    let table = matches
        .par_iter()
        .enumerate()
        .fold(Table::new, |mut table, (index, m)| {
            record_match(&mut table, index, m, system);
            table
        })
        .reduce(Table::new, merge_tables);

    finish(table, matches.len())
}

/// Like `compute_standings_with`, but rejects the first malformed match.
///
/// # Returns
/// The ranked table, or `StandingsError::InvalidMatch` carrying the index
/// of the offending record.
pub fn compute_standings_strict(
    matches: &[MatchResult],
    system: &PointsSystem,
) -> Result<Vec<TeamStanding>, StandingsError> {
    for (index, m) in matches.iter().enumerate() {
        m.validate()
            .map_err(|source| StandingsError::InvalidMatch { index, source })?;
    }
    Ok(compute_standings_with(matches, system))
}

/// Ranking order: points descending, then team name ascending.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| compare_team_names(&a.team, &b.team))
}

/// Collation-style name order: case-insensitive first, so `"alpha"` sorts
/// before `"Beta"`. Names differing only in case put lowercase first. The
/// order is total: distinct names never compare equal.
pub fn compare_team_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Sort standings into ranking order.
pub fn rank_standings(standings: &mut [TeamStanding]) {
    standings.sort_by(compare_standings);
}

fn record_match(table: &mut Table, index: usize, m: &MatchResult, system: &PointsSystem) {
    if m.is_absorbed() {
        debug!(
            "Match {} ({} v {}, result {:?}, winner {:?}) counts as played only",
            index,
            m.team1,
            m.team2,
            m.result.label(),
            m.winner
        );
    }

    let (delta1, delta2) = m.deltas(system);
    table
        .entry(m.team1.clone())
        .or_insert_with_key(|team| TeamStanding::new(team.clone()))
        .apply(&delta1);
    table
        .entry(m.team2.clone())
        .or_insert_with_key(|team| TeamStanding::new(team.clone()))
        .apply(&delta2);
}

fn merge_tables(mut into: Table, from: Table) -> Table {
    for (team, standing) in from {
        match into.entry(team) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(&standing),
            Entry::Vacant(slot) => {
                slot.insert(standing);
            }
        }
    }
    into
}

fn finish(table: Table, n_matches: usize) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = table.into_values().collect();

    rank_standings(&mut standings);

    debug!(
        "Computed standings for {} teams from {} matches",
        standings.len(),
        n_matches
    );
    standings
}
