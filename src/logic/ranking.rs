//! Ranking resolver: orders a group's standings and decides progression.

use crate::logic::standings::{compute_standings, GroupStanding};
use crate::models::{Championship, ChampionshipError};
use serde::Serialize;
use std::cmp::Ordering;

/// Teams ranked 1 through this cutoff progress; the rest are eliminated.
/// Fixed regardless of group size, so groups smaller than the cutoff
/// progress entirely.
pub const PROGRESSION_CUTOFF: usize = 4;

/// Whether a team progresses to the next stage or is out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Progressed,
    Eliminated,
}

/// One row of a ranked group table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// 1-based position in the group.
    pub rank: usize,
    pub name: String,
    pub match_points: u32,
    pub total_goals: u32,
    pub alternate_points: u32,
    pub outcome: Outcome,
}

/// Sort key, descending priority: match points, total goals, alternate
/// points (all higher-first), then registration date (earliest first),
/// then name. The last two keys make the order total and deterministic.
fn compare_standings(a: &GroupStanding, b: &GroupStanding) -> Ordering {
    b.match_points
        .cmp(&a.match_points)
        .then_with(|| b.total_goals.cmp(&a.total_goals))
        .then_with(|| b.alternate_points.cmp(&a.alternate_points))
        .then_with(|| a.registration_date.cmp(&b.registration_date))
        .then_with(|| a.name.cmp(&b.name))
}

/// Rank every team in `group_number`. Fails with `GroupNotFound` when the
/// group has no teams (including group numbers outside {1, 2}).
pub fn rank_group(
    championship: &Championship,
    group_number: u32,
) -> Result<Vec<RankingEntry>, ChampionshipError> {
    let mut standings = compute_standings(championship, group_number);
    if standings.is_empty() {
        return Err(ChampionshipError::GroupNotFound(group_number));
    }
    standings.sort_by(compare_standings);

    Ok(standings
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankingEntry {
            rank: i + 1,
            name: s.name,
            match_points: s.match_points,
            total_goals: s.total_goals,
            alternate_points: s.alternate_points,
            outcome: if i < PROGRESSION_CUTOFF {
                Outcome::Progressed
            } else {
                Outcome::Eliminated
            },
        })
        .collect())
}

/// Whether `team_name` progresses out of `group_number`. Fails with a
/// not-found error when the team is absent from that group's ranking.
pub fn get_outcome(
    championship: &Championship,
    team_name: &str,
    group_number: u32,
) -> Result<bool, ChampionshipError> {
    let ranking = rank_group(championship, group_number)?;
    ranking
        .iter()
        .find(|entry| entry.name == team_name)
        .map(|entry| entry.outcome == Outcome::Progressed)
        .ok_or_else(|| ChampionshipError::TeamNotInGroup {
            name: team_name.to_string(),
            group: group_number,
        })
}
