//! Standings engine: per-team aggregate rows for one group.

use crate::models::{Championship, Team, TeamId};
use chrono::NaiveDate;
use serde::Serialize;

/// One team's aggregate statistics, as the ranking resolver consumes
/// them. Registration date and id ride along for tie-breaks and lookups.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStanding {
    pub team_id: TeamId,
    pub name: String,
    pub registration_date: NaiveDate,
    pub match_points: u32,
    pub total_goals: u32,
    pub alternate_points: u32,
    pub matches_played: u32,
}

impl GroupStanding {
    fn from_team(team: &Team) -> Self {
        Self {
            team_id: team.id,
            name: team.name.clone(),
            registration_date: team.registration_date,
            match_points: team.match_points,
            total_goals: team.total_goals,
            alternate_points: team.alternate_points,
            matches_played: team.matches_played,
        }
    }
}

/// Current aggregate rows for every team in `group_number`, in
/// registration order (unranked). Aggregates are maintained incrementally
/// by match entry, so this is a filtered read; it stays a separate stage
/// so a recompute-from-ledger strategy could replace it without touching
/// the ranking resolver.
pub fn compute_standings(championship: &Championship, group_number: u32) -> Vec<GroupStanding> {
    championship
        .teams
        .iter()
        .filter(|t| t.group_number == group_number)
        .map(GroupStanding::from_team)
        .collect()
}
