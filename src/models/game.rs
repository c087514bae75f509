//! Match records: append-only ledger entries and their wire input form.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recorded match.
pub type MatchId = Uuid;

/// A recorded match result. Immutable once appended; teams are referenced
/// by stable id, so renaming a team never breaks the ledger.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: MatchId,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub team_a_goals: u32,
    pub team_b_goals: u32,
}

impl MatchRecord {
    pub fn new(team_a: TeamId, team_b: TeamId, team_a_goals: u32, team_b_goals: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_a,
            team_b,
            team_a_goals,
            team_b_goals,
        }
    }
}

/// One entry of a bulk match submission, as it arrives on the wire.
/// Teams are referenced by display name; both must exist and be distinct.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_goals: i64,
    pub team_b_goals: i64,
}
