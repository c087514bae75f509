//! Team data structures: the registered team plus its wire input forms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a team (used by the match ledger; survives renames).
pub type TeamId = Uuid;

/// A registered team with its accumulated statistics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    /// Display name, unique across the championship.
    pub name: String,
    pub registration_date: NaiveDate,
    /// Group the team plays in (1 or 2).
    pub group_number: u32,
    /// Goals scored across all recorded matches.
    pub total_goals: u32,
    /// Points under the standard system (primary ranking key).
    pub match_points: u32,
    /// Points under the alternate system (tie-break key).
    pub alternate_points: u32,
    pub matches_played: u32,
}

impl Team {
    /// Create a team with zeroed statistics.
    pub fn new(name: impl Into<String>, registration_date: NaiveDate, group_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            registration_date,
            group_number,
            total_goals: 0,
            match_points: 0,
            alternate_points: 0,
            matches_played: 0,
        }
    }
}

/// One entry of a bulk team registration, as it arrives on the wire.
/// The date is a `dd/MM` string; the year is filled in at validation time.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub registration_date: String,
    pub group_number: i64,
}

/// Partial update of a team. Absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    /// Current display name of the team to patch.
    pub team_name: String,
    pub new_name: Option<String>,
    /// `dd/MM`, same format as registration.
    pub new_registration_date: Option<String>,
    pub group_number: Option<i64>,
    pub total_goals: Option<i64>,
    pub match_points: Option<i64>,
    pub alternate_points: Option<i64>,
    pub matches_played: Option<i64>,
}
