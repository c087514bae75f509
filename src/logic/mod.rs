//! Championship business logic: registration, scoring, match entry, standings, ranking.

mod match_entry;
mod ranking;
mod registration;
mod scoring;
mod standings;

pub use match_entry::add_matches;
pub use ranking::{get_outcome, rank_group, Outcome, RankingEntry, PROGRESSION_CUTOFF};
pub use registration::{add_teams, delete_team, get_team, parse_registration_date, update_team};
pub use scoring::{PointSystem, ScoringRules};
pub use standings::{compute_standings, GroupStanding};
