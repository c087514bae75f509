//! Football championship web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    add_matches, add_teams, compute_standings, delete_team, get_outcome, get_team,
    parse_registration_date, rank_group, update_team, GroupStanding, Outcome, PointSystem,
    RankingEntry, ScoringRules, PROGRESSION_CUTOFF,
};
pub use models::{
    AuditAction, AuditEntry, BatchReport, Championship, ChampionshipError, ErrorKind, MatchId,
    MatchRecord, MatchReport, NewTeam, Team, TeamId, TeamUpdate,
};
