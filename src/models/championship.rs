//! Championship state and error types.

use crate::models::audit::{AuditAction, AuditEntry};
use crate::models::game::MatchRecord;
use crate::models::team::{Team, TeamId};
use chrono::NaiveDate;
use serde::Serialize;

/// Errors that can occur during championship operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChampionshipError {
    /// Team name missing or outside the accepted length range.
    InvalidName(String),
    /// Registration date string did not parse as `dd/MM`.
    InvalidDate(String),
    /// Registration date lies after today.
    FutureRegistrationDate(NaiveDate),
    /// Group number outside {1, 2}.
    InvalidGroup(i64),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName(String),
    /// No team registered under this name.
    TeamNotFound(String),
    /// No teams registered in this group.
    GroupNotFound(u32),
    /// The team exists but is not part of this group's ranking.
    TeamNotInGroup { name: String, group: u32 },
    /// A match referenced the same team on both sides.
    SameTeam(String),
    /// A goal count below zero.
    NegativeGoals,
    /// A statistics field patched to a value below zero (or out of range).
    NegativeStat(&'static str),
}

impl std::fmt::Display for ChampionshipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChampionshipError::InvalidName(name) => {
                write!(f, "Team name '{}' must be between 2 and 100 characters", name.trim())
            }
            ChampionshipError::InvalidDate(input) => {
                write!(f, "Invalid date format, expected dd/MM (got '{}')", input)
            }
            ChampionshipError::FutureRegistrationDate(date) => {
                write!(f, "Registration date {} is in the future", date)
            }
            ChampionshipError::InvalidGroup(group) => {
                write!(f, "Group number must be 1 or 2 (got {})", group)
            }
            ChampionshipError::DuplicateTeamName(name) => {
                write!(f, "Team '{}' already exists", name)
            }
            ChampionshipError::TeamNotFound(name) => {
                write!(f, "Team '{}' does not exist", name)
            }
            ChampionshipError::GroupNotFound(group) => {
                write!(f, "No teams registered in group {}", group)
            }
            ChampionshipError::TeamNotInGroup { name, group } => {
                write!(f, "Team '{}' is not in group {}", name, group)
            }
            ChampionshipError::SameTeam(name) => {
                write!(f, "A match needs two distinct teams (got '{}' twice)", name)
            }
            ChampionshipError::NegativeGoals => write!(f, "Goals must be zero or more"),
            ChampionshipError::NegativeStat(field) => {
                write!(f, "{} must be a non-negative number", field)
            }
        }
    }
}

/// Broad error category, used to pick the HTTP status at the API boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
}

impl ChampionshipError {
    pub fn kind(&self) -> ErrorKind {
        use ChampionshipError::*;
        match self {
            TeamNotFound(_) | GroupNotFound(_) | TeamNotInGroup { .. } => ErrorKind::NotFound,
            DuplicateTeamName(_) => ErrorKind::Conflict,
            _ => ErrorKind::Validation,
        }
    }
}

/// Outcome of a bulk operation: what was applied, plus one message per
/// rejected entry (in input order).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport<T> {
    pub applied: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self {
            applied: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Full championship state: registered teams, the match ledger, and the
/// audit trail. All mutations go through the logic module.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Championship {
    /// Registered teams, in registration order.
    pub teams: Vec<Team>,
    /// Append-only ledger of recorded matches.
    pub matches: Vec<MatchRecord>,
    /// Audit trail of successful mutations.
    pub audit: Vec<AuditEntry>,
}

impl Championship {
    pub fn new() -> Self {
        Self::default()
    }

    /// Team by exact display name.
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// Mutable team by exact display name.
    pub fn team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name == name)
    }

    /// Team by stable id (how the match ledger references teams).
    pub fn team_by_id(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Whether a display name is already in use (case-insensitive),
    /// ignoring the team identified by `except` (for renames).
    pub fn name_taken(&self, name: &str, except: Option<TeamId>) -> bool {
        self.teams
            .iter()
            .any(|t| Some(t.id) != except && t.name.eq_ignore_ascii_case(name))
    }

    /// Append an entry to the audit trail.
    pub fn record_audit(
        &mut self,
        action: AuditAction,
        entity: &'static str,
        details: impl Into<String>,
    ) {
        let entry = AuditEntry::new(action, entity, details);
        log::debug!("audit: {:?} {}: {}", entry.action, entry.entity, entry.details);
        self.audit.push(entry);
    }
}
