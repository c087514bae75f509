//! Team registry operations: bulk registration, lookup, partial update, deletion.

use crate::models::{
    AuditAction, BatchReport, Championship, ChampionshipError, NewTeam, Team, TeamUpdate,
};
use chrono::{Datelike, Local, NaiveDate};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;

/// Parse a `dd/MM` registration date, filling in the year from `today`.
/// Dates after `today` are rejected.
pub fn parse_registration_date(
    input: &str,
    today: NaiveDate,
) -> Result<NaiveDate, ChampionshipError> {
    let with_year = format!("{}/{}", input.trim(), today.year());
    let date = NaiveDate::parse_from_str(&with_year, "%d/%m/%Y")
        .map_err(|_| ChampionshipError::InvalidDate(input.to_string()))?;
    if date > today {
        return Err(ChampionshipError::FutureRegistrationDate(date));
    }
    Ok(date)
}

fn validate_name(name: &str) -> Result<String, ChampionshipError> {
    let trimmed = name.trim();
    if trimmed.len() < NAME_MIN || trimmed.len() > NAME_MAX {
        return Err(ChampionshipError::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

fn validate_group(group: i64) -> Result<u32, ChampionshipError> {
    if group == 1 || group == 2 {
        Ok(group as u32)
    } else {
        Err(ChampionshipError::InvalidGroup(group))
    }
}

fn validate_stat(
    field: &'static str,
    value: Option<i64>,
) -> Result<Option<u32>, ChampionshipError> {
    match value {
        None => Ok(None),
        Some(v) => match u32::try_from(v) {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(ChampionshipError::NegativeStat(field)),
        },
    }
}

/// Register a batch of teams. Entries are validated independently: valid
/// ones are inserted, each failing one contributes a message to `errors`
/// and touches nothing. Duplicate names are checked against the registry
/// and against earlier entries of the same batch (case-insensitive).
pub fn add_teams(championship: &mut Championship, entries: &[NewTeam]) -> BatchReport<Team> {
    let today = Local::now().date_naive();
    let mut report = BatchReport::default();

    for entry in entries {
        match validate_new_team(championship, entry, today) {
            Ok(team) => {
                championship.teams.push(team.clone());
                report.applied.push(team);
            }
            Err(e) => report
                .errors
                .push(format!("Error processing team for {}: {}", entry.name, e)),
        }
    }

    if !report.applied.is_empty() {
        let names: Vec<&str> = report.applied.iter().map(|t| t.name.as_str()).collect();
        championship.record_audit(AuditAction::Insert, "Team", names.join(", "));
    }
    if !report.errors.is_empty() {
        log::warn!("Rejected {} team registration(s)", report.errors.len());
    }
    report
}

fn validate_new_team(
    championship: &Championship,
    entry: &NewTeam,
    today: NaiveDate,
) -> Result<Team, ChampionshipError> {
    let name = validate_name(&entry.name)?;
    if championship.name_taken(&name, None) {
        return Err(ChampionshipError::DuplicateTeamName(name));
    }
    let date = parse_registration_date(&entry.registration_date, today)?;
    let group = validate_group(entry.group_number)?;
    Ok(Team::new(name, date, group))
}

/// Look up a team by exact display name.
pub fn get_team<'a>(
    championship: &'a Championship,
    name: &str,
) -> Result<&'a Team, ChampionshipError> {
    championship
        .team(name)
        .ok_or_else(|| ChampionshipError::TeamNotFound(name.to_string()))
}

/// Apply a partial update to a team. Every supplied field is validated
/// before any field is written, so a rejected patch leaves the record
/// unchanged. Renames are metadata-only: the match ledger references the
/// team by id and is not touched.
pub fn update_team(
    championship: &mut Championship,
    patch: &TeamUpdate,
) -> Result<Team, ChampionshipError> {
    let today = Local::now().date_naive();
    let team_id = get_team(championship, &patch.team_name)?.id;

    let new_name = match &patch.new_name {
        Some(name) => {
            let name = validate_name(name)?;
            if championship.name_taken(&name, Some(team_id)) {
                return Err(ChampionshipError::DuplicateTeamName(name));
            }
            Some(name)
        }
        None => None,
    };
    let new_date = match &patch.new_registration_date {
        Some(input) => Some(parse_registration_date(input, today)?),
        None => None,
    };
    let new_group = match patch.group_number {
        Some(g) => Some(validate_group(g)?),
        None => None,
    };
    let total_goals = validate_stat("totalGoals", patch.total_goals)?;
    let match_points = validate_stat("matchPoints", patch.match_points)?;
    let alternate_points = validate_stat("alternatePoints", patch.alternate_points)?;
    let matches_played = validate_stat("matchesPlayed", patch.matches_played)?;

    let team = championship
        .team_mut(&patch.team_name)
        .ok_or_else(|| ChampionshipError::TeamNotFound(patch.team_name.clone()))?;
    if let Some(name) = new_name {
        team.name = name;
    }
    if let Some(date) = new_date {
        team.registration_date = date;
    }
    if let Some(group) = new_group {
        team.group_number = group;
    }
    if let Some(v) = total_goals {
        team.total_goals = v;
    }
    if let Some(v) = match_points {
        team.match_points = v;
    }
    if let Some(v) = alternate_points {
        team.alternate_points = v;
    }
    if let Some(v) = matches_played {
        team.matches_played = v;
    }
    let updated = team.clone();

    championship.record_audit(AuditAction::Update, "Team", updated.name.clone());
    Ok(updated)
}

/// Remove a team from the registry. Its recorded matches are retained so
/// the opponents' accumulated statistics keep their backing history.
pub fn delete_team(championship: &mut Championship, name: &str) -> Result<(), ChampionshipError> {
    let idx = championship
        .teams
        .iter()
        .position(|t| t.name == name)
        .ok_or_else(|| ChampionshipError::TeamNotFound(name.to_string()))?;
    let removed = championship.teams.remove(idx);
    championship.record_audit(AuditAction::Delete, "Team", removed.name);
    Ok(())
}
