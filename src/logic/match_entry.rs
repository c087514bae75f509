//! Match ledger: bulk result entry, validation, and aggregate updates.

use crate::logic::scoring::ScoringRules;
use crate::models::{
    AuditAction, BatchReport, Championship, ChampionshipError, MatchRecord, MatchReport, TeamId,
};

/// Record a batch of match results. The batch is atomic: every entry is
/// validated first, and if any entry fails, nothing is applied.
///
/// Each applied match appends a ledger record and folds into both teams'
/// aggregates: own goals scored, one match played, standard points into
/// `match_points`, alternate points into `alternate_points`.
pub fn add_matches(
    championship: &mut Championship,
    rules: &ScoringRules,
    reports: &[MatchReport],
) -> BatchReport<MatchRecord> {
    let mut validated: Vec<(TeamId, TeamId, u32, u32)> = Vec::with_capacity(reports.len());
    let mut errors = Vec::new();

    for report in reports {
        match validate_report(championship, report) {
            Ok(v) => validated.push(v),
            Err(e) => errors.push(format!(
                "Error processing match result for {} and {}: {}",
                report.team_a_name, report.team_b_name, e
            )),
        }
    }

    if !errors.is_empty() {
        log::warn!(
            "Rejected match batch: {} of {} entries invalid",
            errors.len(),
            reports.len()
        );
        return BatchReport {
            applied: Vec::new(),
            errors,
        };
    }

    let mut applied = Vec::with_capacity(validated.len());
    for (team_a, team_b, a_goals, b_goals) in validated {
        let (a_points, b_points) = rules.standard.points_for(a_goals, b_goals);
        let (a_alt, b_alt) = rules.alternate.points_for(a_goals, b_goals);
        apply_to_team(championship, team_a, a_goals, a_points, a_alt);
        apply_to_team(championship, team_b, b_goals, b_points, b_alt);

        let record = MatchRecord::new(team_a, team_b, a_goals, b_goals);
        championship.matches.push(record.clone());
        applied.push(record);
    }

    if !applied.is_empty() {
        championship.record_audit(
            AuditAction::Insert,
            "Match",
            format!("{} match result(s) recorded", applied.len()),
        );
    }
    BatchReport {
        applied,
        errors: Vec::new(),
    }
}

fn validate_report(
    championship: &Championship,
    report: &MatchReport,
) -> Result<(TeamId, TeamId, u32, u32), ChampionshipError> {
    if report.team_a_name == report.team_b_name {
        return Err(ChampionshipError::SameTeam(report.team_a_name.clone()));
    }
    let team_a = championship
        .team(&report.team_a_name)
        .ok_or_else(|| ChampionshipError::TeamNotFound(report.team_a_name.clone()))?
        .id;
    let team_b = championship
        .team(&report.team_b_name)
        .ok_or_else(|| ChampionshipError::TeamNotFound(report.team_b_name.clone()))?
        .id;
    let a_goals = validate_goals(report.team_a_goals)?;
    let b_goals = validate_goals(report.team_b_goals)?;
    Ok((team_a, team_b, a_goals, b_goals))
}

fn validate_goals(goals: i64) -> Result<u32, ChampionshipError> {
    u32::try_from(goals).map_err(|_| ChampionshipError::NegativeGoals)
}

/// Fold one side of a match into a team's aggregates. The id was resolved
/// under the same borrow that applies the batch, so the lookup cannot miss.
fn apply_to_team(
    championship: &mut Championship,
    id: TeamId,
    goals: u32,
    points: u32,
    alt_points: u32,
) {
    if let Some(team) = championship.teams.iter_mut().find(|t| t.id == id) {
        team.total_goals += goals;
        team.match_points += points;
        team.alternate_points += alt_points;
        team.matches_played += 1;
    }
}
