//! Integration tests for match entry: scoring, aggregate updates, batch atomicity.

use football_championship_web::{
    add_matches, add_teams, get_team, AuditAction, Championship, MatchReport, NewTeam,
    ScoringRules,
};

fn championship_with(teams: &[(&str, i64)]) -> Championship {
    let mut c = Championship::new();
    let entries: Vec<NewTeam> = teams
        .iter()
        .map(|(name, group)| NewTeam {
            name: name.to_string(),
            registration_date: "01/01".to_string(),
            group_number: *group,
        })
        .collect();
    let report = add_teams(&mut c, &entries);
    assert!(report.errors.is_empty(), "setup failed: {:?}", report.errors);
    c
}

fn report(a: &str, b: &str, a_goals: i64, b_goals: i64) -> MatchReport {
    MatchReport {
        team_a_name: a.to_string(),
        team_b_name: b.to_string(),
        team_a_goals: a_goals,
        team_b_goals: b_goals,
    }
}

#[test]
fn win_updates_both_teams() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1)]);
    let rules = ScoringRules::default();

    let result = add_matches(&mut c, &rules, &[report("Alpha", "Beta", 3, 1)]);
    assert!(result.errors.is_empty());
    assert_eq!(result.applied.len(), 1);
    assert_eq!(c.matches.len(), 1);

    let alpha = get_team(&c, "Alpha").unwrap();
    assert_eq!(alpha.match_points, 3);
    assert_eq!(alpha.total_goals, 3);
    assert_eq!(alpha.alternate_points, 5);
    assert_eq!(alpha.matches_played, 1);

    let beta = get_team(&c, "Beta").unwrap();
    assert_eq!(beta.match_points, 0);
    assert_eq!(beta.total_goals, 1);
    assert_eq!(beta.alternate_points, 1);
    assert_eq!(beta.matches_played, 1);
}

#[test]
fn draw_awards_draw_points_to_both() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1)]);
    let rules = ScoringRules::default();

    add_matches(&mut c, &rules, &[report("Alpha", "Beta", 2, 2)]);

    for name in ["Alpha", "Beta"] {
        let team = get_team(&c, name).unwrap();
        assert_eq!(team.match_points, 1);
        assert_eq!(team.alternate_points, 3);
        assert_eq!(team.total_goals, 2);
        assert_eq!(team.matches_played, 1);
    }
}

#[test]
fn aggregates_accumulate_across_matches() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1), ("Gamma", 1)]);
    let rules = ScoringRules::default();

    let result = add_matches(
        &mut c,
        &rules,
        &[
            report("Alpha", "Beta", 2, 0),
            report("Gamma", "Alpha", 1, 1),
        ],
    );
    assert!(result.errors.is_empty());
    assert_eq!(c.matches.len(), 2);

    let alpha = get_team(&c, "Alpha").unwrap();
    assert_eq!(alpha.match_points, 4); // 3 for the win, 1 for the draw
    assert_eq!(alpha.total_goals, 3);
    assert_eq!(alpha.alternate_points, 8); // 5 + 3
    assert_eq!(alpha.matches_played, 2);
}

#[test]
fn same_team_on_both_sides_is_rejected_without_mutation() {
    let mut c = championship_with(&[("Alpha", 1)]);
    let rules = ScoringRules::default();

    let result = add_matches(&mut c, &rules, &[report("Alpha", "Alpha", 1, 0)]);
    assert!(result.applied.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("two distinct teams"));

    assert!(c.matches.is_empty());
    let alpha = get_team(&c, "Alpha").unwrap();
    assert_eq!(alpha.matches_played, 0);
    assert_eq!(alpha.total_goals, 0);
}

#[test]
fn unknown_team_is_rejected() {
    let mut c = championship_with(&[("Alpha", 1)]);
    let rules = ScoringRules::default();

    let result = add_matches(&mut c, &rules, &[report("Alpha", "Ghost", 1, 0)]);
    assert!(result.applied.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Ghost"));
    assert!(c.matches.is_empty());
}

#[test]
fn negative_goals_are_rejected() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1)]);
    let rules = ScoringRules::default();

    let result = add_matches(&mut c, &rules, &[report("Alpha", "Beta", -1, 0)]);
    assert!(result.applied.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("zero or more"));
}

#[test]
fn one_invalid_entry_rejects_the_whole_batch() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1)]);
    let rules = ScoringRules::default();

    let result = add_matches(
        &mut c,
        &rules,
        &[
            report("Alpha", "Beta", 2, 0),   // valid on its own
            report("Alpha", "Ghost", 1, 0),  // unknown opponent
        ],
    );
    assert!(result.applied.is_empty());
    assert_eq!(result.errors.len(), 1);

    // The valid entry was not applied either.
    assert!(c.matches.is_empty());
    let alpha = get_team(&c, "Alpha").unwrap();
    assert_eq!(alpha.match_points, 0);
    assert_eq!(alpha.matches_played, 0);
}

#[test]
fn custom_point_systems_are_respected() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1)]);
    let rules = ScoringRules {
        standard: football_championship_web::PointSystem {
            win: 2,
            draw: 1,
            loss: 0,
        },
        alternate: football_championship_web::PointSystem {
            win: 10,
            draw: 5,
            loss: 2,
        },
    };

    add_matches(&mut c, &rules, &[report("Alpha", "Beta", 1, 0)]);

    assert_eq!(get_team(&c, "Alpha").unwrap().match_points, 2);
    assert_eq!(get_team(&c, "Alpha").unwrap().alternate_points, 10);
    assert_eq!(get_team(&c, "Beta").unwrap().alternate_points, 2);
}

#[test]
fn applied_batches_are_audited() {
    let mut c = championship_with(&[("Alpha", 1), ("Beta", 1)]);
    let rules = ScoringRules::default();

    add_matches(&mut c, &rules, &[report("Alpha", "Beta", 1, 0)]);

    let match_audits: Vec<_> = c.audit.iter().filter(|e| e.entity == "Match").collect();
    assert_eq!(match_audits.len(), 1);
    assert_eq!(match_audits[0].action, AuditAction::Insert);
}
