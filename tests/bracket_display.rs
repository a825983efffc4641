//! Integration tests for derived bracket metadata: courts and referees.

use beach_tournament_web::{
    assign_courts, build_bracket_matches, infer_referees, sort_court_labels, GameMatch, TeamId,
};
use uuid::Uuid;

fn team_ids(n: usize) -> Vec<TeamId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

fn labels(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn court_labels_sort_numerics_first_then_names() {
    let sorted = sort_court_labels(&labels(&["10", "2", "Center", "1", "Annex"]));
    assert_eq!(sorted, labels(&["1", "2", "10", "Annex", "Center"]));
}

#[test]
fn courts_rotate_within_each_round() {
    let tid = Uuid::new_v4();
    let seeds = team_ids(8);
    let matches = build_bracket_matches(tid, &seeds).unwrap();
    let refs: Vec<&GameMatch> = matches.iter().collect();
    let courts = assign_courts(&refs, &labels(&["2", "1"]));

    // Full bracket of 8: four quarterfinals alternate courts 1,2,1,2 and the
    // rotation restarts each round.
    let round1: Vec<_> = refs
        .iter()
        .filter(|m| m.bracket_round == Some(1))
        .collect();
    assert_eq!(courts[&round1[0].id], "1");
    assert_eq!(courts[&round1[1].id], "2");
    assert_eq!(courts[&round1[2].id], "1");
    assert_eq!(courts[&round1[3].id], "2");
    let round2: Vec<_> = refs
        .iter()
        .filter(|m| m.bracket_round == Some(2))
        .collect();
    assert_eq!(courts[&round2[0].id], "1");
    assert_eq!(courts[&round2[1].id], "2");
}

#[test]
fn no_courts_configured_assigns_nothing() {
    let tid = Uuid::new_v4();
    let matches = build_bracket_matches(tid, &team_ids(4)).unwrap();
    let refs: Vec<&GameMatch> = matches.iter().collect();
    assert!(assign_courts(&refs, &[]).is_empty());
}

/// Five advancers: the idle bye team waiting on the play-in referees it.
#[test]
fn waiting_bye_team_referees_the_playin() {
    let tid = Uuid::new_v4();
    let seeds = team_ids(5);
    let matches = build_bracket_matches(tid, &seeds).unwrap();
    let refs: Vec<&GameMatch> = matches.iter().collect();
    let referees = infer_referees(&refs);

    let playin = refs
        .iter()
        .find(|m| m.bracket_round == Some(1))
        .unwrap();
    // Seed 1 is carried into the round-2 slot the play-in winner joins, so
    // seed 1 officiates while waiting.
    assert_eq!(referees.get(&playin.id), Some(&seeds[0]));
}

#[test]
fn later_matches_are_refereed_by_the_previous_loser() {
    let tid = Uuid::new_v4();
    let ids = team_ids(4);
    let mut semi0 = GameMatch::bracket_match(tid, 1, 0, Some(ids[0]), Some(ids[1]));
    semi0.team1_score = Some(21);
    semi0.team2_score = Some(15);
    semi0.winner_id = Some(ids[0]);
    let mut semi1 = GameMatch::bracket_match(tid, 1, 1, Some(ids[2]), Some(ids[3]));
    semi1.team1_score = Some(18);
    semi1.team2_score = Some(21);
    semi1.winner_id = Some(ids[3]);
    let last = GameMatch::bracket_match(tid, 2, 0, Some(ids[0]), Some(ids[3]));
    let rows = [&semi0, &semi1, &last];

    let referees = infer_referees(&rows);
    // Second semifinal: refereed by the loser of the first.
    assert_eq!(referees.get(&semi1.id), Some(&ids[1]));
    // Final: refereed by the loser of the most recent played match.
    assert_eq!(referees.get(&last.id), Some(&ids[2]));
    // The first match of the day has nobody to referee it.
    assert_eq!(referees.get(&semi0.id), None);
}

/// A round-1 row with a single team (manually edited bracket) is a bye:
/// nothing is played, nobody referees it.
#[test]
fn bye_rows_get_no_referee() {
    let tid = Uuid::new_v4();
    let ids = team_ids(3);
    let mut played = GameMatch::bracket_match(tid, 1, 0, Some(ids[0]), Some(ids[1]));
    played.team1_score = Some(21);
    played.team2_score = Some(10);
    played.winner_id = Some(ids[0]);
    let bye = GameMatch::bracket_match(tid, 1, 1, Some(ids[2]), None);
    let rows = [&played, &bye];

    let referees = infer_referees(&rows);
    assert_eq!(referees.get(&bye.id), None);
}
