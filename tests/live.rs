//! Integration tests for the live-scoring lease state machine.

use beach_tournament_web::{
    claim_live, heartbeat, lease_state, release_live, report_pool_result, update_live_score,
    GameMatch, LeaseState, MatchId, Tournament, TournamentError, LEASE_WINDOW_SECS,
};
use chrono::{Duration, TimeZone, Utc};

fn tournament_with_match() -> (Tournament, MatchId) {
    let mut t = Tournament::new("Test Open");
    let pool = t.add_pool("Pool A", None).unwrap();
    let a = t.add_team("Aces").unwrap();
    let b = t.add_team("Blockers").unwrap();
    let m = GameMatch::pool_match(t.id, pool, 1, Some(a), Some(b));
    let id = m.id;
    t.matches.push(m);
    (t, id)
}

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 6, 10, 0, 0).unwrap()
}

#[test]
fn claim_on_idle_match_succeeds() {
    let (mut t, m_id) = tournament_with_match();
    assert_eq!(lease_state(&t, m_id, t0()).unwrap(), LeaseState::Idle);
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();

    let m = t.game_match(m_id).unwrap();
    assert!(m.is_live);
    assert_eq!(m.live_owner_id.as_deref(), Some("board-1"));
    assert_eq!(m.live_score_team1, Some(0));
    assert_eq!(m.live_score_team2, Some(0));
    assert!(matches!(
        lease_state(&t, m_id, t0()).unwrap(),
        LeaseState::Claimed { .. }
    ));
}

#[test]
fn claim_conflicts_while_lease_is_current() {
    let (mut t, m_id) = tournament_with_match();
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();
    let err = claim_live(&mut t, m_id, "board-2", t0() + Duration::seconds(5)).unwrap_err();
    assert_eq!(
        err,
        TournamentError::LeaseHeld {
            owner: "board-1".to_string()
        }
    );
    // Same owner may re-claim at any time.
    claim_live(&mut t, m_id, "board-1", t0() + Duration::seconds(5)).unwrap();
}

#[test]
fn stale_lease_can_be_reclaimed_by_anyone() {
    let (mut t, m_id) = tournament_with_match();
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();
    let later = t0() + Duration::seconds(LEASE_WINDOW_SECS + 1);
    assert!(matches!(
        lease_state(&t, m_id, later).unwrap(),
        LeaseState::Expired { .. }
    ));
    claim_live(&mut t, m_id, "board-2", later).unwrap();
    let m = t.game_match(m_id).unwrap();
    assert_eq!(m.live_owner_id.as_deref(), Some("board-2"));
}

#[test]
fn heartbeat_extends_the_lease() {
    let (mut t, m_id) = tournament_with_match();
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();
    heartbeat(&mut t, m_id, "board-1", t0() + Duration::seconds(30)).unwrap();
    // Past the original window but inside the renewed one.
    let probe = t0() + Duration::seconds(LEASE_WINDOW_SECS + 10);
    let err = claim_live(&mut t, m_id, "board-2", probe).unwrap_err();
    assert!(matches!(err, TournamentError::LeaseHeld { .. }));
}

#[test]
fn only_the_holder_may_heartbeat_or_score() {
    let (mut t, m_id) = tournament_with_match();
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();
    assert!(matches!(
        heartbeat(&mut t, m_id, "board-2", t0()),
        Err(TournamentError::LeaseHeld { .. })
    ));
    assert!(matches!(
        update_live_score(&mut t, m_id, "board-2", 5, 3, t0()),
        Err(TournamentError::LeaseHeld { .. })
    ));
    update_live_score(&mut t, m_id, "board-1", 5, 3, t0() + Duration::seconds(10)).unwrap();
    let m = t.game_match(m_id).unwrap();
    assert_eq!(m.live_score_team1, Some(5));
    assert_eq!(m.live_score_team2, Some(3));
}

#[test]
fn release_clears_ownership_and_scores() {
    let (mut t, m_id) = tournament_with_match();
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();
    update_live_score(&mut t, m_id, "board-1", 12, 9, t0()).unwrap();
    release_live(&mut t, m_id, "board-1", t0()).unwrap();

    let m = t.game_match(m_id).unwrap();
    assert!(!m.is_live);
    assert_eq!(m.live_owner_id, None);
    assert_eq!(m.live_last_active_at, None);
    assert_eq!(m.live_score_team1, None);
    assert_eq!(lease_state(&t, m_id, t0()).unwrap(), LeaseState::Idle);
}

#[test]
fn releasing_an_idle_match_is_refused() {
    let (mut t, m_id) = tournament_with_match();
    assert!(matches!(
        release_live(&mut t, m_id, "board-1", t0()),
        Err(TournamentError::NotLeaseOwner)
    ));
}

#[test]
fn final_score_submission_clears_the_lease() {
    let (mut t, m_id) = tournament_with_match();
    claim_live(&mut t, m_id, "board-1", t0()).unwrap();
    update_live_score(&mut t, m_id, "board-1", 21, 17, t0()).unwrap();
    report_pool_result(&mut t, m_id, 21, 17).unwrap();

    let m = t.game_match(m_id).unwrap();
    assert!(m.is_completed());
    assert!(!m.is_live);
    assert_eq!(m.live_owner_id, None);
}
