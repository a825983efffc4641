//! Tournament business logic: standings, seeding, bracket, schedules, live scoring.

mod bracket;
mod bracket_display;
mod live;
mod pool_schedule;
mod seeding;
mod standings;
mod templates;

pub use bracket::{
    bracket_size_for, build_bracket_matches, generate_bracket, is_bye, mark_bracket_started,
    rebuild_bracket, report_bracket_result, MAX_BRACKET_SIZE,
};
pub use bracket_display::{assign_courts, infer_referees, sort_court_labels};
pub use live::{
    claim_live, heartbeat, lease_state, release_live, update_live_score, LeaseState,
    LEASE_WINDOW_SECS,
};
pub use pool_schedule::{
    clear_pool_matches, generate_pool_schedule, report_pool_result,
};
pub use seeding::{compute_seeds, tournament_seeds, SeedList};
pub use standings::{compute_standings, Standing};
pub use templates::{default_template, SUPPORTED_POOL_SIZES};
