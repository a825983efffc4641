//! Single binary web server: tournament admin and scoring API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use beach_tournament_web::{
    assign_courts, claim_live, clear_pool_matches, compute_standings, generate_bracket,
    generate_pool_schedule, heartbeat, infer_referees, rebuild_bracket, release_live,
    report_bracket_result, report_pool_result, tournament_seeds, update_live_score, MatchType,
    ScheduleTemplate, Tiebreaker, Tournament, TournamentError, TournamentId,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct AddPoolBody {
    name: String,
    #[serde(default)]
    court_label: Option<String>,
}

#[derive(Deserialize)]
struct AssignPoolBody {
    pool_id: Uuid,
}

#[derive(Deserialize)]
struct SetSeedBody {
    seed: u32,
}

#[derive(Deserialize)]
struct RenameTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct SetTiebreakersBody {
    tiebreakers: Vec<Tiebreaker>,
}

#[derive(Deserialize)]
struct SetCourtsBody {
    courts: Vec<String>,
}

#[derive(Deserialize)]
struct ClearScheduleBody {
    #[serde(default)]
    pool_id: Option<Uuid>,
}

#[derive(Deserialize)]
struct ResultBody {
    team1_score: u32,
    team2_score: u32,
}

#[derive(Deserialize)]
struct LeaseBody {
    owner: String,
}

#[derive(Deserialize)]
struct LiveScoreBody {
    owner: String,
    team1_score: u32,
    team2_score: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and team id.
#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: Uuid,
}

/// Path segments: tournament id and pool id.
#[derive(Deserialize)]
struct TournamentPoolPath {
    id: TournamentId,
    pool_id: Uuid,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: Uuid,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    match e {
        TournamentError::Validation(errors) => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": e.to_string(), "errors": errors })),
        // Lease conflicts are distinct: the client disables controls, no retry.
        TournamentError::LeaseHeld { .. } => {
            HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }))
        }
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "beach-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = Tournament::new(body.name.trim());
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().tournament)
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Add a team (Setup or PoolPlay).
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddTeamBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.add_team(body.name.trim()) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Add a pool (Setup only).
#[post("/api/tournaments/{id}/pools")]
async fn api_add_pool(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddPoolBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.add_pool(body.name.trim(), body.court_label.clone()) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Assign a team to a pool (Setup only).
#[put("/api/tournaments/{id}/teams/{team_id}/pool")]
async fn api_assign_pool(
    state: AppState,
    path: Path<TournamentTeamPath>,
    body: Json<AssignPoolBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.assign_team_to_pool(path.team_id, body.pool_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Set a team's seed within its pool (Setup only).
#[put("/api/tournaments/{id}/teams/{team_id}/seed")]
async fn api_set_seed(
    state: AppState,
    path: Path<TournamentTeamPath>,
    body: Json<SetSeedBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.set_seed_in_pool(path.team_id, body.seed) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Rename a team (any phase before Completed).
#[put("/api/tournaments/{id}/teams/{team_id}/name")]
async fn api_rename_team(
    state: AppState,
    path: Path<TournamentTeamPath>,
    body: Json<RenameTeamBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.rename_team(path.team_id, body.name.trim()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Replace the tiebreaker order (Setup or PoolPlay).
#[put("/api/tournaments/{id}/tiebreakers")]
async fn api_set_tiebreakers(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<SetTiebreakersBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.set_tiebreakers(body.tiebreakers.clone()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Replace the court labels used for bracket court assignment.
#[put("/api/tournaments/{id}/courts")]
async fn api_set_courts(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<SetCourtsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    t.set_courts(body.courts.clone());
    HttpResponse::Ok().json(t)
}

/// Store a schedule template for one pool size, replacing any existing one.
/// The shape is validated before anything is stored.
#[put("/api/tournaments/{id}/templates")]
async fn api_set_template(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ScheduleTemplate>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let template = body.into_inner();
    if let Err(errors) = template.validate() {
        return error_response(&TournamentError::Validation(errors));
    }
    t.templates.insert(template.pool_size, template);
    HttpResponse::Ok().json(t)
}

/// Generate the pool schedule from templates (all prerequisites must pass).
#[post("/api/tournaments/{id}/schedule/generate")]
async fn api_generate_schedule(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match generate_pool_schedule(t) {
        Ok(inserted) => {
            HttpResponse::Ok().json(serde_json::json!({ "inserted": inserted, "tournament": t }))
        }
        Err(e) => error_response(&e),
    }
}

/// Clear pool matches (all, or one pool's) before regenerating.
#[post("/api/tournaments/{id}/schedule/clear")]
async fn api_clear_schedule(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<ClearScheduleBody>>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let deleted = clear_pool_matches(t, body.as_ref().and_then(|b| b.pool_id));
    HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted, "tournament": t }))
}

/// Current standings for one pool, best team first.
#[get("/api/tournaments/{id}/pools/{pool_id}/standings")]
async fn api_pool_standings(state: AppState, path: Path<TournamentPoolPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &entry.tournament;
    if t.pool(path.pool_id).is_none() {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No pool" }));
    }
    let teams = t.teams_in_pool(path.pool_id);
    let matches = t.pool_matches(path.pool_id);
    let standings = compute_standings(&teams, &matches, &t.rules.tiebreakers);
    HttpResponse::Ok().json(standings)
}

/// Current tournament-wide seed order (pool winners, then runners-up).
#[get("/api/tournaments/{id}/seeds")]
async fn api_seeds(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let seed_list = tournament_seeds(&entry.tournament);
    HttpResponse::Ok().json(serde_json::json!({
        "winners": seed_list.winners,
        "runners": seed_list.runners,
        "seeds": seed_list.seeds(),
    }))
}

/// Generate the elimination bracket from current standings.
#[post("/api/tournaments/{id}/bracket/generate")]
async fn api_generate_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match generate_bracket(t) {
        Ok(inserted) => {
            HttpResponse::Ok().json(serde_json::json!({ "inserted": inserted, "tournament": t }))
        }
        Err(e) => error_response(&e),
    }
}

/// Rebuild the bracket from current standings (only before it has started).
#[post("/api/tournaments/{id}/bracket/rebuild")]
async fn api_rebuild_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match rebuild_bracket(t) {
        Ok(inserted) => {
            HttpResponse::Ok().json(serde_json::json!({ "inserted": inserted, "tournament": t }))
        }
        Err(e) => error_response(&e),
    }
}

/// Bracket view: matches plus derived court assignments and referees.
#[get("/api/tournaments/{id}/bracket")]
async fn api_bracket_view(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &entry.tournament;
    let matches = t.bracket_matches();
    let courts = assign_courts(&matches, &t.courts);
    let referees = infer_referees(&matches);
    HttpResponse::Ok().json(serde_json::json!({
        "matches": matches,
        "courts": courts,
        "referees": referees,
    }))
}

/// Record a final score on a match. Bracket results advance the winner.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_report_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let match_type = match t.game_match(path.match_id) {
        Some(m) => m.match_type,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" })),
    };
    let result = match match_type {
        MatchType::Pool => report_pool_result(t, path.match_id, body.team1_score, body.team2_score),
        MatchType::Bracket => {
            report_bracket_result(t, path.match_id, body.team1_score, body.team2_score)
        }
    };
    match result {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Claim the live-scoring lease for a match.
#[post("/api/tournaments/{id}/matches/{match_id}/live/claim")]
async fn api_live_claim(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<LeaseBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match claim_live(t, path.match_id, &body.owner, Utc::now()) {
        Ok(()) => HttpResponse::Ok().json(t.game_match(path.match_id)),
        Err(e) => error_response(&e),
    }
}

/// Renew the live-scoring lease.
#[post("/api/tournaments/{id}/matches/{match_id}/live/heartbeat")]
async fn api_live_heartbeat(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<LeaseBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match heartbeat(t, path.match_id, &body.owner, Utc::now()) {
        Ok(()) => HttpResponse::Ok().json(t.game_match(path.match_id)),
        Err(e) => error_response(&e),
    }
}

/// Update the live score (implies a heartbeat).
#[put("/api/tournaments/{id}/matches/{match_id}/live/score")]
async fn api_live_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<LiveScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match update_live_score(
        t,
        path.match_id,
        &body.owner,
        body.team1_score,
        body.team2_score,
        Utc::now(),
    ) {
        Ok(()) => HttpResponse::Ok().json(t.game_match(path.match_id)),
        Err(e) => error_response(&e),
    }
}

/// Release the live-scoring lease (pause or navigate away).
#[post("/api/tournaments/{id}/matches/{match_id}/live/release")]
async fn api_live_release(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<LeaseBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match release_live(t, path.match_id, &body.owner, Utc::now()) {
        Ok(()) => HttpResponse::Ok().json(t.game_match(path.match_id)),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_team)
            .service(api_add_pool)
            .service(api_assign_pool)
            .service(api_set_seed)
            .service(api_rename_team)
            .service(api_set_tiebreakers)
            .service(api_set_courts)
            .service(api_set_template)
            .service(api_generate_schedule)
            .service(api_clear_schedule)
            .service(api_pool_standings)
            .service(api_seeds)
            .service(api_generate_bracket)
            .service(api_rebuild_bracket)
            .service(api_bracket_view)
            .service(api_report_result)
            .service(api_live_claim)
            .service(api_live_heartbeat)
            .service(api_live_score)
            .service(api_live_release)
    })
    .bind(bind)?
    .run()
    .await
}
