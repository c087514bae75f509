//! Single binary web server: championship REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Point systems default to 3/1/0 (standard) and 5/3/1 (alternate); override
//! with env MATCH_POINTS / ALTERNATE_POINTS as "win,draw,loss" triples.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use football_championship_web::{
    add_matches, add_teams, delete_team, get_outcome, get_team, rank_group, update_team,
    Championship, ChampionshipError, ErrorKind, MatchReport, NewTeam, PointSystem, ScoringRules,
    TeamUpdate,
};
use serde::Deserialize;
use std::sync::RwLock;

/// In-memory state: one championship behind a single lock. Writes take the
/// write lock for the whole batch; reads see a consistent snapshot.
type AppState = Data<RwLock<Championship>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segments: team name and group number (e.g. /rankings/getOutcome/{name}/{group}).
#[derive(Deserialize)]
struct OutcomePath {
    team_name: String,
    group_number: u32,
}

/// Map a championship error onto the HTTP status its category calls for.
fn error_response(e: &ChampionshipError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Conflict => HttpResponse::Conflict().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-championship-web",
    })
}

/// Register a batch of teams. Valid entries are applied; the rest are
/// reported per-entry in the `errors` array of the response.
#[post("/api/team/addTeams")]
async fn api_add_teams(state: AppState, body: Json<Vec<NewTeam>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let report = add_teams(&mut g, &body);
    HttpResponse::Ok().json(report)
}

/// Get a team's full record by name (404 if not registered).
#[get("/api/team/getTeam/{team_name}")]
async fn api_get_team(state: AppState, path: Path<String>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match get_team(&g, path.as_str()) {
        Ok(team) => HttpResponse::Ok().json(team),
        Err(e) => error_response(&e),
    }
}

/// Apply a partial update to a team. A rejected patch changes nothing.
#[put("/api/team/updateTeam")]
async fn api_update_team(state: AppState, body: Json<TeamUpdate>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match update_team(&mut g, &body) {
        Ok(team) => HttpResponse::Ok().json(team),
        Err(e) => error_response(&e),
    }
}

/// Delete a team by name. Its recorded matches are retained.
#[delete("/api/team/deleteTeam/{team_name}")]
async fn api_delete_team(state: AppState, path: Path<String>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match delete_team(&mut g, path.as_str()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => error_response(&e),
    }
}

/// Record a batch of match results. The batch is atomic: any invalid
/// entry rejects the whole submission, reported per-entry in `errors`.
#[post("/api/match/addMatches")]
async fn api_add_matches(
    state: AppState,
    rules: Data<ScoringRules>,
    body: Json<Vec<MatchReport>>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let report = add_matches(&mut g, rules.get_ref(), &body);
    HttpResponse::Ok().json(report)
}

/// Ranked table for one group: positions, points, and progression outcome.
#[get("/api/team/rankings/{group_number}")]
async fn api_get_rankings(state: AppState, path: Path<u32>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match rank_group(&g, path.into_inner()) {
        Ok(ranking) => HttpResponse::Ok().json(ranking),
        Err(e) => error_response(&e),
    }
}

/// Whether a team progresses out of its group (true/false).
#[get("/api/team/rankings/getOutcome/{team_name}/{group_number}")]
async fn api_get_outcome(state: AppState, path: Path<OutcomePath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match get_outcome(&g, &path.team_name, path.group_number) {
        Ok(progressed) => HttpResponse::Ok().json(progressed),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Read a point-system override from env, e.g. MATCH_POINTS="3,1,0".
fn point_system_from_env(var: &str, fallback: PointSystem) -> PointSystem {
    match std::env::var(var) {
        Ok(raw) => match PointSystem::parse(&raw) {
            Some(system) => system,
            None => {
                log::warn!("Ignoring {}=\"{}\": expected \"win,draw,loss\"", var, raw);
                fallback
            }
        },
        Err(_) => fallback,
    }
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

    let defaults = ScoringRules::default();
    let rules = ScoringRules {
        standard: point_system_from_env("MATCH_POINTS", defaults.standard),
        alternate: point_system_from_env("ALTERNATE_POINTS", defaults.alternate),
    };
    log::info!(
        "Point systems: standard {}/{}/{}, alternate {}/{}/{}",
        rules.standard.win,
        rules.standard.draw,
        rules.standard.loss,
        rules.alternate.win,
        rules.alternate.draw,
        rules.alternate.loss
    );
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Championship::new()));
    let rules_data = Data::new(rules);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(rules_data.clone())
            .service(api_health)
            .service(api_add_teams)
            .service(api_get_team)
            .service(api_update_team)
            .service(api_delete_team)
            .service(api_add_matches)
            .service(api_get_rankings)
            .service(api_get_outcome)
    })
    .bind(bind)?
    .run()
    .await
}
