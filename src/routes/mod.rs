// sportshub-service/src/routes/mod.rs
pub mod admin_routes;
pub mod captain_routes;
pub mod partner_routes;
pub mod register_routes;
pub mod sport_routes;
pub mod team_routes;
pub mod tournament_routes;

use crate::utils::now_iso;
use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

// Liveness probe
#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "SportsHub API is running",
        "timestamp": now_iso(),
    }))
}

// Default service for unmatched routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "Route not found",
        "path": req.path(),
    }))
}

// Mounts every resource router plus the health probe; main and the tests
// share this so they always agree on the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
    register_routes::init_routes(cfg);
    team_routes::init_routes(cfg);
    tournament_routes::init_routes(cfg);
    sport_routes::init_routes(cfg);
    partner_routes::init_routes(cfg);
    admin_routes::init_routes(cfg);
    captain_routes::init_routes(cfg);
}
