// sportshub-service/src/routes/team_routes.rs
use crate::models::{Captain, ServiceError, TeamPayload};
use crate::state::AppState;
use crate::utils::{is_valid_email, now_iso, trimmed_min};
use actix_web::{get, post, web, HttpResponse};
use log::info;
use serde_json::json;
use uuid::Uuid;

// Password assigned to every captain created through team registration.
pub const DEFAULT_CAPTAIN_PASSWORD: &str = "default123";

fn validate_team(payload: &TeamPayload) -> Result<(), ServiceError> {
    if trimmed_min(&payload.team_name, 2).is_none() {
        return Err(ServiceError::BadRequest(
            "Team name must be at least 2 characters long".to_string(),
        ));
    }

    if trimmed_min(&payload.sport, 1).is_none() {
        return Err(ServiceError::BadRequest("Sport is required".to_string()));
    }

    if trimmed_min(&payload.captain_name, 2).is_none() {
        return Err(ServiceError::BadRequest(
            "Captain name is required".to_string(),
        ));
    }

    if !payload.captain_email.as_deref().map_or(false, is_valid_email) {
        return Err(ServiceError::BadRequest(
            "Valid captain email is required".to_string(),
        ));
    }

    if trimmed_min(&payload.captain_phone, 10).is_none() {
        return Err(ServiceError::BadRequest(
            "Valid captain phone number is required".to_string(),
        ));
    }

    if payload.players.as_ref().map_or(true, |p| p.is_empty()) {
        return Err(ServiceError::BadRequest(
            "At least one player is required".to_string(),
        ));
    }

    Ok(())
}

// POST /api/teams - Register a new team (creates the captain principal too)
#[post("/api/teams")]
async fn register_team(
    state: web::Data<AppState>,
    payload: web::Json<TeamPayload>,
) -> Result<HttpResponse, ServiceError> {
    validate_team(&payload)?;

    let team_name = payload.team_name.as_deref().unwrap_or_default().trim().to_string();
    let sport = payload.sport.as_deref().unwrap_or_default().trim().to_string();
    let captain_name = payload.captain_name.as_deref().unwrap_or_default().trim().to_string();
    let captain_email = payload.captain_email.as_deref().unwrap_or_default().trim().to_string();
    let captain_phone = payload.captain_phone.as_deref().unwrap_or_default().trim().to_string();
    let players = payload.players.clone().unwrap_or_default();

    let timestamp = now_iso();
    let player_count = players.len();
    let player_names = players
        .iter()
        .map(|p| p.name.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(", ");

    let row = vec![
        timestamp.clone(),
        team_name.clone(),
        sport.clone(),
        captain_name.clone(),
        captain_email.clone(),
        captain_phone.clone(),
        player_count.to_string(),
        player_names,
    ];

    state.sheets.append_row("Teams", row).await;

    info!(
        "✅ New team registration: {} - {} ({} players)",
        team_name, sport, player_count
    );

    // No duplicate-email check here: registering two teams with the same
    // captain email creates two captain records.
    let captain = Captain {
        id: Uuid::new_v4().to_string(),
        team_name: team_name.clone(),
        sport: sport.clone(),
        captain_name: captain_name.clone(),
        captain_email,
        captain_phone,
        players: Some(players),
        password: Some(DEFAULT_CAPTAIN_PASSWORD.to_string()),
        created_at: Some(timestamp),
    };
    state.captains.insert(captain);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Team registered successfully!",
        "data": {
            "teamName": team_name,
            "sport": sport,
            "captain": captain_name,
            "playerCount": player_count,
        }
    })))
}

// GET /api/teams - Not implemented in the original; kept as a stub
#[get("/api/teams")]
async fn list_teams() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Teams endpoint - GET not fully implemented yet",
        "note": "Use POST to register a new team",
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_team).service(list_teams);
}
