// sportshub-service/src/routes/register_routes.rs
use crate::models::{RegisterPayload, ServiceError};
use crate::state::AppState;
use crate::utils::{is_valid_email, now_iso, num_field, text_field, trimmed_min, NumField};
use actix_web::{get, post, web, HttpResponse};
use log::info;
use serde_json::json;

// Field checks in submission order; the first violation wins.
fn validate_registration(payload: &RegisterPayload) -> Result<(), ServiceError> {
    if trimmed_min(&payload.name, 2).is_none() {
        return Err(ServiceError::BadRequest(
            "Name must be at least 2 characters long".to_string(),
        ));
    }

    if trimmed_min(&payload.sport, 1).is_none() {
        return Err(ServiceError::BadRequest("Sport is required".to_string()));
    }

    match num_field(&payload.age) {
        NumField::Value(age) if (10.0..=100.0).contains(&age) => {}
        _ => {
            return Err(ServiceError::BadRequest(
                "Age must be a number between 10 and 100".to_string(),
            ))
        }
    }

    if !payload.email.as_deref().map_or(false, is_valid_email) {
        return Err(ServiceError::BadRequest(
            "Valid email is required".to_string(),
        ));
    }

    if trimmed_min(&payload.phone, 10).is_none() {
        return Err(ServiceError::BadRequest(
            "Valid phone number is required".to_string(),
        ));
    }

    match num_field(&payload.rating) {
        NumField::Missing => {}
        NumField::Value(rating) if (1.0..=10.0).contains(&rating) => {}
        _ => {
            return Err(ServiceError::BadRequest(
                "Rating must be between 1 and 10".to_string(),
            ))
        }
    }

    Ok(())
}

// Overall rating when the form leaves it blank: a skill-level base plus a
// small credit per year of experience, clamped to the 1-10 scale.
pub fn calculate_rating(experience_years: f64, skill_level: &str) -> f64 {
    let base = match skill_level {
        "Intermediate" => 6.0,
        "Advanced" => 8.0,
        "Professional" => 9.0,
        _ => 4.0,
    };
    (base + (experience_years * 0.2).min(2.0)).min(10.0)
}

// POST /api/register - Register a new player
#[post("/api/register")]
async fn register_player(
    state: web::Data<AppState>,
    payload: web::Json<RegisterPayload>,
) -> Result<HttpResponse, ServiceError> {
    validate_registration(&payload)?;

    // Validation guarantees these are present and well-formed
    let name = payload.name.as_deref().unwrap_or_default().trim().to_string();
    let sport = payload.sport.as_deref().unwrap_or_default().trim().to_string();
    let email = payload.email.as_deref().unwrap_or_default().trim().to_string();
    let phone = payload.phone.as_deref().unwrap_or_default().trim().to_string();
    let age = match num_field(&payload.age) {
        NumField::Value(age) => age as i64,
        _ => 0,
    };

    let experience = text_field(&payload.experience).unwrap_or_else(|| "0".to_string());
    let skill_level = payload
        .skill_level
        .clone()
        .unwrap_or_else(|| "Beginner".to_string());

    let rating = match num_field(&payload.rating) {
        NumField::Value(rating) => rating,
        _ => calculate_rating(experience.trim().parse().unwrap_or(0.0), &skill_level),
    };

    let timestamp = now_iso();
    let row = vec![
        timestamp,
        name.clone(),
        email,
        phone,
        sport.clone(),
        age.to_string(),
        experience,
        skill_level,
        payload.position.clone().unwrap_or_default(),
        format!("{:.1}", rating),
        payload.bio.clone().unwrap_or_default(),
        payload.achievements.clone().unwrap_or_default(),
    ];

    // Best-effort: a skipped or failed append never fails the registration
    state.sheets.append_row("Registrations", row).await;

    info!("✅ New registration: {} - {}", name, sport);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Registration successful!",
        "data": {
            "name": name,
            "sport": sport,
            "age": age,
        }
    })))
}

// GET /api/register - Not implemented in the original; kept as a stub
#[get("/api/register")]
async fn list_registrations() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Registrations endpoint - GET not implemented yet",
        "note": "Use POST to register a new player",
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_player).service(list_registrations);
}
