// sportshub-service/src/routes/partner_routes.rs
use crate::models::{LoginPayload, Partner, PartnerPayload, ServiceError};
use crate::state::AppState;
use crate::utils::{is_valid_email, now_iso, trimmed_min};
use actix_web::{get, post, web, HttpResponse};
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

// Placeholder bearer token; see DESIGN.md for the redesign note.
pub const PARTNER_TOKEN: &str = "authenticated";

fn validate_partner_registration(payload: &PartnerPayload) -> Result<(), ServiceError> {
    if trimmed_min(&payload.partner_type, 1).is_none() {
        return Err(ServiceError::BadRequest(
            "Partner type is required".to_string(),
        ));
    }

    if trimmed_min(&payload.organization_name, 2).is_none() {
        return Err(ServiceError::BadRequest(
            "Organization name must be at least 2 characters".to_string(),
        ));
    }

    if trimmed_min(&payload.contact_person, 2).is_none() {
        return Err(ServiceError::BadRequest(
            "Contact person name is required".to_string(),
        ));
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

    if trimmed_min(&payload.address, 5).is_none() {
        return Err(ServiceError::BadRequest("Address is required".to_string()));
    }

    if trimmed_min(&payload.description, 10).is_none() {
        return Err(ServiceError::BadRequest(
            "Description must be at least 10 characters".to_string(),
        ));
    }

    if trimmed_min(&payload.services, 5).is_none() {
        return Err(ServiceError::BadRequest(
            "Services description is required".to_string(),
        ));
    }

    if payload.password.as_deref().map_or(true, |p| p.len() < 6) {
        return Err(ServiceError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    Ok(())
}

// Positional reconstruction from a Partners sheet row. The sheet never
// stores passwords, so records built this way cannot be logged into.
fn partner_from_row(row: &[String]) -> Partner {
    let col = |index: usize| row.get(index).cloned().unwrap_or_default();
    Partner {
        id: col(0),
        partner_type: col(1),
        organization_name: col(2),
        contact_person: col(3),
        email: col(4),
        phone: col(5),
        website: col(6),
        address: col(7),
        description: col(8),
        services: col(9),
        password: None,
        created_at: None,
    }
}

// POST /api/partners/register - Register a new partner
#[post("/api/partners/register")]
async fn register_partner(
    state: web::Data<AppState>,
    payload: web::Json<PartnerPayload>,
) -> Result<HttpResponse, ServiceError> {
    validate_partner_registration(&payload)?;

    let email = payload.email.as_deref().unwrap_or_default().trim().to_string();

    // Partner emails are unique within the store; captains have no such check
    if state.partners.find_by_email(&email).is_some() {
        return Err(ServiceError::BadRequest(
            "Email already registered".to_string(),
        ));
    }

    let partner_type = payload.partner_type.as_deref().unwrap_or_default().trim().to_string();
    let organization_name = payload
        .organization_name
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();
    let timestamp = now_iso();

    let row = vec![
        timestamp.clone(),
        partner_type.clone(),
        organization_name.clone(),
        payload.contact_person.as_deref().unwrap_or_default().trim().to_string(),
        email.clone(),
        payload.phone.as_deref().unwrap_or_default().trim().to_string(),
        payload
            .website
            .clone()
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| "N/A".to_string()),
        payload.address.as_deref().unwrap_or_default().trim().to_string(),
        payload.description.as_deref().unwrap_or_default().trim().to_string(),
        payload.services.as_deref().unwrap_or_default().trim().to_string(),
    ];

    state.sheets.append_row("Partners", row).await;

    let partner = Partner {
        id: Uuid::new_v4().to_string(),
        partner_type: partner_type.clone(),
        organization_name: organization_name.clone(),
        contact_person: payload.contact_person.as_deref().unwrap_or_default().trim().to_string(),
        email,
        phone: payload.phone.as_deref().unwrap_or_default().trim().to_string(),
        website: payload.website.clone().unwrap_or_default(),
        address: payload.address.as_deref().unwrap_or_default().trim().to_string(),
        description: payload.description.as_deref().unwrap_or_default().trim().to_string(),
        services: payload.services.as_deref().unwrap_or_default().trim().to_string(),
        password: payload.password.clone(),
        created_at: Some(timestamp),
    };
    let response_partner = partner.without_password();
    state.partners.insert(partner);

    info!(
        "✅ New partner registration: {} - {}",
        organization_name, partner_type
    );

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Partner registered successfully!",
        "partner": response_partner,
    })))
}

// POST /api/partners/login - Partner login
#[post("/api/partners/login")]
async fn login_partner(
    state: web::Data<AppState>,
    payload: web::Json<LoginPayload>,
) -> Result<HttpResponse, ServiceError> {
    let (email, password) = match (payload.email.as_deref(), payload.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(ServiceError::BadRequest(
                "Email and password are required".to_string(),
            ))
        }
    };

    // Plain equality on purpose: demo auth model, not production security
    let partner = state
        .partners
        .find_by_email(email)
        .filter(|p| p.password.as_deref() == Some(password));

    let partner = match partner {
        Some(partner) => partner,
        None => {
            return Err(ServiceError::Unauthorized(
                "Invalid credentials".to_string(),
            ))
        }
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Login successful",
        "partner": partner.without_password(),
        "token": PARTNER_TOKEN,
    })))
}

// GET /api/partners/{email} - Get partner by email, sheet fallback
#[get("/api/partners/{email}")]
async fn get_partner(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let email = path.into_inner();

    if let Some(partner) = state.partners.find_by_email(&email) {
        return Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "partner": partner.without_password(),
        })));
    }

    // A sheet read error collapses into not-found here, as documented
    match state.sheets.get_rows("Partners").await {
        Ok(rows) if rows.len() > 1 => {
            if let Some(row) = rows
                .iter()
                .find(|row| row.get(4).map(String::as_str) == Some(email.as_str()))
            {
                return Ok(HttpResponse::Ok().json(json!({
                    "success": true,
                    "partner": partner_from_row(row),
                })));
            }
        }
        Ok(_) => {}
        Err(e) => error!("Error fetching from sheets: {}", e),
    }

    Err(ServiceError::NotFound("Partner not found".to_string()))
}

// GET /api/partners - Get all partners (for admin)
#[get("/api/partners")]
async fn list_partners(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let partners: Vec<Partner> = state
        .partners
        .all()
        .iter()
        .map(Partner::without_password)
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": partners.len(),
        "partners": partners,
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_partner)
        .service(login_partner)
        .service(list_partners)
        .service(get_partner);
}
