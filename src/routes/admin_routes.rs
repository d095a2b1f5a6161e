// sportshub-service/src/routes/admin_routes.rs
use crate::models::{LoginPayload, ServiceError};
use actix_web::{post, web, HttpResponse};
use log::info;
use serde_json::json;

// The single admin principal; nothing is persisted for it.
const ADMIN_EMAIL: &str = "admin@sportshub.com";
const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_TOKEN: &str = "admin-authenticated";

// POST /api/admin/login - Admin login
#[post("/api/admin/login")]
async fn login_admin(payload: web::Json<LoginPayload>) -> Result<HttpResponse, ServiceError> {
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

    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
        return Err(ServiceError::Unauthorized(
            "Invalid admin credentials".to_string(),
        ));
    }

    info!("🔑 Admin login successful");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Admin login successful",
        "user": {
            "id": "admin-001",
            "email": ADMIN_EMAIL,
            "role": "admin",
            "name": "System Administrator",
        },
        "token": ADMIN_TOKEN,
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login_admin);
}
