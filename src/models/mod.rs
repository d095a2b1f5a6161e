// sportshub-service/src/models/mod.rs
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;
use std::fmt;

// Partner organization (sponsor, venue, equipment supplier, ...)
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub partner_type: String,
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub description: String,
    pub services: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Partner {
    // Copy safe to return to clients
    pub fn without_password(&self) -> Partner {
        Partner {
            password: None,
            ..self.clone()
        }
    }
}

// Team captain, created as a side effect of team registration.
// Records rebuilt from spreadsheet rows carry no players or created_at.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Captain {
    pub id: String,
    pub team_name: String,
    pub sport: String,
    pub captain_name: String,
    pub captain_email: String,
    pub captain_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<TeamPlayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Captain {
    pub fn without_password(&self) -> Captain {
        Captain {
            password: None,
            ..self.clone()
        }
    }
}

// Player entry inside a team registration. Only the presence of at least
// one entry is validated; fields are echoed back as submitted.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamPlayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Tournament {
    pub id: usize,
    pub name: String,
    pub sport: String,
    pub date: String,
    pub venue: String,
    pub format: String,
    pub prize: String,
    pub participants: i64,
    pub status: String,
    pub icon: String,
}

// Static catalog entry. `players` is a number for most sports but a
// free-form string for Badminton ("1-2 per side").
#[derive(Serialize, Debug, Clone)]
pub struct Sport {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub formats: &'static [&'static str],
    pub players: Value,
    pub duration: &'static str,
}

// Request payloads. Every field is optional so that missing fields reach
// the validators and produce the documented 400 messages instead of a
// deserialization error. Numeric-ish fields arrive as either JSON numbers
// or strings depending on the submitting form, hence `Value`.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub age: Option<Value>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<Value>,
    pub skill_level: Option<String>,
    pub position: Option<String>,
    pub rating: Option<Value>,
    pub bio: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
    pub team_name: Option<String>,
    pub sport: Option<String>,
    pub captain_name: Option<String>,
    pub captain_email: Option<String>,
    pub captain_phone: Option<String>,
    pub players: Option<Vec<TeamPlayer>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPayload {
    pub partner_type: Option<String>,
    pub organization_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub services: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TournamentPayload {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub format: Option<String>,
    pub prize: Option<String>,
}

// Custom error types
#[derive(Debug)]
pub enum ServiceError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::BadRequest(msg) => write!(f, "BadRequest: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            ServiceError::Unauthorized(msg) => {
                HttpResponse::Unauthorized().json(json!({ "error": msg }))
            }
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({ "error": msg })),
            ServiceError::Internal(msg) => {
                // Underlying detail is only exposed in development mode
                let dev_mode = env::var("APP_ENV").map(|v| v == "development").unwrap_or(false);
                if dev_mode {
                    HttpResponse::InternalServerError()
                        .json(json!({ "error": "Internal server error", "detail": msg }))
                } else {
                    HttpResponse::InternalServerError()
                        .json(json!({ "error": "Internal server error" }))
                }
            }
        }
    }
}
