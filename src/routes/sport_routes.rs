// sportshub-service/src/routes/sport_routes.rs
use crate::models::Sport;
use actix_web::{get, web, HttpResponse};
use lazy_static::lazy_static;
use serde_json::json;

lazy_static! {
    // The full catalog; no mutation path exists.
    static ref SPORTS: Vec<Sport> = vec![
        Sport {
            name: "Cricket",
            icon: "🏏",
            description: "A bat-and-ball game played between two teams of eleven players",
            formats: &["T20", "ODI", "Test Match"],
            players: json!(11),
            duration: "3-8 hours depending on format",
        },
        Sport {
            name: "Football",
            icon: "⚽",
            description: "A team sport played between two teams of 11 players using a spherical ball",
            formats: &["90 Minutes", "Extra Time", "Penalty Shootout"],
            players: json!(11),
            duration: "90 minutes + stoppage time",
        },
        Sport {
            name: "Basketball",
            icon: "🏀",
            description: "A team sport where two teams of five players try to score points",
            formats: &["4 Quarters", "Overtime", "3x3"],
            players: json!(5),
            duration: "40-48 minutes (game time)",
        },
        Sport {
            name: "Volleyball",
            icon: "🏐",
            description: "A team sport where two teams of six players are separated by a net",
            formats: &["Best of 5 Sets", "Beach Volleyball"],
            players: json!(6),
            duration: "60-90 minutes",
        },
        Sport {
            name: "Chess",
            icon: "♟️",
            description: "A strategic board game for two players",
            formats: &["Classical", "Rapid", "Blitz", "Bullet"],
            players: json!(2),
            duration: "Varies by time control",
        },
        Sport {
            name: "Badminton",
            icon: "🏸",
            description: "A racquet sport played using racquets to hit a shuttlecock across a net",
            formats: &["Singles", "Doubles", "Mixed Doubles"],
            players: json!("1-2 per side"),
            duration: "30-60 minutes",
        },
    ];
}

// Only the first letter is normalized: "cricket" and "Cricket" match,
// "CRICKET" does not.
fn normalize_key(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// GET /api/sports - Get all sports
#[get("/api/sports")]
async fn list_sports() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "count": SPORTS.len(),
        "sports": &*SPORTS,
    }))
}

// GET /api/sports/{sport_name} - Get specific sport details
#[get("/api/sports/{sport_name}")]
async fn get_sport(path: web::Path<String>) -> HttpResponse {
    let key = normalize_key(&path.into_inner());

    match SPORTS.iter().find(|sport| sport.name == key) {
        Some(sport) => HttpResponse::Ok().json(json!({
            "success": true,
            "sport": sport,
        })),
        None => HttpResponse::NotFound().json(json!({
            "error": "Sport not found",
            "availableSports": SPORTS.iter().map(|s| s.name).collect::<Vec<_>>(),
        })),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_sports).service(get_sport);
}
