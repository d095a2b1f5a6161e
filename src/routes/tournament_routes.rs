// sportshub-service/src/routes/tournament_routes.rs
use crate::models::{ServiceError, Tournament, TournamentPayload};
use crate::state::AppState;
use crate::utils::{today, trimmed_min};
use actix_web::{get, post, web, HttpResponse};
use log::info;
use serde_json::json;

pub fn sport_icon(sport: &str) -> &'static str {
    match sport {
        "Cricket" => "🏏",
        "Football" => "⚽",
        "Basketball" => "🏀",
        "Volleyball" => "🏐",
        "Chess" => "♟️",
        "Badminton" => "🏸",
        "Table Tennis" => "🏓",
        _ => "🏆",
    }
}

fn validate_tournament(payload: &TournamentPayload) -> Result<(), ServiceError> {
    if trimmed_min(&payload.name, 3).is_none() {
        return Err(ServiceError::BadRequest(
            "Tournament name must be at least 3 characters long".to_string(),
        ));
    }

    if trimmed_min(&payload.sport, 1).is_none() {
        return Err(ServiceError::BadRequest("Sport is required".to_string()));
    }

    if payload.date.as_deref().map_or(true, |d| d.is_empty()) {
        return Err(ServiceError::BadRequest("Date is required".to_string()));
    }

    if trimmed_min(&payload.venue, 3).is_none() {
        return Err(ServiceError::BadRequest(
            "Venue must be at least 3 characters long".to_string(),
        ));
    }

    Ok(())
}

fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index).map(String::as_str).filter(|s| !s.is_empty())
}

// Positional mapping of a data row; missing columns fall back to
// placeholder values.
fn tournament_from_row(index: usize, row: &[String]) -> Tournament {
    let sport = cell(row, 1).unwrap_or("Unknown").to_string();
    Tournament {
        id: index + 1,
        name: cell(row, 0).unwrap_or("Unnamed Tournament").to_string(),
        icon: sport_icon(&sport).to_string(),
        sport,
        date: cell(row, 2).map(str::to_string).unwrap_or_else(today),
        venue: cell(row, 3).unwrap_or("TBA").to_string(),
        format: cell(row, 4).unwrap_or("Standard").to_string(),
        prize: cell(row, 5).unwrap_or("$0").to_string(),
        participants: cell(row, 6).and_then(|p| p.parse().ok()).unwrap_or(0),
        status: cell(row, 7).unwrap_or("upcoming").to_string(),
    }
}

fn mock_tournaments() -> Vec<Tournament> {
    vec![
        Tournament {
            id: 1,
            name: "Summer Cricket Championship".to_string(),
            sport: "Cricket".to_string(),
            date: "2024-07-15".to_string(),
            venue: "Main Stadium".to_string(),
            format: "T20".to_string(),
            participants: 32,
            prize: "$5,000".to_string(),
            status: "upcoming".to_string(),
            icon: "🏏".to_string(),
        },
        Tournament {
            id: 2,
            name: "Football League 2024".to_string(),
            sport: "Football".to_string(),
            date: "2024-07-20".to_string(),
            venue: "City Arena".to_string(),
            format: "90 minutes".to_string(),
            participants: 48,
            prize: "$10,000".to_string(),
            status: "upcoming".to_string(),
            icon: "⚽".to_string(),
        },
        Tournament {
            id: 3,
            name: "Basketball Showdown".to_string(),
            sport: "Basketball".to_string(),
            date: "2024-06-25".to_string(),
            venue: "Sports Complex".to_string(),
            format: "4 quarters".to_string(),
            participants: 24,
            prize: "$3,500".to_string(),
            status: "ongoing".to_string(),
            icon: "🏀".to_string(),
        },
        Tournament {
            id: 4,
            name: "Chess Masters Tournament".to_string(),
            sport: "Chess".to_string(),
            date: "2024-08-01".to_string(),
            venue: "Convention Center".to_string(),
            format: "Classical".to_string(),
            participants: 64,
            prize: "$2,000".to_string(),
            status: "upcoming".to_string(),
            icon: "♟️".to_string(),
        },
    ]
}

// GET /api/tournaments - Sheet-backed list, mock data as fallback
#[get("/api/tournaments")]
async fn list_tournaments(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let mut tournaments: Vec<Tournament> = match state.sheets.get_rows("Tournaments").await {
        // Row 0 is the header
        Ok(rows) if rows.len() > 1 => rows
            .iter()
            .skip(1)
            .enumerate()
            .map(|(index, row)| tournament_from_row(index, row))
            .collect(),
        Ok(_) => Vec::new(),
        Err(_) => {
            info!("Using mock tournament data (Google Sheets not configured)");
            Vec::new()
        }
    };

    if tournaments.is_empty() {
        tournaments = mock_tournaments();
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": tournaments.len(),
        "tournaments": tournaments,
    })))
}

// POST /api/tournaments - Create a new tournament
#[post("/api/tournaments")]
async fn create_tournament(
    state: web::Data<AppState>,
    payload: web::Json<TournamentPayload>,
) -> Result<HttpResponse, ServiceError> {
    validate_tournament(&payload)?;

    let name = payload.name.as_deref().unwrap_or_default().trim().to_string();
    let sport = payload.sport.as_deref().unwrap_or_default().trim().to_string();
    let date = payload.date.clone().unwrap_or_default();
    let venue = payload.venue.as_deref().unwrap_or_default().trim().to_string();

    // Participants and status are fixed at creation regardless of input
    let row = vec![
        name.clone(),
        sport.clone(),
        date.clone(),
        venue.clone(),
        payload.format.clone().unwrap_or_else(|| "Standard".to_string()),
        payload.prize.clone().unwrap_or_else(|| "$0".to_string()),
        "0".to_string(),
        "upcoming".to_string(),
    ];

    state.sheets.append_row("Tournaments", row).await;

    info!("✅ New tournament created: {} - {}", name, sport);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Tournament created successfully!",
        "data": {
            "name": name,
            "sport": sport,
            "date": date,
            "venue": venue,
        }
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tournaments).service(create_tournament);
}
