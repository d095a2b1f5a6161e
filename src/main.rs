// sportshub-service/src/main.rs
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use sportshub_service::routes;
use sportshub_service::sheets::SheetsClient;
use sportshub_service::state::AppState;
use std::env;

// Allow the configured frontend, local dev ports, and Render hosts;
// development mode allows everything.
fn cors_policy() -> Cors {
    let frontend_url = env::var("FRONTEND_URL").ok();
    let dev_mode = env::var("APP_ENV").map(|v| v == "development").unwrap_or(false);

    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            let origin = match origin.to_str() {
                Ok(origin) => origin,
                Err(_) => return false,
            };

            if dev_mode {
                return true;
            }
            if frontend_url.as_deref() == Some(origin) {
                return true;
            }
            if origin == "http://localhost:5173" || origin == "http://localhost:3000" {
                return true;
            }
            origin.contains(".onrender.com") || origin.contains(".render.com")
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);

    let state = web::Data::new(AppState::new(SheetsClient::from_env()));

    info!("🚀 Backend server running on port {}", port);
    info!("📡 API available at http://localhost:{}/api", port);
    info!("💚 Health check: http://localhost:{}/health", port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_policy())
            .wrap(Logger::default())
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
