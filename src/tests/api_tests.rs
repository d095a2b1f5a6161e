#[cfg(test)]
mod tests {
    use crate::routes;
    use crate::routes::register_routes::calculate_rating;
    use crate::sheets::SheetsClient;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    // Fresh state per test: empty stores, sheets adapter in mock mode.
    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(SheetsClient::unconfigured()))
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .configure(routes::configure)
                    .default_service(web::route().to(routes::not_found)),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn health_check_responds() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "SportsHub API is running");
    }

    #[actix_rt::test]
    async fn unmatched_route_returns_404_envelope() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::get().uri("/api/nothing-here").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["path"], "/api/nothing-here");
    }

    #[actix_rt::test]
    async fn registration_rejects_missing_fields() {
        let state = test_state();
        let app = test_app!(state);

        // Each payload violates the first unmet rule in validation order
        let cases = vec![
            (json!({}), "Name must be at least 2 characters long"),
            (json!({ "name": "Alice" }), "Sport is required"),
            (
                json!({ "name": "Alice", "sport": "Cricket", "age": "abc" }),
                "Age must be a number between 10 and 100",
            ),
            (
                json!({ "name": "Alice", "sport": "Cricket", "age": 9 }),
                "Age must be a number between 10 and 100",
            ),
            (
                json!({ "name": "Alice", "sport": "Cricket", "age": 25, "email": "not-an-email" }),
                "Valid email is required",
            ),
            (
                json!({
                    "name": "Alice", "sport": "Cricket", "age": 25,
                    "email": "a@x.com", "phone": "12345"
                }),
                "Valid phone number is required",
            ),
            (
                json!({
                    "name": "Alice", "sport": "Cricket", "age": 25,
                    "email": "a@x.com", "phone": "0123456789", "rating": 11
                }),
                "Rating must be between 1 and 10",
            ),
        ];

        for (payload, expected) in cases {
            let request = test::TestRequest::post()
                .uri("/api/register")
                .set_json(&payload)
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 400, "payload: {}", payload);

            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["error"], expected);
        }
    }

    #[actix_rt::test]
    async fn registration_echoes_trimmed_fields() {
        let state = test_state();
        let app = test_app!(state);

        // Rating omitted: the service computes one from experience/skill
        let request = test::TestRequest::post()
            .uri("/api/register")
            .set_json(&json!({
                "name": "  Alice  ",
                "sport": "Cricket",
                "age": 25,
                "email": "alice@x.com",
                "phone": "0123456789",
                "experience": "3",
                "skillLevel": "Intermediate"
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Alice");
        assert_eq!(body["data"]["sport"], "Cricket");
        assert_eq!(body["data"]["age"], 25);
    }

    #[actix_rt::test]
    async fn registration_accepts_numeric_strings() {
        let state = test_state();
        let app = test_app!(state);

        // HTML forms submit numbers as strings
        let request = test::TestRequest::post()
            .uri("/api/register")
            .set_json(&json!({
                "name": "Bob",
                "sport": "Chess",
                "age": "42",
                "email": "bob@x.com",
                "phone": "0123456789",
                "rating": "7.5"
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);
    }

    #[actix_rt::test]
    async fn computed_rating_follows_skill_and_experience() {
        assert!((calculate_rating(0.0, "Beginner") - 4.0).abs() < 1e-9);
        assert!((calculate_rating(3.0, "Intermediate") - 6.6).abs() < 1e-9);
        // Experience credit caps at +2.0 and the scale caps at 10
        assert!((calculate_rating(30.0, "Advanced") - 10.0).abs() < 1e-9);
        assert!((calculate_rating(0.0, "Professional") - 9.0).abs() < 1e-9);
        // Unknown skill levels fall back to the beginner base
        assert!((calculate_rating(5.0, "Wizard") - 5.0).abs() < 1e-9);
    }

    #[actix_rt::test]
    async fn register_get_is_a_stub() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::get().uri("/api/register").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert!(body["message"].as_str().unwrap().contains("not implemented"));
    }

    #[actix_rt::test]
    async fn team_registration_creates_a_captain_login() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/teams")
            .set_json(&json!({
                "teamName": "Strikers",
                "sport": "Cricket",
                "captainName": "Cap",
                "captainEmail": "cap@x.com",
                "captainPhone": "0123456789",
                "players": [
                    { "name": "P1", "email": "p1@x.com", "phone": "0123456789", "age": 20 }
                ]
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["data"]["teamName"], "Strikers");
        assert_eq!(body["data"]["captain"], "Cap");
        assert_eq!(body["data"]["playerCount"], 1);

        // The captain can now log in with the fixed default password
        let request = test::TestRequest::post()
            .uri("/api/captains/login")
            .set_json(&json!({ "email": "cap@x.com", "password": "default123" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 200);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["token"], "captain-authenticated");
        assert_eq!(body["captain"]["teamName"], "Strikers");
        assert!(
            body["captain"].get("password").is_none(),
            "password must be stripped from the response"
        );
    }

    #[actix_rt::test]
    async fn captain_login_rejects_wrong_password() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/teams")
            .set_json(&json!({
                "teamName": "Rooks",
                "sport": "Chess",
                "captainName": "Cleo",
                "captainEmail": "cleo@x.com",
                "captainPhone": "0123456789",
                "players": [{ "name": "P1" }]
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let request = test::TestRequest::post()
            .uri("/api/captains/login")
            .set_json(&json!({ "email": "cleo@x.com", "password": "wrong" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 401);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Invalid credentials or team not registered");
    }

    #[actix_rt::test]
    async fn unknown_captain_is_404() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::get()
            .uri("/api/captains/ghost@x.com")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Captain not found");
    }

    #[actix_rt::test]
    async fn team_registration_requires_players() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/teams")
            .set_json(&json!({
                "teamName": "Strikers",
                "sport": "Cricket",
                "captainName": "Cap",
                "captainEmail": "cap@x.com",
                "captainPhone": "0123456789",
                "players": []
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "At least one player is required");
        assert_eq!(state.captains.len(), 0);
    }

    fn partner_payload(email: &str) -> Value {
        json!({
            "partnerType": "Sponsor",
            "organizationName": "Acme Sports",
            "contactPerson": "Jo Doe",
            "email": email,
            "phone": "0123456789",
            "address": "1 Main Street",
            "description": "Supplies kit to local clubs",
            "services": "Kit and sponsorship",
            "password": "secret1"
        })
    }

    #[actix_rt::test]
    async fn duplicate_partner_email_is_rejected() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/partners/register")
            .set_json(&partner_payload("acme@x.com"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["partner"].get("password").is_none());

        let request = test::TestRequest::post()
            .uri("/api/partners/register")
            .set_json(&partner_payload("acme@x.com"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Email already registered");

        // The failed attempt must not grow the store
        let request = test::TestRequest::get().uri("/api/partners").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["count"], 1);
    }

    #[actix_rt::test]
    async fn partner_validation_rejects_without_storing() {
        let state = test_state();
        let app = test_app!(state);

        let mut payload = partner_payload("short@x.com");
        payload["password"] = json!("short");

        let request = test::TestRequest::post()
            .uri("/api/partners/register")
            .set_json(&payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Password must be at least 6 characters");
        assert_eq!(state.partners.len(), 0);
    }

    #[actix_rt::test]
    async fn partner_login_and_lookup() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/partners/register")
            .set_json(&partner_payload("acme@x.com"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let request = test::TestRequest::post()
            .uri("/api/partners/login")
            .set_json(&json!({ "email": "acme@x.com", "password": "secret1" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 200);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["token"], "authenticated");
        assert_eq!(body["partner"]["organizationName"], "Acme Sports");
        assert!(body["partner"].get("password").is_none());

        let request = test::TestRequest::post()
            .uri("/api/partners/login")
            .set_json(&json!({ "email": "acme@x.com", "password": "nope" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 401);

        let request = test::TestRequest::get()
            .uri("/api/partners/acme@x.com")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 200);

        let request = test::TestRequest::get()
            .uri("/api/partners/ghost@x.com")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);
    }

    #[actix_rt::test]
    async fn sport_lookup_normalizes_first_letter_only() {
        let state = test_state();
        let app = test_app!(state);

        for path in ["/api/sports/cricket", "/api/sports/Cricket"] {
            let request = test::TestRequest::get().uri(path).to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 200, "path: {}", path);

            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["sport"]["name"], "Cricket");
        }

        let request = test::TestRequest::get().uri("/api/sports/curling").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Sport not found");
        assert_eq!(body["availableSports"].as_array().unwrap().len(), 6);
    }

    #[actix_rt::test]
    async fn sports_catalog_lists_six_entries() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::get().uri("/api/sports").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 6);
        assert_eq!(body["sports"][0]["name"], "Cricket");
        assert_eq!(body["sports"][5]["players"], "1-2 per side");
    }

    #[actix_rt::test]
    async fn admin_login_checks_fixed_credentials() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(&json!({ "email": "admin@sportshub.com", "password": "admin123" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 200);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["user"]["role"], "admin");
        assert_eq!(body["token"], "admin-authenticated");

        let request = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(&json!({ "email": "admin@sportshub.com", "password": "wrong" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 401);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Invalid admin credentials");
    }

    #[actix_rt::test]
    async fn tournaments_fall_back_to_mock_data() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::get().uri("/api/tournaments").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 4);
        assert_eq!(body["tournaments"][0]["name"], "Summer Cricket Championship");
        assert_eq!(body["tournaments"][0]["icon"], "🏏");
    }

    #[actix_rt::test]
    async fn tournament_creation_validates_and_echoes() {
        let state = test_state();
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/api/tournaments")
            .set_json(&json!({ "name": "ab", "sport": "Chess", "date": "2024-09-01", "venue": "Hall" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Tournament name must be at least 3 characters long");

        let request = test::TestRequest::post()
            .uri("/api/tournaments")
            .set_json(&json!({
                "name": "Autumn Open",
                "sport": "Chess",
                "date": "2024-09-01",
                "venue": "Town Hall"
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["data"]["name"], "Autumn Open");
        assert_eq!(body["data"]["venue"], "Town Hall");
    }

    #[actix_rt::test]
    async fn login_requires_both_fields() {
        let state = test_state();
        let app = test_app!(state);

        for uri in [
            "/api/partners/login",
            "/api/admin/login",
            "/api/captains/login",
        ] {
            let request = test::TestRequest::post()
                .uri(uri)
                .set_json(&json!({ "email": "someone@x.com" }))
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 400, "uri: {}", uri);

            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["error"], "Email and password are required");
        }
    }
}
