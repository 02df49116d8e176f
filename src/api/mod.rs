pub mod auth;
pub mod health;
pub mod metrics;
pub mod pages;
pub mod search;
pub mod swagger;
pub mod wanttogo;

use actix_web::web;

use crate::views::{DESTINATION_PAGES, STATIC_PAGES};

/// Registers every page and form route on the app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Login & registration
        .route("/", web::get().to(auth::login_page))
        .route("/", web::post().to(auth::login))
        .route("/registration", web::get().to(auth::registration_page))
        .route("/registration", web::post().to(auth::register))
        .route("/logout", web::get().to(auth::logout))
        // Want-to-go list
        .route("/add-to-wanttogo", web::post().to(wanttogo::add_to_wanttogo))
        .route("/wanttogo", web::get().to(wanttogo::list_wanttogo))
        // Search
        .route("/searchresults", web::get().to(search::search_page))
        .route("/searchresults", web::post().to(search::search));

    for page in STATIC_PAGES {
        cfg.route(&format!("/{}", page), web::get().to(move || pages::static_page(page)));
    }
    for page in DESTINATION_PAGES {
        cfg.route(&format!("/{}", page), web::get().to(move || pages::destination_page(page)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, PasswordStorage};
    use crate::database::failing::{FailingCatalogStore, FailingUserStore};
    use crate::database::{MemoryCatalogStore, MemoryUserStore};
    use crate::middleware::SessionMiddleware;
    use crate::seeds::catalog_seed::seed_default_catalog;
    use crate::services::session_service::{issue_session_token, SESSION_COOKIE};
    use crate::state::AppState;
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn test_state() -> AppState {
        let config = AppConfig {
            password_storage: PasswordStorage::Bcrypt { cost: 4 },
            ..AppConfig::default()
        };
        let catalog = Arc::new(MemoryCatalogStore::new());
        seed_default_catalog(catalog.as_ref()).await;
        AppState::with_stores(Arc::new(MemoryUserStore::new()), catalog, &config)
    }

    fn failing_state() -> AppState {
        AppState::with_stores(
            Arc::new(FailingUserStore),
            Arc::new(FailingCatalogStore),
            &AppConfig::default(),
        )
    }

    macro_rules! test_app {
        ($state:expr) => {{
            let state = $state;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state.clone()))
                    .wrap(SessionMiddleware::new(state.session.clone()))
                    .configure(routes),
            )
            .await
        }};
    }

    fn location(res: &actix_web::dev::ServiceResponse) -> String {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn session_cookie(res: &actix_web::dev::ServiceResponse) -> Option<Cookie<'static>> {
        res.response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
    }

    #[actix_web::test]
    async fn register_login_add_and_list() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::post()
            .uri("/registration")
            .set_form(&[("username", "ana"), ("password", "s3cret")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert!(location(&res).starts_with("/?success=Registration%20successful"));

        let req = test::TestRequest::post()
            .uri("/")
            .set_form(&[("username", "ana"), ("password", "s3cret")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/home");
        let cookie = session_cookie(&res).expect("session cookie");

        for expected in ["Destination added successfully!", "Destination already in your Want-to-Go list!"] {
            let req = test::TestRequest::post()
                .uri("/add-to-wanttogo")
                .cookie(cookie.clone())
                .set_form(&[("location", "rome")])
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["view"], "rome");
            let message = if body["success"].is_null() { &body["error"] } else { &body["success"] };
            assert_eq!(message, expected);
        }

        let req = test::TestRequest::get().uri("/wanttogo").cookie(cookie).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "view": "wanttogo", "destinations": ["rome"] }));
    }

    #[actix_web::test]
    async fn anonymous_requests_are_sent_to_login() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::post()
            .uri("/add-to-wanttogo")
            .set_form(&[("location", "paris")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"], "login");
        assert_eq!(body["error"], "Please log in first.");

        let req = test::TestRequest::get().uri("/wanttogo").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
    }

    #[actix_web::test]
    async fn forged_session_cookie_is_anonymous() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::get()
            .uri("/wanttogo")
            .cookie(Cookie::new(SESSION_COOKIE, "forged"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
    }

    #[actix_web::test]
    async fn login_messages() {
        let app = test_app!(test_state().await);

        let cases = [
            (("", ""), "Please fill in both username and password."),
            (("ghost", "pw"), "Invalid username or password."),
        ];
        for ((username, password), expected) in cases {
            let req = test::TestRequest::post()
                .uri("/")
                .set_form(&[("username", username), ("password", password)])
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["view"], "login");
            assert_eq!(body["error"], expected);
        }
    }

    #[actix_web::test]
    async fn duplicate_registration_is_reported() {
        let app = test_app!(test_state().await);

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/registration")
                .set_form(&[("username", "ana"), ("password", "pw")])
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::post()
            .uri("/registration")
            .set_form(&[("username", "ana"), ("password", "other")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], "Username is already taken.");
    }

    #[actix_web::test]
    async fn search_results_and_messages() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::post()
            .uri("/searchresults")
            .set_form(&[("Search", "ROM")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["matchingDestinations"], json!([{ "name": "Rome" }]));
        assert!(body["notFoundMessage"].is_null());

        let req = test::TestRequest::post()
            .uri("/searchresults")
            .set_form(&[("Search", "atlantis")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["matchingDestinations"], json!([]));
        assert_eq!(body["notFoundMessage"], "Destination not found.");

        let req = test::TestRequest::post()
            .uri("/searchresults")
            .set_form(&[("Search", "")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["matchingDestinations"].is_null());
        assert_eq!(body["notFoundMessage"], "Please enter a destination to search.");
    }

    #[actix_web::test]
    async fn pages_render_their_view() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::get().uri("/bali").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "view": "bali", "success": null, "error": null }));

        let req = test::TestRequest::get().uri("/hiking").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "view": "hiking" }));

        let req = test::TestRequest::get().uri("/?success=hello").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], "hello");
    }

    #[actix_web::test]
    async fn logout_clears_the_cookie() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::get().uri("/logout").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        let cookie = session_cookie(&res).expect("removal cookie");
        assert_eq!(cookie.value(), "");
    }

    #[actix_web::test]
    async fn health_reports_memory_store() {
        let app = test_app!(test_state().await);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "wanttogo-service");
    }

    #[actix_web::test]
    async fn store_failures_render_the_generic_message() {
        let app = test_app!(failing_state());

        for (uri, view) in [("/", "login"), ("/registration", "registration")] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_form(&[("username", "ana"), ("password", "s3cret")])
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["view"], view);
            assert_eq!(body["error"], "An error occurred. Please try again.");
        }
    }

    #[actix_web::test]
    async fn store_failures_on_list_and_search_are_500() {
        let state = failing_state();
        let token = issue_session_token(&state.session, "ana").unwrap();
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/wanttogo")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(res).await, "Error loading list.");

        let req = test::TestRequest::post()
            .uri("/searchresults")
            .set_form(&[("Search", "rome")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(res).await, "Internal Server Error");
    }

    #[actix_web::test]
    async fn health_is_degraded_when_store_is_unreachable() {
        let app = test_app!(failing_state());

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "degraded");
    }

    #[actix_web::test]
    async fn session_cookie_is_secure_when_configured() {
        let mut state = test_state().await;
        state.session.cookie_secure = true;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/registration")
            .set_form(&[("username", "ana"), ("password", "s3cret")])
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form(&[("username", "ana"), ("password", "s3cret")])
            .to_request();
        let res = test::call_service(&app, req).await;
        let cookie = session_cookie(&res).expect("session cookie");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
