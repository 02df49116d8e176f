use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::api::metrics;
use crate::services::{session_service, user_directory_service};
use crate::state::AppState;
use crate::utils::ServiceError;
use crate::views::{self, flash};

const GENERIC_ERROR: &str = "An error occurred. Please try again.";
const REGISTRATION_SUCCESS: &str = "Registration successful! Please log in.";

/// Login / registration form body (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    pub success: Option<String>,
}

/// GET / - login page
pub async fn login_page(query: web::Query<LoginPageQuery>) -> HttpResponse {
    views::render("login", flash(query.success.as_deref(), None))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Auth",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Login successful, session cookie set, redirect to /home"),
        (status = 200, description = "Login page re-rendered with an error message")
    )
)]
pub async fn login(state: web::Data<AppState>, form: web::Form<CredentialsForm>) -> HttpResponse {
    log::info!("🔐 POST / - username: {}", form.username);

    let result = user_directory_service::authenticate(
        state.users.as_ref(),
        state.password_storage,
        &form.username,
        &form.password,
    )
    .await;

    let user = match result {
        Ok(user) => user,
        Err(ServiceError::Validation(_)) => {
            return views::render("login", flash(None, Some("Please fill in both username and password.")));
        }
        Err(ServiceError::InvalidCredentials) => {
            metrics::increment_failed_login_count();
            log::warn!("❌ Login failed: {}", form.username);
            return views::render("login", flash(None, Some("Invalid username or password.")));
        }
        Err(e) => {
            log::error!("❌ Error during login: {}", e);
            return views::render("login", flash(None, Some(GENERIC_ERROR)));
        }
    };

    match session_service::issue_session_token(&state.session, &user.username) {
        Ok(token) => {
            log::info!("✅ Login successful: {}", user.username);
            let cookie = Cookie::build(session_service::SESSION_COOKIE, token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(state.session.cookie_secure)
                .max_age(CookieDuration::hours(state.session.ttl_hours))
                .finish();

            HttpResponse::Found()
                .append_header(("Location", "/home"))
                .cookie(cookie)
                .finish()
        }
        Err(e) => {
            log::error!("❌ Error issuing session: {}", e);
            views::render("login", flash(None, Some(GENERIC_ERROR)))
        }
    }
}

/// GET /registration - registration page
pub async fn registration_page() -> HttpResponse {
    views::render("registration", flash(None, None))
}

#[utoipa::path(
    post,
    path = "/registration",
    tag = "Auth",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Registered, redirect to the login page"),
        (status = 200, description = "Registration page re-rendered with an error message")
    )
)]
pub async fn register(state: web::Data<AppState>, form: web::Form<CredentialsForm>) -> HttpResponse {
    log::info!("📝 POST /registration - username: {}", form.username);

    let result = user_directory_service::register(
        state.users.as_ref(),
        state.password_storage,
        &form.username,
        &form.password,
    )
    .await;

    match result {
        Ok(_) => views::redirect(&format!("/?success={}", urlencoding::encode(REGISTRATION_SUCCESS))),
        Err(ServiceError::Validation(_)) => {
            views::render("registration", flash(None, Some("Both username and password are required.")))
        }
        Err(ServiceError::AlreadyExists) => {
            log::warn!("⚠️ Username already taken: {}", form.username);
            views::render("registration", flash(None, Some("Username is already taken.")))
        }
        Err(e) => {
            log::error!("❌ Error during registration: {}", e);
            views::render("registration", flash(None, Some(GENERIC_ERROR)))
        }
    }
}

/// GET /logout - drops the session cookie
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    let mut cookie = Cookie::build(session_service::SESSION_COOKIE, "")
        .path("/")
        .secure(state.session.cookie_secure)
        .finish();
    cookie.make_removal();

    HttpResponse::Found()
        .append_header(("Location", "/"))
        .cookie(cookie)
        .finish()
}
