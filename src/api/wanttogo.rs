use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::api::metrics;
use crate::middleware::SessionUser;
use crate::services::destination_list_service;
use crate::state::AppState;
use crate::utils::ServiceError;
use crate::views::{self, flash};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddDestinationForm {
    #[serde(default)]
    pub location: String,
}

#[utoipa::path(
    post,
    path = "/add-to-wanttogo",
    tag = "Want-to-go",
    request_body(content = AddDestinationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Destination page (or login page) re-rendered with a message")
    )
)]
pub async fn add_to_wanttogo(
    state: web::Data<AppState>,
    session: Option<web::ReqData<SessionUser>>,
    form: web::Form<AddDestinationForm>,
) -> HttpResponse {
    let username = session.map(|s| s.into_inner().username);
    let location = form.into_inner().location;
    let view = views::destination_view(&location);

    log::info!("📝 POST /add-to-wanttogo - {} for {:?}", location, username);

    match destination_list_service::add_destination(state.users.as_ref(), username.as_deref(), &location).await {
        Ok(()) => {
            metrics::increment_destinations_added();
            views::render(view, flash(Some("Destination added successfully!"), None))
        }
        Err(ServiceError::NotLoggedIn) => {
            views::render("login", flash(None, Some("Please log in first.")))
        }
        Err(ServiceError::AlreadyPresent) => {
            views::render(view, flash(None, Some("Destination already in your Want-to-Go list!")))
        }
        Err(ServiceError::Validation(_)) => {
            views::render(view, flash(None, Some("Please choose a destination.")))
        }
        Err(e) => {
            log::error!("❌ Error adding to Want-to-Go List: {}", e);
            views::render(view, flash(None, Some("An error occurred. Please try again.")))
        }
    }
}

#[utoipa::path(
    get,
    path = "/wanttogo",
    tag = "Want-to-go",
    responses(
        (status = 200, description = "Want-to-go list view"),
        (status = 302, description = "Not logged in, redirect to /"),
        (status = 500, description = "Error loading list")
    )
)]
pub async fn list_wanttogo(
    state: web::Data<AppState>,
    session: Option<web::ReqData<SessionUser>>,
) -> HttpResponse {
    let username = session.map(|s| s.into_inner().username);

    match destination_list_service::list_destinations(state.users.as_ref(), username.as_deref()).await {
        Ok(destinations) => {
            log::info!("📋 GET /wanttogo - {} destination(s)", destinations.len());
            views::render("wanttogo", json!({ "destinations": destinations }))
        }
        Err(ServiceError::NotLoggedIn) => views::redirect("/"),
        Err(e) => {
            log::error!("❌ Error fetching destinations: {}", e);
            HttpResponse::InternalServerError().body("Error loading list.")
        }
    }
}
