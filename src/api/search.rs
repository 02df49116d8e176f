use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::services::{destination_search_service, SearchOutcome};
use crate::state::AppState;
use crate::utils::ServiceError;
use crate::views;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SearchForm {
    #[serde(rename = "Search", default)]
    pub search: String,
}

fn results_bag(matching: Value, not_found: Option<&str>) -> Value {
    json!({ "matchingDestinations": matching, "notFoundMessage": not_found })
}

/// GET /searchresults - empty search page
pub async fn search_page() -> HttpResponse {
    views::render("searchresults", results_bag(Value::Null, None))
}

#[utoipa::path(
    post,
    path = "/searchresults",
    tag = "Search",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Search results view"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn search(state: web::Data<AppState>, form: web::Form<SearchForm>) -> HttpResponse {
    log::info!("🔎 POST /searchresults - query: {}", form.search);

    match destination_search_service::search(state.catalog.as_ref(), &form.search).await {
        Ok(SearchOutcome::Matches(matches)) => {
            views::render("searchresults", results_bag(json!(matches), None))
        }
        Ok(SearchOutcome::NotFound) => {
            views::render("searchresults", results_bag(json!([]), Some("Destination not found.")))
        }
        Err(ServiceError::Validation(_)) => views::render(
            "searchresults",
            results_bag(Value::Null, Some("Please enter a destination to search.")),
        ),
        Err(e) => {
            log::error!("❌ Search failed: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}
