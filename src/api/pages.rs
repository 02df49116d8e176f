use actix_web::HttpResponse;
use serde_json::json;

use crate::views::{self, flash};

/// Pages with nothing to show but themselves (home, cities, ...).
pub async fn static_page(view: &'static str) -> HttpResponse {
    views::render(view, json!({}))
}

/// Destination pages start with no flash message.
pub async fn destination_page(view: &'static str) -> HttpResponse {
    views::render(view, flash(None, None))
}
