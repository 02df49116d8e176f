use actix_web::HttpResponse;
use serde_json::{json, Value};

/// Destination pages that carry an "add to want-to-go" form.
pub const DESTINATION_PAGES: [&str; 6] = ["annapurna", "bali", "inca", "paris", "rome", "santorini"];

/// Pages with no data bag.
pub const STATIC_PAGES: [&str; 4] = ["home", "cities", "hiking", "islands"];

/// Renders `view` with its data bag as the JSON view payload.
pub fn render(view: &str, bag: Value) -> HttpResponse {
    let mut payload = json!({ "view": view });
    if let (Some(target), Value::Object(fields)) = (payload.as_object_mut(), bag) {
        for (key, value) in fields {
            target.entry(key).or_insert(value);
        }
    }
    HttpResponse::Ok().json(payload)
}

/// Bag for pages with a success/error flash message.
pub fn flash(success: Option<&str>, error: Option<&str>) -> Value {
    json!({ "success": success, "error": error })
}

/// Page to re-render after an add-to-list attempt for `location`.
pub fn destination_view(location: &str) -> &'static str {
    let lower = location.to_ascii_lowercase();
    DESTINATION_PAGES
        .iter()
        .find(|page| **page == lower)
        .copied()
        .unwrap_or("home")
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", location))
        .finish()
}
