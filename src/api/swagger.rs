use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Want-to-Go Travel Service",
        version = "1.0.0",
        description = "Destination pages, catalog search and a personal want-to-go list.\n\n**Session:** logging in sets the `wanttogo_session` cookie; list endpoints read the user from it.\n\nPage routes answer with a JSON view payload: `{ \"view\": <name>, ...data }`."
    ),
    paths(
        // Auth
        crate::api::auth::login,
        crate::api::auth::register,

        // Want-to-go list
        crate::api::wanttogo::add_to_wanttogo,
        crate::api::wanttogo::list_wanttogo,

        // Search
        crate::api::search::search,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::auth::CredentialsForm,
            crate::api::wanttogo::AddDestinationForm,
            crate::api::search::SearchForm,
            crate::models::CatalogEntry,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and session cookie handling."),
        (name = "Want-to-go", description = "Per-user list of saved destinations."),
        (name = "Search", description = "Case-insensitive substring search over the destination catalog."),
        (name = "Health", description = "Health check and counters."),
    )
)]
pub struct ApiDoc;
