pub mod destination_list_service;
pub mod destination_search_service;
pub mod session_service;
pub mod user_directory_service;

pub use destination_search_service::SearchOutcome;
