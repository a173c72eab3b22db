
use crate::config;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::{any_service, MethodRouter};
use tower_http::services::ServeDir;

// Serves the web build; anything not matched by the API falls through here.
pub fn serve_dir() -> MethodRouter {
    async fn handle_404() -> (StatusCode, &'static str) {
        (StatusCode::NOT_FOUND, "Resource not found.")
    }

    any_service(
        ServeDir::new(&config().WEB_FOLDER).not_found_service(handle_404.into_service()),
    )
}
