use crate::models::ErrorResponse;
use actix_web::{HttpResponse, web};

/// # Welcome Endpoint
///
/// `GET /` returns the API name, version, status and a timestamp.
pub mod welcome;

/// # Health Check Endpoint
///
/// Returns `"OK"`, the process uptime in seconds and a timestamp.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "OK",
///   "uptime": 42.137,
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
pub mod health;

/// # Runtime Information Endpoint
///
/// `GET /api/info` reports runtime version, platform and memory usage.
pub mod info;


/// # Route Configuration
///
/// Mounts every endpoint at its literal path and installs the JSON 404
/// fallback for anything that does not match on both method and path.
///
/// Handlers expect [`AppState`] to be registered as app data.
///
/// ```text
/// GET /          - Welcome message
/// GET /health    - Health and uptime
/// GET /api/info  - Runtime information
/// *              - 404 {"error": "Not Found"}
/// ```
///
/// [`AppState`]: crate::state::AppState
pub fn configure(cfg: &mut web::ServiceConfig) {
    welcome::configure_routes(cfg);
    health::configure_routes(cfg);
    info::configure_routes(cfg);

    cfg.default_service(web::to(not_found));
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found())
}
