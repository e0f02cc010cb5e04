use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, route, web};

/// # Health Check Endpoint
///
/// Returns `"OK"` together with the process uptime in seconds and a
/// timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("OK"), `uptime` and `timestamp` in ISO 8601 format
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
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[route("/health", method = "GET", method = "HEAD")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok(state.uptime()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
