use crate::models::WelcomeResponse;
use actix_web::{HttpResponse, Responder, route, web};

/// # Welcome Endpoint
///
/// Identifies the API, its version and a timestamp.
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "DevOps Workshop API - Les 4",
///   "version": "1.0.0",
///   "status": "healthy",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "Info"
)]
#[route("/", method = "GET", method = "HEAD")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse::new())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(welcome);
}
