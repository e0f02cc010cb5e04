use crate::error::ApiError;
use crate::handlers::process;
use crate::models::RuntimeInfo;
use actix_web::{HttpResponse, route, web};

/// # Runtime Information Endpoint
///
/// Reports the runtime version, platform and a memory snapshot of the
/// serving process.
///
/// ## Responses
/// - **200 OK**: [`RuntimeInfo`] payload
/// - **500 Internal Server Error**: the memory counters could not be read
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Runtime information", body = RuntimeInfo),
        (status = 500, description = "Process statistics unavailable", body = crate::models::ErrorResponse)
    ),
    tag = "Info"
)]
#[route("/api/info", method = "GET", method = "HEAD")]
pub async fn info() -> Result<HttpResponse, ApiError> {
    let runtime = process::runtime_info()?;
    Ok(HttpResponse::Ok().json(runtime))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_info_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/info").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;

        assert!(body["nodeVersion"].is_string());
        assert!(body["runtimeVersion"].is_string());
        assert_eq!(body["platform"], std::env::consts::OS);
        assert!(body["memory"].is_object());
        assert!(body["memory"]["rss"].is_u64());
        assert!(body["memory"]["heapUsed"].is_u64());
    }
}
