use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use devops_workshop_api::config::Config;
use devops_workshop_api::error::json_error_handlers;
use devops_workshop_api::openapi::ApiDoc;
use devops_workshop_api::state::AppState;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// DevOps Workshop API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Welcome, health and runtime-info endpoints (configured in routes)
/// - JSON 404 fallback for unmatched routes and a JSON 500 for any handler fault
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:3000` by default (`HOST`, `PORT`)
/// - With `NODE_ENV=test` no listener is opened
/// - Log verbosity follows `RUST_LOG`, defaulting to `info`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if config.is_test() {
        log::info!("NODE_ENV=test, not opening a listener");
        return Ok(());
    }

    let state = Data::new(AppState::new());

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(json_error_handlers())
            .wrap(Logger::default())
            .app_data(state.clone())
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
            .configure(devops_workshop_api::routes::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    log::info!("Server running on port {}", config.port);
    log::info!("Health check: http://localhost:{}/health", config.port);

    server.run().await
}
