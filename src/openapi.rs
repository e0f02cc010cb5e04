use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Describes the public routes with utoipa procedural macros. The binary
/// serves it at `/api-docs/openapi.json` alongside Swagger UI.
///
/// # Endpoints
/// - Welcome: `GET /`
/// - Health Check: `GET /health`
/// - Runtime Information: `GET /api/info`
///
/// # Note
/// The document is generated at compile time from the `#[utoipa::path]`
/// annotations on each handler.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::welcome::welcome,
        crate::routes::health::health,
        crate::routes::info::info,
    ),
    components(
        schemas(
            crate::models::WelcomeResponse,
            crate::models::HealthResponse,
            crate::models::RuntimeInfo,
            crate::models::MemoryUsage,
            crate::models::ErrorResponse
        )
    ),
    tags(
        (name = "Info", description = "Service and runtime information"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Informational endpoints for the DevOps workshop",
        title = "DevOps Workshop API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
