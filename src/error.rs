use crate::models::ErrorResponse;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// # Handler Fault
///
/// Any failure raised while a handler builds its response. Every variant is
/// reported to the client as the same generic 500 payload; the detail only
/// reaches the operator log.
///
/// ## Response
/// - **500 Internal Server Error**
///   - Body: `{"error": "Internal Server Error"}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to read process memory statistics: {0}")]
    MemoryStats(#[from] std::io::Error),

    #[error("malformed memory statistics entry {0:?}")]
    MalformedMemoryStats(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        HttpResponse::build(self.status_code()).json(ErrorResponse::internal())
    }
}

/// # Internal Error Fallback
///
/// Middleware that rewrites every 500 produced inside the app, whatever its
/// origin (extractors, framework errors, [`ApiError`]), into the generic
/// `{"error": "Internal Server Error"}` JSON body. The original error is
/// logged; [`ApiError`] already logs itself and is not logged twice.
pub fn json_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error)
}

fn render_internal_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    match res.response().error() {
        Some(err) if err.as_error::<ApiError>().is_some() => {}
        Some(err) => log::error!("{} {}: {err}", res.request().method(), res.request().path()),
        None => log::error!(
            "{} {}: handler returned 500",
            res.request().method(),
            res.request().path()
        ),
    }

    let (req, _) = res.into_parts();
    let res = HttpResponse::InternalServerError().json(ErrorResponse::internal());

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
