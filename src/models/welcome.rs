use crate::models::timestamp_now;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "DevOps Workshop API - Les 4";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// # Welcome Response
///
/// Landing payload identifying the API and its version.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "DevOps Workshop API - Les 4",
///   "version": "1.0.0",
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: String,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            version: API_VERSION.to_string(),
            status: "healthy".to_string(),
            timestamp: timestamp_now(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}
