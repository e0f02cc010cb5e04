use crate::models::timestamp_now;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service, how long the process has
/// been running, and when the check was made.
///
/// ## Fields
/// - `status`: always `"OK"` while the service can answer requests
/// - `uptime`: seconds since process start, fractional
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
///
/// ## Example JSON
/// ```json
/// {
///   "status": "OK",
///   "uptime": 42.137,
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok(uptime: Duration) -> Self {
        Self {
            status: "OK".to_string(),
            uptime: uptime.as_secs_f64(),
            timestamp: timestamp_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_ok() {
        let response = HealthResponse::ok(Duration::from_millis(1500));

        // Verify status
        assert_eq!(response.status, "OK");
        assert_eq!(response.uptime, 1.5);

        // Verify timestamp is valid ISO 8601 format
        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse::ok(Duration::ZERO);
        let json = serde_json::to_value(&response).expect("Should serialize to JSON");

        assert_eq!(json["status"], "OK");
        assert!(json["uptime"].is_number(), "Uptime should be a JSON number");
        assert_eq!(json["uptime"].as_f64(), Some(0.0));
        assert!(json["timestamp"].is_string());
    }
}
