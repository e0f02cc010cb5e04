use chrono::{SecondsFormat, Utc};

/// # Error Payload
///
/// Body returned for routing misses (404) and handler faults (500).
///
/// ```json
/// { "error": "Not Found" }
/// ```
pub mod error;

/// # Health Status Response
///
/// Liveness payload with process uptime and a timestamp.
///
/// ```json
/// {
///   "status": "OK",
///   "uptime": 12.345,
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
pub mod health;

/// Runtime and memory snapshot returned by `GET /api/info`.
pub mod runtime;

/// # Welcome Response
///
/// Landing payload returned by `GET /`.
pub mod welcome;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use runtime::{MemoryUsage, RuntimeInfo};
pub use welcome::WelcomeResponse;

/// Current wall-clock time as an ISO 8601 / RFC 3339 string in UTC with
/// millisecond precision, e.g. `2024-03-10T15:30:45.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_timestamp_now_is_utc_rfc3339() {
        let timestamp = timestamp_now();

        assert!(timestamp.ends_with('Z'), "Timestamp should be in UTC: {timestamp}");
        assert!(
            DateTime::parse_from_rfc3339(&timestamp).is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_timestamp_now_is_non_decreasing() {
        let first = DateTime::parse_from_rfc3339(&timestamp_now()).unwrap();
        let second = DateTime::parse_from_rfc3339(&timestamp_now()).unwrap();

        assert!(second >= first);
    }
}
