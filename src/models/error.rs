use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NOT_FOUND: &str = "Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            error: NOT_FOUND.to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_payloads_serialize_to_single_field() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::not_found()).unwrap(),
            json!({ "error": "Not Found" })
        );
        assert_eq!(
            serde_json::to_value(ErrorResponse::internal()).unwrap(),
            json!({ "error": "Internal Server Error" })
        );
    }
}
