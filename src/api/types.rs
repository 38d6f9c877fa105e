//! API response types.

use serde::{Deserialize, Serialize};

/// Error response body for 400-class errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_shape() {
        let body = ErrorResponse {
            error: "insufficient capacity".to_string(),
        };
        let json = serde_json::to_string(&body).expect("error body should serialize");
        assert_eq!(json, r#"{"error":"insufficient capacity"}"#);
    }
}
