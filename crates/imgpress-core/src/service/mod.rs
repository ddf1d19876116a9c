mod messages;
mod worker;

use serde::Deserialize;

use crate::error::TransportError;
use crate::upload::CompressRequest;

pub use messages::{ServiceCommand, ServiceReply};
pub use worker::spawn_service_worker;

/// The external compression service.
///
/// Implementations perform one blocking request/response round trip and hand
/// back the raw success body; validation of that body is the caller's job.
pub trait CompressionService: Send + 'static {
    fn compress(&self, request: &CompressRequest) -> Result<Vec<u8>, TransportError>;
}

impl<F> CompressionService for F
where
    F: Fn(&CompressRequest) -> Result<Vec<u8>, TransportError> + Send + 'static,
{
    fn compress(&self, request: &CompressRequest) -> Result<Vec<u8>, TransportError> {
        self(request)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl TransportError {
    /// Build the error for a non-2xx response, keeping the server's `error`
    /// string when the body carries one.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        Self::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_keeps_server_message() {
        let err = TransportError::from_response(400, br#"{"error":"No image file provided"}"#);
        assert_eq!(err.to_string(), "No image file provided");
    }

    #[test]
    fn test_from_response_falls_back_on_html_body() {
        let err = TransportError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn test_from_response_ignores_empty_message() {
        let err = TransportError::from_response(500, br#"{"error":""}"#);
        assert_eq!(
            err,
            TransportError::Server {
                status: 500,
                message: None
            }
        );
    }
}
