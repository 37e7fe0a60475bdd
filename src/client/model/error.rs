use thiserror::Error;

/// A failed API call.
///
/// `status` is the HTTP status, or `0` when no response arrived (connection failure,
/// timeout). `message` is the server's `ErrorDto.message` when one was sent.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else {
            format!("Failed to send request: {}", err)
        };

        Self {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            message,
        }
    }
}
