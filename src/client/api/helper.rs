use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Parses a JSON success body, or turns an error response into `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.map_err(|e| ApiError {
            status: status.as_u16(),
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(parse_error(response).await)
    }
}

/// Builds an `ApiError` from a non-success response, preferring the server's `ErrorDto`.
pub async fn parse_error(response: Response) -> ApiError {
    let status = response.status().as_u16();

    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorDto>(&text) {
        Ok(error_dto) => error_dto.message,
        Err(_) if !text.is_empty() => text,
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }
}
