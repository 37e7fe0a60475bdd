//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by services and handlers. Every failure is
//! converted into one of four categories at the request boundary: not found (404), conflict
//! (400), validation (400) or server error (500). The body is always an `ErrorDto`.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, validation::ValidationErrors},
    server::error::config::ConfigError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM that was not recognised as a constraint
    /// violation by the service layer.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body could not be parsed into the expected payload.
    ///
    /// Results in 400 Bad Request; the extractor's explanation is passed through as the
    /// raw error string.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Entity id or staff code does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// A unique field value is already taken, or a delete would break a reference.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Payload failed the field rules, or references a department/degree that does not
    /// exist.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a generic one.
    #[error("{0}")]
    InternalError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(format!("Invalid input: {}", errors))
    }
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Validation(_) | Self::JsonRejection(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Conflict`, `Validation` and `JsonRejection`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For everything else (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            Self::NotFound(message) => (
                status,
                Json(ErrorDto {
                    message,
                    error: None,
                }),
            )
                .into_response(),
            Self::Conflict(message) | Self::Validation(message) => {
                tracing::debug!("Rejected request: {}", message);
                (
                    status,
                    Json(ErrorDto {
                        message,
                        error: None,
                    }),
                )
                    .into_response()
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                (
                    status,
                    Json(ErrorDto {
                        message: "Invalid request body".to_string(),
                        error: Some(rejection.body_text()),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message. The raw error string is attached to the
/// body only in debug builds.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let error = cfg!(debug_assertions).then(|| self.0.to_string());

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
                error,
            }),
        )
            .into_response()
    }
}
