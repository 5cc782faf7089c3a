use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const MALFORMED_REQUEST_MESSAGE: &str = "Requête invalide.";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Données trop volumineuses.";
pub const NOT_FOUND_MESSAGE: &str = "Ressource introuvable.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{message}")]
    MissingField {
        field: &'static str,
        message: &'static str,
    },

    #[error("Validation failed with {} error(s)", errors.len())]
    ValidationError { errors: Vec<String> },

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Payload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Storage failure: {message}")]
    StorageError { message: String },

    #[error("Resource not found")]
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Client,
    Storage,
    Configuration,
    NotFound,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::MissingField { .. } | AppError::ValidationError { .. } => {
                ErrorCategory::Validation
            }
            AppError::MalformedRequest { .. } | AppError::PayloadTooLarge { .. } => {
                ErrorCategory::Client
            }
            AppError::IoError(_)
            | AppError::SerializationError(_)
            | AppError::StorageError { .. } => ErrorCategory::Storage,
            AppError::ConfigError { .. } => ErrorCategory::Configuration,
            AppError::NotFound => ErrorCategory::NotFound,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => match self.category() {
                ErrorCategory::Validation | ErrorCategory::Client => StatusCode::BAD_REQUEST,
                ErrorCategory::NotFound => StatusCode::NOT_FOUND,
                ErrorCategory::Storage | ErrorCategory::Configuration => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Message shown to the visitor. Internal details stay in the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::MissingField { message, .. } => message.to_string(),
            AppError::ValidationError { errors } => errors.join(" "),
            AppError::MalformedRequest { .. } => MALFORMED_REQUEST_MESSAGE.to_string(),
            AppError::PayloadTooLarge { .. } => PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            AppError::ConfigError { message } => message.clone(),
            AppError::IoError(_)
            | AppError::SerializationError(_)
            | AppError::StorageError { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {} (category: {:?})", self, self.category());
        }

        let body = match &self {
            AppError::ValidationError { errors } => json!({ "errors": errors }),
            AppError::MissingField { message, .. } => json!({ "errors": [message] }),
            _ => json!({ "message": self.user_friendly_message() }),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
