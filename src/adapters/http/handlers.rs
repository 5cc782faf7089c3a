use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::AppState;
use crate::core::{AggregateStats, Submission, SubmissionPayload, SubmissionStore};
use crate::utils::error::AppError;

pub const THANK_YOU_MESSAGE: &str = "Merci pour votre témoignage !";

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub entry: Submission,
}

pub async fn stats<S: SubmissionStore + 'static>(
    State(state): State<AppState<S>>,
) -> Json<AggregateStats> {
    Json(state.service.compute_stats().await)
}

pub async fn create_testimonial<S: SubmissionStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::debug!("Rejected body over {} bytes", state.body_limit);
            AppError::PayloadTooLarge {
                limit: state.body_limit,
            }
        } else {
            AppError::MalformedRequest {
                message: rejection.body_text(),
            }
        }
    })?;

    let payload = SubmissionPayload::from_bytes(&body)?;
    let entry = state.service.create_submission(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: THANK_YOU_MESSAGE,
            entry,
        }),
    ))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
