use crate::core::aggregation::aggregate_stats;
use crate::core::{AggregateStats, Submission, SubmissionPayload, SubmissionStore};
use crate::utils::error::{AppError, Result};
use chrono::{SubsecRound, Utc};
use uuid::Uuid;

/// Validation and orchestration between the transport and the store.
pub struct SubmissionService<S: SubmissionStore> {
    store: S,
}

impl<S: SubmissionStore> SubmissionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates, stamps identity and time, then persists. The store is not
    /// touched when validation fails.
    pub async fn create_submission(&self, payload: SubmissionPayload) -> Result<Submission> {
        // Stamped at the precision the store persists.
        let submitted_at = Utc::now().trunc_subsecs(3);
        let submission = match payload.into_submission(Uuid::new_v4(), submitted_at) {
            Ok(submission) => submission,
            Err(e) => {
                if let AppError::ValidationError { errors } = &e {
                    tracing::debug!("Rejected submission with {} validation error(s)", errors.len());
                }
                return Err(e);
            }
        };

        self.store.append_one(&submission).await?;
        tracing::info!("Accepted submission {}", submission.id);

        Ok(submission)
    }

    /// Read failures degrade to an empty snapshot so the stats endpoint stays up.
    pub async fn compute_stats(&self) -> AggregateStats {
        let entries = match self.store.load_all().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Could not read submissions, reporting empty stats: {}", e);
                Vec::new()
            }
        };

        tracing::debug!("Aggregating {} submissions", entries.len());
        aggregate_stats(&entries)
    }
}
