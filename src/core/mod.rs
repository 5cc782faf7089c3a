pub mod aggregation;
pub mod service;

pub use crate::domain::model::{AggregateStats, Submission, SubmissionPayload};
pub use crate::domain::ports::{ConfigProvider, SubmissionStore};
pub use crate::utils::error::Result;
