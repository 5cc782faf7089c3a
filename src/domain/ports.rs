use crate::domain::model::Submission;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Durable, ordered, append-only collection of submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Idempotent. Creates the backing resource as an empty collection if absent.
    async fn ensure_ready(&self) -> Result<()>;

    /// Full snapshot in insertion order. Unparseable content reads as empty.
    async fn load_all(&self) -> Result<Vec<Submission>>;

    /// Appends one record and persists the whole collection.
    async fn append_one(&self, submission: &Submission) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn data_path(&self) -> PathBuf;
    fn static_dir(&self) -> &Path;
    fn body_limit(&self) -> usize;
}
