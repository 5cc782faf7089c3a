use crate::core::{Submission, SubmissionStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Volatile store for tests and throwaway runs. Same ordering contract as the
/// file store, never fails.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<Vec<Submission>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Submission>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Submission>> {
        Ok(self.entries.read().await.clone())
    }

    async fn append_one(&self, submission: &Submission) -> Result<()> {
        self.entries.write().await.push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let seeded = Submission {
            id: Uuid::new_v4(),
            age_range: "55+".to_string(),
            profession: "retired".to_string(),
            family_situation: "widowed".to_string(),
            feeling: "grateful".to_string(),
            submitted_at: Utc::now(),
        };
        let store = InMemoryStore::with_entries(vec![seeded.clone()]);

        let next = Submission {
            id: Uuid::new_v4(),
            ..seeded.clone()
        };
        store.append_one(&next).await.unwrap();

        let entries = store.load_all().await.unwrap();
        assert_eq!(entries, vec![seeded, next]);
        assert!(!store.is_empty().await);
    }
}
