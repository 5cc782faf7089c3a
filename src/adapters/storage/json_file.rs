use crate::core::{ConfigProvider, Submission, SubmissionStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const EMPTY_COLLECTION: &[u8] = b"[]";

enum Snapshot {
    Parsed(Vec<Submission>),
    Corrupted(Vec<u8>),
}

/// Submissions kept as one pretty-printed JSON array on disk.
///
/// Every append rewrites the whole file: the current array is loaded, the
/// record pushed, and the result written to a sibling temp file that is then
/// renamed over the live file. Appends are serialized by an in-process mutex,
/// so concurrent requests cannot drop each other's records. Several processes
/// sharing one file are not coordinated.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.data_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("submissions.json"));
        name.push(suffix);
        self.path.with_file_name(name)
    }

    async fn read_snapshot(&self) -> Result<Snapshot> {
        let raw = fs::read(&self.path).await?;

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Snapshot::Parsed(Vec::new()));
        }

        match serde_json::from_slice::<Vec<Submission>>(&raw) {
            Ok(entries) => Ok(Snapshot::Parsed(entries)),
            Err(e) => {
                tracing::warn!(
                    "Submission history at {} is unreadable, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Snapshot::Corrupted(raw))
            }
        }
    }

    async fn preserve_corrupted(&self, raw: &[u8]) -> Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let backup = self.sibling_path(&format!(".corrupt-{}", stamp));

        fs::write(&backup, raw).await?;
        tracing::warn!("Copied unreadable history aside to {}", backup.display());
        Ok(())
    }

    async fn write_all(&self, entries: &[Submission]) -> Result<()> {
        let data = serde_json::to_vec_pretty(entries)?;
        let tmp_path = self.sibling_path(".tmp");

        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!(
            "Wrote {} submissions ({} bytes) to {}",
            entries.len(),
            data.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn ensure_ready(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(mut file) => {
                file.write_all(EMPTY_COLLECTION).await?;
                file.flush().await?;
                tracing::info!("Initialized submission store at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Submission>> {
        self.ensure_ready().await?;

        let entries = match self.read_snapshot().await? {
            Snapshot::Parsed(entries) => entries,
            Snapshot::Corrupted(_) => Vec::new(),
        };

        tracing::debug!("Loaded {} submissions from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    async fn append_one(&self, submission: &Submission) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.ensure_ready().await?;

        let mut entries = match self.read_snapshot().await? {
            Snapshot::Parsed(entries) => entries,
            Snapshot::Corrupted(raw) => {
                self.preserve_corrupted(&raw).await?;
                Vec::new()
            }
        };

        entries.push(submission.clone());
        self.write_all(&entries).await
    }
}
