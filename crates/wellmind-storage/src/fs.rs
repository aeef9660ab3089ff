use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use wellmind_core::models::assessment::AssessmentResult;
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::store_keys;

use crate::error::StorageError;
use crate::store::{ResultStore, instruments_in_scope, sort_newest_first};

/// Local filesystem store: one JSON document per result under `root`,
/// laid out as `results/<instrument>/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileResultStore {
    root: PathBuf,
}

impl FileResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        key.split('/').fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Paths of every result document stored for an instrument.
    async fn result_paths(&self, instrument: InstrumentId) -> Result<Vec<PathBuf>, StorageError> {
        let dir = self.path_for(&store_keys::instrument_prefix(instrument));
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    async fn load(path: &Path) -> Result<AssessmentResult, StorageError> {
        let json = tokio::fs::read(path).await?;
        serde_json::from_slice(&json).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "unreadable result document");
            StorageError::Serialization(e)
        })
    }
}

impl ResultStore for FileResultStore {
    /// Write to a private temp file, then hard-link it into place. Linking
    /// fails if the document already exists, so concurrent appends of one id
    /// cannot both succeed, and a crash never leaves a partial document.
    async fn append(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        let key = store_keys::result(result.instrument_id, result.id);
        let path = self.path_for(&key);

        if tokio::fs::try_exists(&path).await? {
            return Err(StorageError::Duplicate { key });
        }

        let json = serde_json::to_vec_pretty(result)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp_path = path.with_extension(unique_tmp_extension());
        tokio::fs::write(&tmp_path, &json).await?;
        let linked = tokio::fs::hard_link(&tmp_path, &path).await;
        let _ = tokio::fs::remove_file(&tmp_path).await;
        match linked {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::Duplicate { key });
            }
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(path = %path.display(), "result written to local disk");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results = Vec::new();
        for instrument in InstrumentId::ALL {
            results.extend(self.get_by_instrument(instrument).await?);
        }
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn get_by_instrument(
        &self,
        instrument: InstrumentId,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results = Vec::new();
        for path in self.result_paths(instrument).await? {
            results.push(Self::load(&path).await?);
        }
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn clear_history(&self, instrument: Option<InstrumentId>) -> Result<usize, StorageError> {
        let mut removed = 0;
        for instrument in instruments_in_scope(instrument) {
            for path in self.result_paths(instrument).await? {
                tokio::fs::remove_file(&path).await?;
                removed += 1;
            }
        }

        tracing::info!(root = %self.root.display(), removed, "cleared local result history");
        Ok(removed)
    }
}

/// `json.<pid>-<n>.tmp`, distinct for every in-flight write from this process.
fn unique_tmp_extension() -> String {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    format!("json.{}-{n}.tmp", std::process::id())
}
