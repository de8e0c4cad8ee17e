//! Flat JSON file persistence
//!
//! Each collection is a pretty-printed JSON array in its own file under the
//! data directory. A missing or corrupt file is reset to `[]` on first
//! read. Reads and appends go through one async mutex, so concurrent
//! submissions are never lost.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use lab_service::error::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

/// Contact form submissions
pub const CONTACTS_FILE: &str = "contacts.json";

/// Feedback entries
pub const FEEDBACK_FILE: &str = "feedback.json";

/// A saved submission with its assigned id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    /// Milliseconds since the Unix epoch, unique within the store
    pub id: i64,
    #[serde(flatten)]
    pub data: T,
    /// RFC 3339, UTC
    pub created_at: String,
}

/// JSON-array files in one directory
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    /// Last id handed out
    last_id: Mutex<i64>,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_id: Mutex::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every record in `file`, in insertion order
    pub async fn read_all(&self, file: &str) -> Result<Vec<Value>> {
        let _guard = self.last_id.lock().await;
        self.read_unlocked(file).await
    }

    /// Records in `file` that decode as `T`; others are skipped
    pub async fn read_as<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let records = self.read_all(file).await?;
        Ok(records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect())
    }

    /// Number of records in `file`
    pub async fn count(&self, file: &str) -> Result<usize> {
        Ok(self.read_all(file).await?.len())
    }

    /// Append `data` to `file`, assigning an id and creation time
    pub async fn append<T>(&self, file: &str, data: T) -> Result<Stored<T>>
    where
        T: Serialize,
    {
        let mut last_id = self.last_id.lock().await;
        let mut records = self.read_unlocked(file).await?;

        let id = Utc::now().timestamp_millis().max(*last_id + 1);
        let stored = Stored {
            id,
            data,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        records.push(serde_json::to_value(&stored)?);
        self.write_unlocked(file, &records).await?;
        *last_id = id;

        tracing::info!(file, id, total = records.len(), "Stored submission");
        Ok(stored)
    }

    async fn read_unlocked(&self, file: &str) -> Result<Vec<Value>> {
        let path = self.dir.join(file);

        let parsed = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Data file not readable");
                None
            }
        };

        match parsed {
            Some(Value::Array(records)) => Ok(records),
            _ => {
                tracing::warn!(path = %path.display(), "Resetting data file to an empty list");
                self.write_unlocked(file, &[]).await?;
                Ok(Vec::new())
            }
        }
    }

    async fn write_unlocked(&self, file: &str, records: &[Value]) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(self.dir.join(file), json).await?;
        Ok(())
    }
}
