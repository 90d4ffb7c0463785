// ===== aimforge/src/store.rs =====
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AfResult;

/// Durable home of the first-use timestamp driving the optimization
/// ramp. Absence is a valid state (fresh install), not an error.
pub trait TimestampStore {
    fn load(&self) -> AfResult<Option<u64>>;
    fn save(&mut self, timestamp_ms: u64) -> AfResult<()>;
    fn clear(&mut self) -> AfResult<()>;
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct StoredTimestamp {
    first_use_ms: u64,
}

/// JSON-file store, one small file per user/session.
#[derive(Debug, Clone)]
pub struct FileTimestampStore {
    path: PathBuf,
}

impl FileTimestampStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimestampStore for FileTimestampStore {
    fn load(&self) -> AfResult<Option<u64>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let stored: StoredTimestamp = serde_json::from_str(&content)?;
        Ok(Some(stored.first_use_ms))
    }

    fn save(&mut self, timestamp_ms: u64) -> AfResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&StoredTimestamp {
            first_use_ms: timestamp_ms,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&mut self) -> AfResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway contexts.
#[derive(Debug, Default, Clone)]
pub struct MemoryTimestampStore {
    slot: Option<u64>,
}

impl MemoryTimestampStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(timestamp_ms: u64) -> Self {
        Self {
            slot: Some(timestamp_ms),
        }
    }
}

impl TimestampStore for MemoryTimestampStore {
    fn load(&self) -> AfResult<Option<u64>> {
        Ok(self.slot)
    }

    fn save(&mut self, timestamp_ms: u64) -> AfResult<()> {
        self.slot = Some(timestamp_ms);
        Ok(())
    }

    fn clear(&mut self) -> AfResult<()> {
        self.slot = None;
        Ok(())
    }
}
