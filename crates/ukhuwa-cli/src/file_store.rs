//! # File-Backed Reservation Store
//!
//! A [`ReservationStore`] persisted as a JSON document, for single-process
//! CLI use: the in-process mutex is the serialization point and the file
//! is only durability. Multi-process deployments need a real transactional
//! backend instead.
//!
//! Writes go through a temporary file in the same directory followed by an
//! atomic rename, so a crash mid-write leaves the previous index intact.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use ukhuwa_codes::{CodeNamespace, ReservationRecord, ReservationStore, ReserveOutcome, StoreError};

/// On-disk shape: one code→record map per namespace.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileIndex {
    reservations: HashMap<CodeNamespace, HashMap<String, ReservationRecord>>,
}

/// JSON-file-backed reservation index.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    index: Mutex<FileIndex>,
}

impl FileStore {
    /// Open an existing index file, or start an empty one if the path does
    /// not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let index = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?
        } else {
            FileIndex::default()
        };
        Ok(Self {
            path,
            index: Mutex::new(index),
        })
    }

    /// Reservations currently held, across all namespaces.
    pub fn len(&self) -> usize {
        self.index
            .lock()
            .reservations
            .values()
            .map(HashMap::len)
            .sum()
    }

    /// Whether the index holds no reservations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, index: &FileIndex) -> Result<(), StoreError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        serde_json::to_writer_pretty(&mut tmp, index)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for FileStore {
    async fn try_reserve(
        &self,
        namespace: CodeNamespace,
        record: &ReservationRecord,
    ) -> Result<ReserveOutcome, StoreError> {
        let mut index = self.index.lock();
        let map = index.reservations.entry(namespace).or_default();
        if map.contains_key(&record.code) {
            return Ok(ReserveOutcome::AlreadyExists);
        }
        map.insert(record.code.clone(), record.clone());

        if let Err(e) = self.persist(&index) {
            // Keep memory and disk consistent: an unpersisted reservation
            // does not exist.
            if let Some(map) = index.reservations.get_mut(&namespace) {
                map.remove(&record.code);
            }
            return Err(e);
        }
        Ok(ReserveOutcome::Reserved)
    }
}
