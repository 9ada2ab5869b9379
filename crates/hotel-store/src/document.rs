//! # JSON Documents
//!
//! One document = one JSON array of records on disk.
//!
//! ## Round Trip
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Load → Mutate → Save                                │
//! │                                                                         │
//! │  load()                                                                 │
//! │   ├── file missing / empty ──► []                                       │
//! │   └── parse JSON array ──────► Vec<T>                                   │
//! │                                  │                                      │
//! │                         repository mutates in memory                    │
//! │                                  │                                      │
//! │  save(&[T])                      ▼                                      │
//! │   1. serialize whole array (fails → file untouched)                     │
//! │   2. write into temp file next to the target                            │
//! │   3. fsync + rename over the target                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output is indented with four spaces so documents written by older tooling
//! and by this crate look the same.

use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use hotel_core::{Customer, Hotel, Reservation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Record
// =============================================================================

/// A record that lives in a document and is identified by an integer key.
pub trait Record: Serialize + DeserializeOwned {
    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    /// Primary key.
    fn key(&self) -> i64;
}

impl Record for Hotel {
    const ENTITY: &'static str = "Hotel";

    fn key(&self) -> i64 {
        self.hotel_id
    }
}

impl Record for Customer {
    const ENTITY: &'static str = "Customer";

    fn key(&self) -> i64 {
        self.customer_id
    }
}

impl Record for Reservation {
    const ENTITY: &'static str = "Reservation";

    fn key(&self) -> i64 {
        self.reservation_id
    }
}

// =============================================================================
// Document
// =============================================================================

/// Handle to a JSON array document at a fixed path.
///
/// Holds no records; every call goes to disk.
#[derive(Debug)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonDocument<T> {
    fn clone(&self) -> Self {
        JsonDocument {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> JsonDocument<T> {
    /// Creates a handle. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonDocument {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Location of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - File missing or blank
    /// * `Ok(records)` - Parsed array, in file order
    /// * `Err(StoreError::Serialization)` - Content is not an array of `T`
    pub fn load(&self) -> StoreResult<Vec<T>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(entity = T::ENTITY, path = %self.path.display(), "Document missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<T> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            entity = T::ENTITY,
            path = %self.path.display(),
            count = records.len(),
            "Loaded document"
        );
        Ok(records)
    }

    /// Replaces the document with `records`.
    ///
    /// The new content is fully serialized before the file is touched, and
    /// lands via rename, so readers see either the old or the new array.
    pub fn save(&self, records: &[T]) -> StoreResult<()> {
        let bytes = self.to_pretty_json(records)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        temp.write_all(&bytes)
            .map_err(|source| self.io_error(source))?;
        temp.as_file()
            .sync_all()
            .map_err(|source| self.io_error(source))?;
        temp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        debug!(
            entity = T::ENTITY,
            path = %self.path.display(),
            count = records.len(),
            "Saved document"
        );
        Ok(())
    }

    /// Returns the record with `key`, if any.
    pub fn find(&self, key: i64) -> StoreResult<Option<T>> {
        Ok(self.load()?.into_iter().find(|r| r.key() == key))
    }

    /// Returns true if a record with `key` exists.
    pub fn contains(&self, key: i64) -> StoreResult<bool> {
        Ok(self.load()?.iter().any(|r| r.key() == key))
    }

    fn to_pretty_json(&self, records: &[T]) -> StoreResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|source| StoreError::Serialization {
                path: self.path.clone(),
                source,
            })?;
        Ok(buf)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn hotel_doc(dir: &TempDir) -> JsonDocument<Hotel> {
        JsonDocument::new(dir.path().join("data").join("hotels.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let doc = hotel_doc(&dir);
        assert!(doc.load().unwrap().is_empty());
        assert!(!doc.path().exists());
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, "  \n").unwrap();

        let doc: JsonDocument<Hotel> = JsonDocument::new(path);
        assert!(doc.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let doc = hotel_doc(&dir);
        doc.save(&[Hotel::new(1, "Test Hotel", "Test City", 10)])
            .unwrap();

        assert!(doc.path().exists());
        assert_eq!(doc.load().unwrap().len(), 1);
    }

    #[test]
    fn test_save_load_is_fixed_point() {
        let dir = TempDir::new().unwrap();
        let doc = hotel_doc(&dir);
        let hotels = vec![
            Hotel::new(2, "Second", "B", 3),
            Hotel::new(1, "First", "A", 5),
        ];
        doc.save(&hotels).unwrap();

        let first_bytes = fs::read(doc.path()).unwrap();
        let loaded = doc.load().unwrap();
        doc.save(&loaded).unwrap();

        assert_eq!(loaded, hotels);
        assert_eq!(fs::read(doc.path()).unwrap(), first_bytes);
    }

    #[test]
    fn test_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let doc = hotel_doc(&dir);
        doc.save(&[Hotel::new(1, "Test Hotel", "Test City", 10)])
            .unwrap();

        let text = fs::read_to_string(doc.path()).unwrap();
        assert!(text.contains("\n        \"hotel_id\": 1"));
    }

    #[test]
    fn test_clone_shares_the_document() {
        let dir = TempDir::new().unwrap();
        let doc = hotel_doc(&dir);
        let copy = doc.clone();

        copy.save(&[Hotel::new(1, "One", "X", 2)]).unwrap();

        assert_eq!(copy.path(), doc.path());
        assert!(doc.contains(1).unwrap());
    }

    #[test]
    fn test_failed_save_leaves_disk_untouched() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let doc = hotel_doc(&dir);
        let err = doc.save(&[Hotel::new(1, "One", "X", 2)]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_malformed_document_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, "{not json").unwrap();

        let doc: JsonDocument<Hotel> = JsonDocument::new(&path);
        let err = doc.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_find_and_contains() {
        let dir = TempDir::new().unwrap();
        let doc = hotel_doc(&dir);
        doc.save(&[Hotel::new(7, "Seven", "X", 1)]).unwrap();

        assert!(doc.contains(7).unwrap());
        assert!(!doc.contains(8).unwrap());
        assert_eq!(doc.find(7).unwrap().map(|h| h.name), Some("Seven".to_string()));
    }
}
