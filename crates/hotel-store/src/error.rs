//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (hotel-core)                              │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds entity, id and path context           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ErrorKind ← Coarse classification for callers and tests               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use hotel_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record with the same primary key already exists.
    ///
    /// ## When This Occurs
    /// - `create` on any repository with an id already in the document
    #[error("{entity} ID {id} already exists")]
    DuplicateKey { entity: &'static str, id: i64 },

    /// A referenced record does not exist.
    ///
    /// ## When This Occurs
    /// - Reservation created for an unknown customer
    /// - Reservation created for an unknown hotel
    #[error("{entity} ID {id} does not exist")]
    ForeignKeyViolation { entity: &'static str, id: i64 },

    /// Operation target is absent.
    ///
    /// Only raised where absence is an error (`reserve_room`); delete and
    /// modify treat a missing record as a no-op.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Domain rule violation from hotel-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Document could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document content is not the expected JSON array.
    #[error("Malformed document {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Validation failures surface as `StoreError::Core(CoreError::Validation(_))`.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Coarse error classification.
///
/// ## Mapping
/// ```text
/// Core(Validation(InvalidFormat))   → InvalidFormat
/// Core(Validation(InvalidArgument)) → InvalidArgument
/// DuplicateKey                      → DuplicateKey
/// ForeignKeyViolation               → ForeignKeyViolation
/// NotFound                          → NotFound
/// Core(NoAvailability)              → NoAvailability
/// Io / Serialization                → Storage
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidArgument,
    DuplicateKey,
    ForeignKeyViolation,
    NotFound,
    NoAvailability,
    Storage,
}

impl StoreError {
    /// Creates a DuplicateKey error.
    pub fn duplicate(entity: &'static str, id: i64) -> Self {
        StoreError::DuplicateKey { entity, id }
    }

    /// Creates a ForeignKeyViolation error.
    pub fn missing_reference(entity: &'static str, id: i64) -> Self {
        StoreError::ForeignKeyViolation { entity, id }
    }

    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            StoreError::ForeignKeyViolation { .. } => ErrorKind::ForeignKeyViolation,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Core(CoreError::NoAvailability { .. }) => ErrorKind::NoAvailability,
            StoreError::Core(CoreError::Validation(ValidationError::InvalidFormat { .. })) => {
                ErrorKind::InvalidFormat
            }
            StoreError::Core(CoreError::Validation(ValidationError::InvalidArgument { .. })) => {
                ErrorKind::InvalidArgument
            }
            StoreError::Io { .. } | StoreError::Serialization { .. } => ErrorKind::Storage,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            StoreError::duplicate("Customer", 1).kind(),
            ErrorKind::DuplicateKey
        );
        assert_eq!(
            StoreError::missing_reference("Hotel", 99).kind(),
            ErrorKind::ForeignKeyViolation
        );
        assert_eq!(StoreError::not_found("Hotel", 2).kind(), ErrorKind::NotFound);

        let err: StoreError = CoreError::NoAvailability { hotel_id: 1 }.into();
        assert_eq!(err.kind(), ErrorKind::NoAvailability);
    }

    #[test]
    fn test_validation_error_keeps_its_kind() {
        let err: StoreError = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);

        let err: StoreError = ValidationError::InvalidArgument {
            field: "rooms".to_string(),
            reason: "negative".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::duplicate("Customer", 1).to_string(),
            "Customer ID 1 already exists"
        );
        assert_eq!(
            StoreError::missing_reference("Hotel", 99).to_string(),
            "Hotel ID 99 does not exist"
        );
    }
}
