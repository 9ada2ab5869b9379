//! # Error Types
//!
//! Domain-specific error types for hotel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotel-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule violations (no free rooms)         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  hotel-store errors (separate crate)                                   │
//! │  └── StoreError       - Keys, foreign keys, file I/O                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CLI output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::HotelId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Every room of the hotel is already taken.
    ///
    /// ## When This Occurs
    /// - `reserve_room` on a hotel whose `available_rooms` is 0
    /// - A hotel created with zero rooms
    #[error("No available rooms in hotel {hotel_id}")]
    NoAvailability { hotel_id: HotelId },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any record is mutated, so a failed create never reaches disk.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Malformed value (e.g. an email without `@`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Well-formed but unacceptable value (e.g. a negative room count).
    #[error("{field} is invalid: {reason}")]
    InvalidArgument { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoAvailability { hotel_id: 3 };
        assert_eq!(err.to_string(), "No available rooms in hotel 3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@' and '.'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "email has invalid format: must contain '@' and '.'"
        );

        let err = ValidationError::InvalidArgument {
            field: "rooms".to_string(),
            reason: "cannot be negative".to_string(),
        };
        assert_eq!(err.to_string(), "rooms is invalid: cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidArgument {
            field: "rooms".to_string(),
            reason: "cannot be negative".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
