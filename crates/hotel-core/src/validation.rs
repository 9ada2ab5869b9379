//! # Validation Module
//!
//! Input validation rules applied before a record is created or changed.
//!
//! ## Usage
//! ```rust
//! use hotel_core::validation::{validate_email, validate_rooms};
//!
//! assert!(validate_email("victor@tec.mx").is_ok());
//! assert!(validate_rooms(-5).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer email.
///
/// ## Rules
/// - Must contain at least one `@`
/// - Must contain at least one `.`
///
/// Nothing stricter: positions of the two characters are not checked.
///
/// ## Example
/// ```rust
/// use hotel_core::validation::validate_email;
///
/// assert!(validate_email("john@example.com").is_ok());
/// assert!(validate_email("invalid-email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: format!("'{}' must contain '@' and '.'", email),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a hotel room count.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a hotel with no bookable rooms)
pub fn validate_rooms(rooms: i64) -> ValidationResult<()> {
    if rooms < 0 {
        return Err(ValidationError::InvalidArgument {
            field: "rooms".to_string(),
            reason: "number of rooms cannot be negative".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
