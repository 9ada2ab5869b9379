//! # hotel-core: Pure Domain Logic for Hotel Reservations
//!
//! This crate holds the record types and business rules of the reservation
//! system. It never touches the file system; `hotel-store` does that.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Hotel Reservations Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 hotel-cli (menu + subcommands)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               hotel-store (JSON repositories)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   error   │  │ validation│                  │   │
//! │  │   │   Hotel   │  │ CoreError │  │   email   │                  │   │
//! │  │   │ Customer  │  │Validation │  │   rooms   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (Hotel, Customer, Reservation)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use hotel_core::Hotel;
//!
//! let mut hotel = Hotel::new(1, "Test Hotel", "Test Location", 2);
//! hotel.take_room().unwrap();
//! assert_eq!(hotel.available_rooms, 1);
//!
//! assert!(hotel.release_room());
//! assert_eq!(hotel.available_rooms, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default location of the customer document, relative to the working directory.
pub const DEFAULT_CUSTOMERS_PATH: &str = "data/customers.json";

/// Default location of the hotel document.
pub const DEFAULT_HOTELS_PATH: &str = "data/hotels.json";

/// Default location of the reservation document.
pub const DEFAULT_RESERVATIONS_PATH: &str = "data/reservations.json";
