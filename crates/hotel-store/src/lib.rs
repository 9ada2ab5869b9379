//! # hotel-store: JSON Document Stores for Hotel Reservations
//!
//! This crate provides file access for the reservation system. Each entity
//! collection is one JSON array document; every operation is a full
//! load → mutate → save round trip.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hotel Reservations Data Flow                       │
//! │                                                                         │
//! │  hotel-cli (menu / subcommand)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   hotel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │    Stores     │    │  Repositories  │    │ JsonDocument │  │   │
//! │  │   │  (stores.rs)  │    │ (repository/)  │    │ (document.rs)│  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ StoreConfig   │───►│ CustomerRepo   │───►│ load / save  │  │   │
//! │  │   │ paths         │    │ HotelRepo      │    │ temp+rename  │  │   │
//! │  │   │               │    │ ReservationRepo│    │              │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/customers.json   data/hotels.json   data/reservations.json       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`stores`] - Store configuration and the repository handle
//! - [`document`] - JSON array documents on disk
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (customer, hotel, reservation)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hotel_store::{Stores, StoreConfig};
//!
//! let stores = Stores::new(StoreConfig::in_dir("data"));
//!
//! stores.hotels().create(1, "Test Hotel", "Test Location", 10)?;
//! stores.hotels().reserve_room(1)?;
//!
//! for hotel in stores.hotels().list()? {
//!     println!("{} has {} free rooms", hotel.name, hotel.available_rooms);
//! }
//! # Ok::<(), hotel_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod repository;
pub mod stores;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ErrorKind, StoreError, StoreResult};
pub use stores::{StoreConfig, Stores};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::hotel::{HotelRepository, RoomCancellation};
pub use repository::reservation::ReservationRepository;
