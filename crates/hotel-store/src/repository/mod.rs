//! # Repository Module
//!
//! Document-backed repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │                                                                 │
//! │       │  stores.hotels().reserve_room(3)                               │
//! │       ▼                                                                 │
//! │  HotelRepository                                                       │
//! │  ├── load()   ← JsonDocument<Hotel>                                    │
//! │  ├── mutate in memory                                                  │
//! │  └── save()   → JsonDocument<Hotel>                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/hotels.json                                                      │
//! │                                                                         │
//! │  Repositories keep nothing between calls besides their path.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer CRUD
//! - [`HotelRepository`](hotel::HotelRepository) - Hotel CRUD and room counters
//! - [`ReservationRepository`](reservation::ReservationRepository) - Reservations and customer pointers

pub mod customer;
pub mod hotel;
pub mod reservation;
