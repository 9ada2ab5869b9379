//! # Reservation Repository
//!
//! File-backed operations for reservations, plus the customer pointer they
//! maintain.
//!
//! ## Reservation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reservation Lifecycle                               │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     ├── customer exists?    no → ForeignKeyViolation                   │
//! │     ├── hotel exists?       no → ForeignKeyViolation                   │
//! │     ├── id unused?          no → DuplicateKey                          │
//! │     ├── save reservations.json (+ new record)                          │
//! │     └── save customers.json (customer.reservation_id = id)             │
//! │                                                                         │
//! │  2. CANCEL                                                             │
//! │     ├── save reservations.json (- record, if present)                  │
//! │     └── save customers.json (pointer cleared, if any customer held it) │
//! │                                                                         │
//! │  The two saves are independent writes; a crash between them leaves     │
//! │  the documents out of step.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Room Counters
//! Creating or cancelling a reservation does not change the hotel's
//! `available_rooms`. Callers that want the counter to follow must call
//! [`HotelRepository::reserve_room`] / [`HotelRepository::cancel_reservation`]
//! themselves.

use std::path::PathBuf;

use hotel_core::{CustomerId, HotelId, Reservation, ReservationId};
use tracing::{debug, info, warn};

use crate::document::JsonDocument;
use crate::error::{StoreError, StoreResult};
use crate::repository::customer::CustomerRepository;
use crate::repository::hotel::HotelRepository;

/// Repository for reservation records.
///
/// Holds the customer and hotel repositories it validates against.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    document: JsonDocument<Reservation>,
    customers: CustomerRepository,
    hotels: HotelRepository,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository.
    pub fn new(
        path: impl Into<PathBuf>,
        customers: CustomerRepository,
        hotels: HotelRepository,
    ) -> Self {
        ReservationRepository {
            document: JsonDocument::new(path),
            customers,
            hotels,
        }
    }

    /// Reads every reservation.
    pub fn load(&self) -> StoreResult<Vec<Reservation>> {
        self.document.load()
    }

    /// Overwrites the document with `reservations`.
    pub fn save(&self, reservations: &[Reservation]) -> StoreResult<()> {
        self.document.save(reservations)
    }

    /// Returns true if the customer document currently holds `customer_id`.
    pub fn customer_exists(&self, customer_id: CustomerId) -> StoreResult<bool> {
        self.customers.exists(customer_id)
    }

    /// Returns true if the hotel document currently holds `hotel_id`.
    pub fn hotel_exists(&self, hotel_id: HotelId) -> StoreResult<bool> {
        self.hotels.exists(hotel_id)
    }

    /// Creates a reservation and points the customer at it.
    ///
    /// ## Returns
    /// * `Ok(Reservation)` - Stored record
    /// * `Err(StoreError::ForeignKeyViolation)` - Unknown customer (checked first) or hotel
    /// * `Err(StoreError::DuplicateKey)` - Reservation ID already taken
    ///
    /// A customer already holding a reservation is repointed at the new one;
    /// the old reservation record stays in the document.
    pub fn create(
        &self,
        reservation_id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> StoreResult<Reservation> {
        if !self.customer_exists(customer_id)? {
            return Err(StoreError::missing_reference("Customer", customer_id));
        }

        if !self.hotel_exists(hotel_id)? {
            return Err(StoreError::missing_reference("Hotel", hotel_id));
        }

        let mut reservations = self.load()?;
        if reservations
            .iter()
            .any(|r| r.reservation_id == reservation_id)
        {
            return Err(StoreError::duplicate("Reservation", reservation_id));
        }

        let reservation = Reservation::new(reservation_id, customer_id, hotel_id);
        reservations.push(reservation);
        self.save(&reservations)?;

        let mut customers = self.customers.load()?;
        if let Some(customer) = customers.iter_mut().find(|c| c.customer_id == customer_id) {
            if let Some(previous) = customer.reservation_id {
                warn!(
                    customer_id,
                    previous_reservation = previous,
                    reservation_id,
                    "Customer already held a reservation; pointer overwritten"
                );
            }
            customer.set_reservation(Some(reservation_id));
        }
        self.customers.save(&customers)?;

        info!(reservation_id, customer_id, hotel_id, "Reservation created");
        Ok(reservation)
    }

    /// Cancels a reservation and clears the customer pointer that named it.
    ///
    /// Returns whether a reservation record was removed. An unknown ID is not
    /// an error; a customer still pointing at it is cleared regardless.
    pub fn cancel(&self, reservation_id: ReservationId) -> StoreResult<bool> {
        let mut reservations = self.load()?;
        let before = reservations.len();
        reservations.retain(|r| r.reservation_id != reservation_id);
        let removed = reservations.len() != before;

        if removed {
            self.save(&reservations)?;
        } else {
            debug!(reservation_id, "Cancel: reservation not found");
        }

        let mut customers = self.customers.load()?;
        let cleared = match customers.iter_mut().find(|c| c.holds(reservation_id)) {
            Some(customer) => {
                customer.set_reservation(None);
                let customer_id = customer.customer_id;
                self.customers.save(&customers)?;
                debug!(reservation_id, customer_id, "Customer reservation cleared");
                true
            }
            None => false,
        };

        if removed || cleared {
            info!(reservation_id, removed, cleared, "Reservation canceled");
        } else {
            debug!(reservation_id, "Cancel: nothing to do");
        }
        Ok(removed)
    }

    /// Returns every reservation for display.
    pub fn list(&self) -> StoreResult<Vec<Reservation>> {
        self.load()
    }

    /// Gets a reservation by ID.
    pub fn get(&self, reservation_id: ReservationId) -> StoreResult<Option<Reservation>> {
        self.document.find(reservation_id)
    }
}
