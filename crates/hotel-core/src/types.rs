//! # Domain Types
//!
//! The three record types stored by the reservation system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Hotel       │   │   Reservation   │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  hotel_id       │◄──│  hotel_id (FK)  │   │  customer_id    │       │
//! │  │  name           │   │  customer_id ───┼──►│  name, email    │       │
//! │  │  location       │   │  reservation_id │◄──┼─ reservation_id │       │
//! │  │  rooms          │   └─────────────────┘   │  has_reservation│       │
//! │  │  available_rooms│                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Denormalized Pointer
//! `Customer::reservation_id` points back at a reservation and
//! `has_reservation` mirrors whether it is set. Both are only written through
//! [`Customer::set_reservation`] so they cannot drift apart in memory.
//!
//! Field names are part of the on-disk format and must not be renamed.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Primary key of a hotel.
pub type HotelId = i64;

/// Primary key of a customer.
pub type CustomerId = i64;

/// Primary key of a reservation.
pub type ReservationId = i64;

// =============================================================================
// Hotel
// =============================================================================

/// A hotel and its room-availability counter.
///
/// ## Capacity Invariant
/// `0 <= available_rooms <= rooms` is kept by [`Hotel::take_room`] and
/// [`Hotel::release_room`]; [`Hotel::reset_capacity`] re-establishes it by
/// setting both counters to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique identifier.
    pub hotel_id: HotelId,

    /// Display name.
    pub name: String,

    /// Free-form location (city, address).
    pub location: String,

    /// Total number of rooms.
    pub rooms: i64,

    /// Rooms not currently reserved.
    pub available_rooms: i64,
}

impl Hotel {
    /// Creates a hotel with every room available.
    pub fn new(
        hotel_id: HotelId,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: i64,
    ) -> Self {
        Hotel {
            hotel_id,
            name: name.into(),
            location: location.into(),
            rooms,
            available_rooms: rooms,
        }
    }

    /// Takes one room out of the available pool.
    ///
    /// ## Returns
    /// * `Ok(())` - One room reserved
    /// * `Err(CoreError::NoAvailability)` - Counter already at zero, unchanged
    pub fn take_room(&mut self) -> CoreResult<()> {
        if self.available_rooms <= 0 {
            return Err(CoreError::NoAvailability {
                hotel_id: self.hotel_id,
            });
        }

        self.available_rooms -= 1;
        Ok(())
    }

    /// Returns one room to the available pool.
    ///
    /// Returns `false` (and changes nothing) when every room is already free.
    pub fn release_room(&mut self) -> bool {
        if self.available_rooms < self.rooms {
            self.available_rooms += 1;
            return true;
        }

        false
    }

    /// Replaces the capacity and frees every room.
    ///
    /// Rooms reserved before the reset are no longer counted against the hotel.
    pub fn reset_capacity(&mut self, rooms: i64) {
        self.rooms = rooms;
        self.available_rooms = rooms;
    }

    /// Number of rooms currently reserved.
    #[inline]
    pub fn reserved_rooms(&self) -> i64 {
        self.rooms - self.available_rooms
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with an optional pointer to their reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier.
    pub customer_id: CustomerId,

    /// Display name.
    pub name: String,

    /// Contact email (contains `@` and `.`).
    pub email: String,

    /// Reservation currently attached to this customer.
    ///
    /// Older documents omit the field entirely; that reads as `None`.
    #[serde(default)]
    pub reservation_id: Option<ReservationId>,

    /// Mirror of `reservation_id.is_some()`.
    #[serde(default)]
    pub has_reservation: bool,
}

impl Customer {
    /// Creates a customer without a reservation.
    pub fn new(customer_id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            customer_id,
            name: name.into(),
            email: email.into(),
            reservation_id: None,
            has_reservation: false,
        }
    }

    /// Points the customer at a reservation (or clears it with `None`).
    ///
    /// `has_reservation` is derived here and nowhere else.
    pub fn set_reservation(&mut self, reservation_id: Option<ReservationId>) {
        self.reservation_id = reservation_id;
        self.has_reservation = reservation_id.is_some();
    }

    /// Returns true if this customer points at `reservation_id`.
    #[inline]
    pub fn holds(&self, reservation_id: ReservationId) -> bool {
        self.reservation_id == Some(reservation_id)
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// A reservation linking one customer to one hotel.
///
/// There is no status field: a reservation either exists or has been
/// cancelled (removed from the document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier.
    pub reservation_id: ReservationId,

    /// Customer holding the reservation.
    pub customer_id: CustomerId,

    /// Hotel the reservation is for.
    pub hotel_id: HotelId,
}

impl Reservation {
    /// Creates a reservation record.
    pub const fn new(
        reservation_id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> Self {
        Reservation {
            reservation_id,
            customer_id,
            hotel_id,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hotel_has_all_rooms_available() {
        let hotel = Hotel::new(1, "Test Hotel", "Test Location", 10);
        assert_eq!(hotel.rooms, 10);
        assert_eq!(hotel.available_rooms, 10);
        assert_eq!(hotel.reserved_rooms(), 0);
    }

    #[test]
    fn test_take_room_until_full() {
        let mut hotel = Hotel::new(3, "Small Hotel", "Test City", 1);
        assert!(hotel.take_room().is_ok());
        assert_eq!(hotel.available_rooms, 0);

        let err = hotel.take_room().unwrap_err();
        assert!(matches!(err, CoreError::NoAvailability { hotel_id: 3 }));
        assert_eq!(hotel.available_rooms, 0);
    }

    #[test]
    fn test_release_room_never_exceeds_capacity() {
        let mut hotel = Hotel::new(1, "Test Hotel", "Test Location", 2);
        assert!(!hotel.release_room());
        assert_eq!(hotel.available_rooms, 2);

        hotel.take_room().unwrap();
        assert!(hotel.release_room());
        assert_eq!(hotel.available_rooms, 2);
    }

    #[test]
    fn test_reset_capacity_frees_reserved_rooms() {
        let mut hotel = Hotel::new(1, "Test Hotel", "Test Location", 5);
        hotel.take_room().unwrap();
        hotel.take_room().unwrap();

        hotel.reset_capacity(8);
        assert_eq!(hotel.rooms, 8);
        assert_eq!(hotel.available_rooms, 8);
    }

    #[test]
    fn test_set_reservation_derives_flag() {
        let mut customer = Customer::new(1, "Victor", "victor@tec.mx");
        assert!(!customer.has_reservation);

        customer.set_reservation(Some(7));
        assert!(customer.has_reservation);
        assert!(customer.holds(7));

        customer.set_reservation(None);
        assert!(!customer.has_reservation);
        assert_eq!(customer.reservation_id, None);
    }

    #[test]
    fn test_customer_json_field_names() {
        let mut customer = Customer::new(1, "Victor", "victor@tec.mx");
        customer.set_reservation(Some(1));

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["customer_id"], 1);
        assert_eq!(value["reservation_id"], 1);
        assert_eq!(value["has_reservation"], true);
    }

    #[test]
    fn test_customer_without_reservation_fields_deserializes() {
        let json = r#"{"customer_id": 2, "name": "Hugo", "email": "hugo@tec.mx"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.reservation_id, None);
        assert!(!customer.has_reservation);
    }

    #[test]
    fn test_reservation_json_field_names() {
        let value = serde_json::to_value(Reservation::new(1, 2, 3)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"reservation_id": 1, "customer_id": 2, "hotel_id": 3})
        );
    }
}
