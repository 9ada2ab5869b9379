//! # Hotel Repository
//!
//! File-backed operations for hotels and their room counters.
//!
//! ## Room Counter
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    available_rooms transitions                      │
//! │                                                                     │
//! │  create(rooms=N) ──► available = N                                  │
//! │  reserve_room   ──► available - 1      (0 → NoAvailability)         │
//! │  cancel_reservation ► available + 1    (== rooms → NothingToCancel) │
//! │  modify(rooms=M) ──► available = M     (earlier bookings forgotten) │
//! │                                                                     │
//! │  The reservation repository never touches this counter.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use hotel_core::validation::validate_rooms;
use hotel_core::{Hotel, HotelId};
use tracing::{debug, info, warn};

use crate::document::JsonDocument;
use crate::error::{StoreError, StoreResult};

/// Outcome of a hotel-level room cancellation.
///
/// None of these is an error; the caller decides how to report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCancellation {
    /// A room was returned to the pool and the document saved.
    Released,
    /// Every room was already available.
    NothingToCancel,
    /// No hotel with the given ID.
    HotelNotFound,
}

/// Repository for hotel records.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    document: JsonDocument<Hotel>,
}

impl HotelRepository {
    /// Creates a new HotelRepository over the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HotelRepository {
            document: JsonDocument::new(path),
        }
    }

    /// Reads every hotel.
    pub fn load(&self) -> StoreResult<Vec<Hotel>> {
        self.document.load()
    }

    /// Overwrites the document with `hotels`.
    pub fn save(&self, hotels: &[Hotel]) -> StoreResult<()> {
        self.document.save(hotels)
    }

    /// Creates a hotel with every room available.
    ///
    /// ## Returns
    /// * `Ok(Hotel)` - Stored record
    /// * `Err` with kind `InvalidArgument` - `rooms < 0`
    /// * `Err(StoreError::DuplicateKey)` - ID already taken
    pub fn create(
        &self,
        hotel_id: HotelId,
        name: &str,
        location: &str,
        rooms: i64,
    ) -> StoreResult<Hotel> {
        validate_rooms(rooms)?;

        let mut hotels = self.load()?;
        if hotels.iter().any(|h| h.hotel_id == hotel_id) {
            return Err(StoreError::duplicate("Hotel", hotel_id));
        }

        let hotel = Hotel::new(hotel_id, name, location, rooms);
        hotels.push(hotel.clone());
        self.save(&hotels)?;

        info!(hotel_id, rooms, "Hotel created");
        Ok(hotel)
    }

    /// Deletes a hotel. Returns whether a record was removed.
    ///
    /// Reservations pointing at the hotel are left in place.
    pub fn delete(&self, hotel_id: HotelId) -> StoreResult<bool> {
        let mut hotels = self.load()?;
        let before = hotels.len();
        hotels.retain(|h| h.hotel_id != hotel_id);

        if hotels.len() == before {
            debug!(hotel_id, "Delete: hotel not found");
            return Ok(false);
        }

        self.save(&hotels)?;
        info!(hotel_id, "Hotel deleted");
        Ok(true)
    }

    /// Overwrites a hotel's fields and resets `available_rooms` to `rooms`.
    ///
    /// Returns whether the hotel was found; an unknown ID is a silent no-op.
    /// A negative `rooms` is rejected before anything is read.
    pub fn modify(
        &self,
        hotel_id: HotelId,
        name: &str,
        location: &str,
        rooms: i64,
    ) -> StoreResult<bool> {
        validate_rooms(rooms)?;

        let mut hotels = self.load()?;

        let Some(hotel) = hotels.iter_mut().find(|h| h.hotel_id == hotel_id) else {
            debug!(hotel_id, "Modify: hotel not found");
            return Ok(false);
        };

        if hotel.reserved_rooms() > 0 {
            warn!(
                hotel_id,
                reserved = hotel.reserved_rooms(),
                "Modify resets availability; reserved rooms are released"
            );
        }

        hotel.name = name.to_string();
        hotel.location = location.to_string();
        hotel.reset_capacity(rooms);

        self.save(&hotels)?;
        info!(hotel_id, rooms, "Hotel modified");
        Ok(true)
    }

    /// Reserves one room.
    ///
    /// ## Returns
    /// * `Ok(Hotel)` - Updated record
    /// * `Err(StoreError::NotFound)` - Unknown hotel
    /// * `Err` with kind `NoAvailability` - No free room; counter unchanged
    pub fn reserve_room(&self, hotel_id: HotelId) -> StoreResult<Hotel> {
        let mut hotels = self.load()?;

        let hotel = hotels
            .iter_mut()
            .find(|h| h.hotel_id == hotel_id)
            .ok_or_else(|| StoreError::not_found("Hotel", hotel_id))?;

        hotel.take_room()?;
        let updated = hotel.clone();

        self.save(&hotels)?;
        info!(hotel_id, available = updated.available_rooms, "Room reserved");
        Ok(updated)
    }

    /// Returns one reserved room to the pool.
    ///
    /// Absence of the hotel or of any reserved room is reported, not raised.
    pub fn cancel_reservation(&self, hotel_id: HotelId) -> StoreResult<RoomCancellation> {
        let mut hotels = self.load()?;

        let Some(hotel) = hotels.iter_mut().find(|h| h.hotel_id == hotel_id) else {
            warn!(hotel_id, "Hotel not found");
            return Ok(RoomCancellation::HotelNotFound);
        };

        if !hotel.release_room() {
            warn!(hotel_id, "No reservations to cancel");
            return Ok(RoomCancellation::NothingToCancel);
        }

        let name = hotel.name.clone();
        self.save(&hotels)?;
        info!(hotel_id, hotel = %name, "Room reservation canceled");
        Ok(RoomCancellation::Released)
    }

    /// Returns every hotel for display.
    pub fn list(&self) -> StoreResult<Vec<Hotel>> {
        self.load()
    }

    /// Gets a hotel by ID.
    pub fn get(&self, hotel_id: HotelId) -> StoreResult<Option<Hotel>> {
        self.document.find(hotel_id)
    }

    /// Returns true if a hotel with this ID exists.
    pub fn exists(&self, hotel_id: HotelId) -> StoreResult<bool> {
        self.document.contains(hotel_id)
    }
}
