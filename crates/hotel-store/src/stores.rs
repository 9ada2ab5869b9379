//! # Store Configuration and Handle
//!
//! Where the three documents live and how to get repositories for them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Handle                                    │
//! │                                                                         │
//! │  StoreConfig::in_dir("data") ← or Default / builder setters            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stores::new(config)                                                   │
//! │       │                                                                 │
//! │       ├── customers()    → CustomerRepository(customers.json)          │
//! │       ├── hotels()       → HotelRepository(hotels.json)                │
//! │       └── reservations() → ReservationRepository(reservations.json,    │
//! │                                 customers, hotels)                      │
//! │                                                                         │
//! │  Nothing is opened up front; every repository call reads the file.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use hotel_core::{DEFAULT_CUSTOMERS_PATH, DEFAULT_HOTELS_PATH, DEFAULT_RESERVATIONS_PATH};
use tracing::debug;

use crate::repository::customer::CustomerRepository;
use crate::repository::hotel::HotelRepository;
use crate::repository::reservation::ReservationRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Locations of the three documents.
///
/// ## Example
/// ```rust
/// use hotel_store::StoreConfig;
///
/// let config = StoreConfig::in_dir("/tmp/hotel-data")
///     .hotels_path("/tmp/other/hotels.json");
/// assert!(config.customers_path.ends_with("customers.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Customer document.
    /// Default: `data/customers.json`
    pub customers_path: PathBuf,

    /// Hotel document.
    /// Default: `data/hotels.json`
    pub hotels_path: PathBuf,

    /// Reservation document.
    /// Default: `data/reservations.json`
    pub reservations_path: PathBuf,
}

impl StoreConfig {
    /// Places all three documents in `dir` under their standard file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig {
            customers_path: dir.join("customers.json"),
            hotels_path: dir.join("hotels.json"),
            reservations_path: dir.join("reservations.json"),
        }
    }

    /// Sets the customer document path.
    pub fn customers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.customers_path = path.into();
        self
    }

    /// Sets the hotel document path.
    pub fn hotels_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.hotels_path = path.into();
        self
    }

    /// Sets the reservation document path.
    pub fn reservations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reservations_path = path.into();
        self
    }
}

impl Default for StoreConfig {
    /// The fixed relative paths under `data/`.
    fn default() -> Self {
        StoreConfig {
            customers_path: PathBuf::from(DEFAULT_CUSTOMERS_PATH),
            hotels_path: PathBuf::from(DEFAULT_HOTELS_PATH),
            reservations_path: PathBuf::from(DEFAULT_RESERVATIONS_PATH),
        }
    }
}

// =============================================================================
// Stores
// =============================================================================

/// Entry point handing out repositories bound to one configuration.
///
/// ## Usage
/// ```rust,no_run
/// use hotel_store::{Stores, StoreConfig};
///
/// let stores = Stores::new(StoreConfig::default());
/// stores.hotels().create(1, "Test Hotel", "Test Location", 10)?;
/// stores.customers().create(1, "Victor", "victor@tec.mx")?;
/// stores.reservations().create(1, 1, 1)?;
/// # Ok::<(), hotel_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Stores {
    config: StoreConfig,
}

impl Stores {
    /// Creates a handle. No file is touched.
    pub fn new(config: StoreConfig) -> Self {
        debug!(
            customers = %config.customers_path.display(),
            hotels = %config.hotels_path.display(),
            reservations = %config.reservations_path.display(),
            "Store paths configured"
        );
        Stores { config }
    }

    /// Returns the configuration this handle was built from.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.config.customers_path.clone())
    }

    /// Returns the hotel repository.
    pub fn hotels(&self) -> HotelRepository {
        HotelRepository::new(self.config.hotels_path.clone())
    }

    /// Returns the reservation repository, wired to the customer and hotel
    /// documents of the same configuration.
    pub fn reservations(&self) -> ReservationRepository {
        ReservationRepository::new(
            self.config.reservations_path.clone(),
            self.customers(),
            self.hotels(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::default();
        assert_eq!(config.customers_path, PathBuf::from("data/customers.json"));
        assert_eq!(config.hotels_path, PathBuf::from("data/hotels.json"));
        assert_eq!(
            config.reservations_path,
            PathBuf::from("data/reservations.json")
        );
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::in_dir("/srv/hotel").reservations_path("/tmp/r.json");

        assert_eq!(
            config.customers_path,
            PathBuf::from("/srv/hotel/customers.json")
        );
        assert_eq!(config.reservations_path, PathBuf::from("/tmp/r.json"));
    }

    #[test]
    fn test_booking_scenario() {
        let dir = TempDir::new().unwrap();
        let stores = Stores::new(StoreConfig::in_dir(dir.path()));

        stores
            .hotels()
            .create(1, "Test Hotel", "Test Location", 10)
            .unwrap();
        stores
            .customers()
            .create(1, "Victor", "victor@tec.mx")
            .unwrap();
        stores.reservations().create(1, 1, 1).unwrap();

        let reservations = stores.reservations().list().unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].customer_id, 1);
        let customer = stores.customers().get(1).unwrap().unwrap();
        assert_eq!(customer.reservation_id, Some(1));
        assert!(customer.has_reservation);

        stores.reservations().cancel(1).unwrap();

        assert!(stores.reservations().list().unwrap().is_empty());
        let customer = stores.customers().get(1).unwrap().unwrap();
        assert_eq!(customer.reservation_id, None);
        assert!(!customer.has_reservation);
    }

    #[test]
    fn test_save_load_fixed_point_for_every_store() {
        let dir = TempDir::new().unwrap();
        let stores = Stores::new(StoreConfig::in_dir(dir.path()));
        stores.hotels().create(2, "B", "Y", 3).unwrap();
        stores.hotels().create(1, "A", "X", 5).unwrap();
        stores.customers().create(1, "Victor", "victor@tec.mx").unwrap();
        stores.reservations().create(9, 1, 2).unwrap();

        let hotels = stores.hotels().load().unwrap();
        stores.hotels().save(&hotels).unwrap();
        assert_eq!(stores.hotels().load().unwrap(), hotels);

        let customers = stores.customers().load().unwrap();
        stores.customers().save(&customers).unwrap();
        assert_eq!(stores.customers().load().unwrap(), customers);

        let reservations = stores.reservations().load().unwrap();
        stores.reservations().save(&reservations).unwrap();
        assert_eq!(stores.reservations().load().unwrap(), reservations);
    }
}
