//! # Customer Repository
//!
//! File-backed operations for customers.
//!
//! ## Key Operations
//! - Create with email validation and key uniqueness
//! - Idempotent delete
//! - Modify including the reservation pointer

use std::path::PathBuf;

use hotel_core::validation::validate_email;
use hotel_core::{Customer, CustomerId, ReservationId};
use tracing::{debug, info};

use crate::document::JsonDocument;
use crate::error::{StoreError, StoreResult};

/// Repository for customer records.
///
/// ## Usage
/// ```rust,no_run
/// use hotel_store::CustomerRepository;
///
/// let repo = CustomerRepository::new("data/customers.json");
/// repo.create(1, "Victor", "victor@tec.mx")?;
/// assert!(repo.exists(1)?);
/// # Ok::<(), hotel_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    document: JsonDocument<Customer>,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository over the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CustomerRepository {
            document: JsonDocument::new(path),
        }
    }

    /// Reads every customer.
    pub fn load(&self) -> StoreResult<Vec<Customer>> {
        self.document.load()
    }

    /// Overwrites the document with `customers`.
    pub fn save(&self, customers: &[Customer]) -> StoreResult<()> {
        self.document.save(customers)
    }

    /// Creates a customer without a reservation.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Stored record
    /// * `Err` with kind `InvalidFormat` - Email lacks `@` or `.`
    /// * `Err(StoreError::DuplicateKey)` - ID already taken
    ///
    /// Nothing is written on failure.
    pub fn create(&self, customer_id: CustomerId, name: &str, email: &str) -> StoreResult<Customer> {
        validate_email(email)?;

        let mut customers = self.load()?;
        if customers.iter().any(|c| c.customer_id == customer_id) {
            return Err(StoreError::duplicate("Customer", customer_id));
        }

        let customer = Customer::new(customer_id, name, email);
        customers.push(customer.clone());
        self.save(&customers)?;

        info!(customer_id, "Customer created");
        Ok(customer)
    }

    /// Deletes a customer. Returns whether a record was removed.
    ///
    /// Deleting an unknown ID is not an error and leaves the file alone.
    /// Reservations held by the customer are left in place.
    pub fn delete(&self, customer_id: CustomerId) -> StoreResult<bool> {
        let mut customers = self.load()?;
        let before = customers.len();
        customers.retain(|c| c.customer_id != customer_id);

        if customers.len() == before {
            debug!(customer_id, "Delete: customer not found");
            return Ok(false);
        }

        self.save(&customers)?;
        info!(customer_id, "Customer deleted");
        Ok(true)
    }

    /// Overwrites name, email and reservation pointer of a customer.
    ///
    /// `has_reservation` follows `reservation_id`. Returns whether the customer
    /// was found; an unknown ID is a silent no-op.
    pub fn modify(
        &self,
        customer_id: CustomerId,
        name: &str,
        email: &str,
        reservation_id: Option<ReservationId>,
    ) -> StoreResult<bool> {
        let mut customers = self.load()?;

        let Some(customer) = customers.iter_mut().find(|c| c.customer_id == customer_id) else {
            debug!(customer_id, "Modify: customer not found");
            return Ok(false);
        };

        customer.name = name.to_string();
        customer.email = email.to_string();
        customer.set_reservation(reservation_id);

        self.save(&customers)?;
        info!(customer_id, "Customer modified");
        Ok(true)
    }

    /// Returns every customer for display.
    pub fn list(&self) -> StoreResult<Vec<Customer>> {
        self.load()
    }

    /// Gets a customer by ID.
    pub fn get(&self, customer_id: CustomerId) -> StoreResult<Option<Customer>> {
        self.document.find(customer_id)
    }

    /// Returns true if a customer with this ID exists.
    pub fn exists(&self, customer_id: CustomerId) -> StoreResult<bool> {
        self.document.contains(customer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> CustomerRepository {
        CustomerRepository::new(dir.path().join("customers.json"))
    }

    #[test]
    fn test_create_customer() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.create(1, "Victor Vazquez", "victorvazquez@tec.mx")
            .unwrap();

        let customers = repo.load().unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].email, "victorvazquez@tec.mx");
        assert_eq!(customers[0].reservation_id, None);
        assert!(!customers[0].has_reservation);
    }

    #[test]
    fn test_create_customer_invalid_email() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victor@tec.mx").unwrap();

        let err = repo.create(2, "Hugo Herrera", "invalid-email").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_email_checked_before_duplicate() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victor@tec.mx").unwrap();

        let err = repo.create(1, "Victor", "no-at-sign.mx").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_create_duplicate_customer() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victorvazquez@tec.mx").unwrap();

        let err = repo.create(1, "Other", "other@tec.mx").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);

        let customers = repo.load().unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Victor");
    }

    #[test]
    fn test_delete_customer() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victor@tec.mx").unwrap();
        repo.create(2, "Hugo", "hugo@tec.mx").unwrap();

        assert!(repo.delete(1).unwrap());
        let customers = repo.load().unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].customer_id, 2);
    }

    #[test]
    fn test_delete_non_existent_customer() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victor@tec.mx").unwrap();

        assert!(!repo.delete(99).unwrap());
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_modify_customer_sets_reservation_flag() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victor@tec.mx").unwrap();

        assert!(repo.modify(1, "Victor V", "vv@tec.mx", Some(4)).unwrap());
        let customer = repo.get(1).unwrap().unwrap();
        assert_eq!(customer.name, "Victor V");
        assert_eq!(customer.email, "vv@tec.mx");
        assert_eq!(customer.reservation_id, Some(4));
        assert!(customer.has_reservation);

        assert!(repo.modify(1, "Victor V", "vv@tec.mx", None).unwrap());
        let customer = repo.get(1).unwrap().unwrap();
        assert_eq!(customer.reservation_id, None);
        assert!(!customer.has_reservation);
    }

    #[test]
    fn test_modify_non_existent_customer() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.create(1, "Victor", "victor@tec.mx").unwrap();
        let before = repo.load().unwrap();

        assert!(!repo.modify(99, "Updated Name", "updated@example.com", None).unwrap());
        assert_eq!(repo.load().unwrap(), before);
        assert!(!repo.exists(99).unwrap());
    }

    #[test]
    fn test_list_empty_store() {
        let dir = TempDir::new().unwrap();
        assert!(repo(&dir).list().unwrap().is_empty());
    }
}
