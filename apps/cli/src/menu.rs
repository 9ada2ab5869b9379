//! # Interactive Menu
//!
//! Numbered console menus over the three stores.
//!
//! ## Menu Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Select an entity:                                                  │
//! │  ├── 1. Hotel        create / delete / display / modify /           │
//! │  │                   reserve a room / cancel a room / back          │
//! │  ├── 2. Customer     create / delete / display / modify / back      │
//! │  ├── 3. Reservation  create / cancel / back                         │
//! │  └── 4. Exit                                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are printed as `Error: ...` and the menu keeps going.
//! End of input leaves the menu as if Exit had been chosen.

use std::io::{self, BufRead, Write};

use hotel_core::validation::validate_email;
use hotel_store::{RoomCancellation, StoreError, Stores};
use tracing::debug;

use crate::write_json_lines;

/// What can stop a single menu action.
#[derive(Debug, thiserror::Error)]
enum ActionError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

type ActionResult = Result<(), ActionError>;

/// Console menu reading from `input` and writing to `output`.
///
/// ## Example
/// ```rust,no_run
/// use hotel_cli::Menu;
/// use hotel_store::{StoreConfig, Stores};
///
/// let stores = Stores::new(StoreConfig::default());
/// let stdin = std::io::stdin();
/// Menu::new(&stores, stdin.lock(), std::io::stdout()).run()?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Menu<'a, R, W> {
    stores: &'a Stores,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(stores: &'a Stores, input: R, output: W) -> Self {
        Menu {
            stores,
            input,
            output,
        }
    }

    /// Runs the main menu until Exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Hotel Reservation System")?;

        match self.main_menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Input closed, leaving menu");
                writeln!(self.output, "Exiting...")?;
                Ok(())
            }
            other => other,
        }
    }

    // =========================================================================
    // Menus
    // =========================================================================

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nSelect an entity:")?;
            writeln!(self.output, "1. Hotel")?;
            writeln!(self.output, "2. Customer")?;
            writeln!(self.output, "3. Reservation")?;
            writeln!(self.output, "4. Exit")?;

            match self.prompt("Enter your choice: ")?.as_str() {
                "1" => self.hotel_menu()?,
                "2" => self.customer_menu()?,
                "3" => self.reservation_menu()?,
                "4" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => self.invalid_option()?,
            }
        }
    }

    fn hotel_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nHotel Menu:")?;
            writeln!(self.output, "1. Create Hotel")?;
            writeln!(self.output, "2. Delete Hotel")?;
            writeln!(self.output, "3. Display Hotels")?;
            writeln!(self.output, "4. Modify Hotel Information")?;
            writeln!(self.output, "5. Reserve a Room")?;
            writeln!(self.output, "6. Cancel a Reservation")?;
            writeln!(self.output, "7. Back to Main Menu")?;

            let result = match self.prompt("Enter your choice: ")?.as_str() {
                "1" => self.create_hotel(),
                "2" => self.delete_hotel(),
                "3" => self.display_hotels(),
                "4" => self.modify_hotel(),
                "5" => self.reserve_room(),
                "6" => self.cancel_room(),
                "7" => return Ok(()),
                _ => self.invalid_option().map_err(ActionError::from),
            };
            self.finish(result)?;
        }
    }

    fn customer_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nCustomer Menu:")?;
            writeln!(self.output, "1. Create Customer")?;
            writeln!(self.output, "2. Delete Customer")?;
            writeln!(self.output, "3. Display Customers")?;
            writeln!(self.output, "4. Modify Customer Information")?;
            writeln!(self.output, "5. Back to Main Menu")?;

            let result = match self.prompt("Enter your choice: ")?.as_str() {
                "1" => self.create_customer(),
                "2" => self.delete_customer(),
                "3" => self.display_customers(),
                "4" => self.modify_customer(),
                "5" => return Ok(()),
                _ => self.invalid_option().map_err(ActionError::from),
            };
            self.finish(result)?;
        }
    }

    fn reservation_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nReservation Menu:")?;
            writeln!(self.output, "1. Create Reservation")?;
            writeln!(self.output, "2. Cancel Reservation")?;
            writeln!(self.output, "3. Back to Main Menu")?;

            let result = match self.prompt("Enter your choice: ")?.as_str() {
                "1" => self.create_reservation(),
                "2" => self.cancel_reservation(),
                "3" => return Ok(()),
                _ => self.invalid_option().map_err(ActionError::from),
            };
            self.finish(result)?;
        }
    }

    // =========================================================================
    // Hotel Actions
    // =========================================================================

    fn create_hotel(&mut self) -> ActionResult {
        let hotels = self.stores.hotels();
        let hotel_id = self.prompt_i64("Enter Hotel ID: ")?;
        if hotels.exists(hotel_id)? {
            writeln!(self.output, "Error: Hotel ID already exists.")?;
            return Ok(());
        }

        let name = self.prompt("Enter Hotel Name: ")?;
        let location = self.prompt("Enter Location: ")?;
        let rooms = self.prompt_i64("Enter Number of Rooms: ")?;

        hotels.create(hotel_id, &name, &location, rooms)?;
        writeln!(self.output, "Hotel created successfully.")?;
        Ok(())
    }

    fn delete_hotel(&mut self) -> ActionResult {
        let hotel_id = self.prompt_i64("Enter Hotel ID to delete: ")?;
        if self.stores.hotels().delete(hotel_id)? {
            writeln!(self.output, "Hotel deleted successfully.")?;
        } else {
            writeln!(self.output, "Hotel not found.")?;
        }
        Ok(())
    }

    fn display_hotels(&mut self) -> ActionResult {
        let hotels = self.stores.hotels().list()?;
        write_json_lines(&mut self.output, &hotels)?;
        Ok(())
    }

    fn modify_hotel(&mut self) -> ActionResult {
        let hotel_id = self.prompt_i64("Enter Hotel ID to modify: ")?;
        let name = self.prompt("Enter new Hotel Name: ")?;
        let location = self.prompt("Enter new Location: ")?;
        let rooms = self.prompt_i64("Enter new Number of Rooms: ")?;

        if self.stores.hotels().modify(hotel_id, &name, &location, rooms)? {
            writeln!(self.output, "Hotel modified successfully.")?;
        } else {
            writeln!(self.output, "Hotel not found.")?;
        }
        Ok(())
    }

    fn reserve_room(&mut self) -> ActionResult {
        let hotel_id = self.prompt_i64("Enter Hotel ID to reserve a room: ")?;
        let hotel = self.stores.hotels().reserve_room(hotel_id)?;
        writeln!(
            self.output,
            "Room reserved at {} ({} available).",
            hotel.name, hotel.available_rooms
        )?;
        Ok(())
    }

    fn cancel_room(&mut self) -> ActionResult {
        let hotels = self.stores.hotels();
        let hotel_id = self.prompt_i64("Enter Hotel ID to cancel a reservation: ")?;

        match hotels.cancel_reservation(hotel_id)? {
            RoomCancellation::Released => {
                let name = hotels
                    .get(hotel_id)?
                    .map(|h| h.name)
                    .unwrap_or_else(|| hotel_id.to_string());
                writeln!(self.output, "Reservation canceled at {}.", name)?;
            }
            RoomCancellation::NothingToCancel => {
                writeln!(self.output, "No reservations to cancel.")?;
            }
            RoomCancellation::HotelNotFound => {
                writeln!(self.output, "Hotel not found.")?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Customer Actions
    // =========================================================================

    fn create_customer(&mut self) -> ActionResult {
        let customers = self.stores.customers();
        let customer_id = self.prompt_i64("Enter Customer ID: ")?;
        if customers.exists(customer_id)? {
            writeln!(self.output, "Error: Customer ID already exists.")?;
            return Ok(());
        }

        let name = self.prompt("Enter Customer Name: ")?;
        let email = loop {
            let email = self.prompt("Enter Email: ")?;
            if validate_email(&email).is_ok() {
                break email;
            }
            writeln!(
                self.output,
                "Error: Invalid email format. Please enter a valid one."
            )?;
        };

        customers.create(customer_id, &name, &email)?;
        writeln!(self.output, "Customer created successfully.")?;
        Ok(())
    }

    fn delete_customer(&mut self) -> ActionResult {
        let customer_id = self.prompt_i64("Enter Customer ID to delete: ")?;
        if self.stores.customers().delete(customer_id)? {
            writeln!(self.output, "Customer deleted successfully.")?;
        } else {
            writeln!(self.output, "Customer not found.")?;
        }
        Ok(())
    }

    fn display_customers(&mut self) -> ActionResult {
        let customers = self.stores.customers().list()?;
        write_json_lines(&mut self.output, &customers)?;
        Ok(())
    }

    fn modify_customer(&mut self) -> ActionResult {
        let customers = self.stores.customers();
        let customer_id = self.prompt_i64("Enter Customer ID to modify: ")?;
        let name = self.prompt("Enter new Customer Name: ")?;
        let email = self.prompt("Enter new Email: ")?;

        // Contact edits only. The current pointer is passed back explicitly,
        // since `modify` with `None` would detach the customer's booking.
        let reservation_id = customers
            .get(customer_id)?
            .and_then(|c| c.reservation_id);

        if customers.modify(customer_id, &name, &email, reservation_id)? {
            writeln!(self.output, "Customer modified successfully.")?;
        } else {
            writeln!(self.output, "Customer not found.")?;
        }
        Ok(())
    }

    // =========================================================================
    // Reservation Actions
    // =========================================================================

    fn create_reservation(&mut self) -> ActionResult {
        let reservations = self.stores.reservations();
        let reservation_id = self.prompt_i64("Enter Reservation ID: ")?;
        if reservations.get(reservation_id)?.is_some() {
            writeln!(self.output, "Error: Reservation ID already exists.")?;
            return Ok(());
        }

        let customer_id = self.prompt_i64("Enter Customer ID: ")?;
        let hotel_id = self.prompt_i64("Enter Hotel ID: ")?;

        reservations.create(reservation_id, customer_id, hotel_id)?;
        writeln!(self.output, "Reservation created successfully.")?;
        Ok(())
    }

    fn cancel_reservation(&mut self) -> ActionResult {
        let reservation_id = self.prompt_i64("Enter Reservation ID to cancel: ")?;
        if self.stores.reservations().cancel(reservation_id)? {
            writeln!(self.output, "Reservation canceled successfully.")?;
        } else {
            writeln!(self.output, "Reservation not found.")?;
        }
        Ok(())
    }

    // =========================================================================
    // Input Helpers
    // =========================================================================

    /// Prints `label` and reads one trimmed line.
    ///
    /// End of input is reported as `UnexpectedEof`.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as an integer.
    fn prompt_i64(&mut self, label: &str) -> io::Result<i64> {
        loop {
            let answer = self.prompt(label)?;
            match answer.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Error: Please enter a whole number.")?,
            }
        }
    }

    fn invalid_option(&mut self) -> io::Result<()> {
        writeln!(self.output, "Invalid option, please try again.")
    }

    /// Prints store failures and keeps going; I/O failures end the menu.
    fn finish(&mut self, result: ActionResult) -> io::Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(ActionError::Store(e)) => {
                debug!(error = %e, kind = ?e.kind(), "Menu action failed");
                writeln!(self.output, "Error: {}", e)
            }
            Err(ActionError::Io(e)) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_store::StoreConfig;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn stores(dir: &TempDir) -> Stores {
        Stores::new(StoreConfig::in_dir(dir.path()))
    }

    /// Feeds `script` to a fresh menu and returns everything it printed.
    fn drive(stores: &Stores, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(stores, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let dir = TempDir::new().unwrap();
        let out = drive(&stores(&dir), "4\n");

        assert!(out.starts_with("Welcome to the Hotel Reservation System"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let dir = TempDir::new().unwrap();
        let out = drive(&stores(&dir), "1\n1\n7");

        assert!(out.ends_with("Exiting...\n"));
        assert!(stores(&dir).hotels().list().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_option() {
        let dir = TempDir::new().unwrap();
        let out = drive(&stores(&dir), "9\n4\n");
        assert!(out.contains("Invalid option, please try again."));
    }

    #[test]
    fn test_create_and_display_hotel() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);

        let out = drive(&stores, "1\n1\n1\nTest Hotel\nTest Location\n10\n3\n7\n4\n");

        assert!(out.contains("Hotel created successfully."));
        assert!(out.contains(r#""name":"Test Hotel""#));
        assert_eq!(stores.hotels().get(1).unwrap().unwrap().available_rooms, 10);
    }

    #[test]
    fn test_duplicate_hotel_id_checked_before_fields() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);
        stores.hotels().create(1, "Test Hotel", "Test City", 10).unwrap();

        // Only the id is read; the next line is taken as a menu choice.
        let out = drive(&stores, "1\n1\n1\n7\n4\n");

        assert!(out.contains("Error: Hotel ID already exists."));
        assert_eq!(stores.hotels().list().unwrap().len(), 1);
    }

    #[test]
    fn test_non_integer_input_reprompts() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);

        let out = drive(&stores, "1\n1\nabc\n2\nSmall\nCity\nfive\n5\n7\n4\n");

        assert!(out.contains("Error: Please enter a whole number."));
        assert_eq!(stores.hotels().get(2).unwrap().unwrap().rooms, 5);
    }

    #[test]
    fn test_store_error_is_printed_and_menu_continues() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);

        let out = drive(&stores, "1\n1\n1\nBad\nCity\n-5\n5\n42\n7\n4\n");

        assert!(out.contains("Error: Validation error: rooms is invalid"));
        assert!(out.contains("Error: Hotel not found: 42"));
        assert!(out.ends_with("Exiting...\n"));
        assert!(stores.hotels().list().unwrap().is_empty());
    }

    #[test]
    fn test_reserve_and_cancel_room() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);
        stores.hotels().create(1, "Test Hotel", "Test City", 2).unwrap();

        let out = drive(&stores, "1\n5\n1\n6\n1\n6\n1\n7\n4\n");

        assert!(out.contains("Room reserved at Test Hotel (1 available)."));
        assert!(out.contains("Reservation canceled at Test Hotel."));
        assert!(out.contains("No reservations to cancel."));
        assert_eq!(stores.hotels().get(1).unwrap().unwrap().available_rooms, 2);
    }

    #[test]
    fn test_customer_email_reprompt() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);

        let out = drive(&stores, "2\n1\n1\nVictor\nvictor\nvictor@tec.mx\n5\n4\n");

        assert!(out.contains("Error: Invalid email format. Please enter a valid one."));
        let customer = stores.customers().get(1).unwrap().unwrap();
        assert_eq!(customer.email, "victor@tec.mx");
    }

    #[test]
    fn test_modify_customer_keeps_reservation() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);
        stores.hotels().create(1, "Test Hotel", "Test City", 10).unwrap();
        stores.customers().create(1, "Victor", "victor@tec.mx").unwrap();
        stores.reservations().create(1, 1, 1).unwrap();

        drive(&stores, "2\n4\n1\nHugo\nhugo@tec.mx\n5\n4\n");

        let customer = stores.customers().get(1).unwrap().unwrap();
        assert_eq!(customer.name, "Hugo");
        assert_eq!(customer.reservation_id, Some(1));
        assert!(customer.has_reservation);
    }

    #[test]
    fn test_reservation_flow() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);
        stores.hotels().create(1, "Test Hotel", "Test City", 10).unwrap();
        stores.customers().create(1, "Victor", "victor@tec.mx").unwrap();

        let out = drive(&stores, "3\n1\n1\n1\n1\n3\n4\n");
        assert!(out.contains("Reservation created successfully."));
        assert_eq!(stores.reservations().list().unwrap().len(), 1);

        let out = drive(&stores, "3\n1\n1\n2\n1\n3\n4\n");
        assert!(out.contains("Error: Reservation ID already exists."));
        assert!(out.contains("Reservation canceled successfully."));
        assert!(stores.reservations().list().unwrap().is_empty());
        assert_eq!(stores.customers().get(1).unwrap().unwrap().reservation_id, None);
    }

    #[test]
    fn test_reservation_for_unknown_customer() {
        let dir = TempDir::new().unwrap();
        let stores = stores(&dir);
        stores.hotels().create(1, "Test Hotel", "Test City", 10).unwrap();

        let out = drive(&stores, "3\n1\n1\n99\n1\n3\n4\n");

        assert!(out.contains("Error: Customer ID 99 does not exist"));
        assert!(stores.reservations().list().unwrap().is_empty());
    }
}
