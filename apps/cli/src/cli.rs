//! # Command Definitions
//!
//! clap derive types for `hotel-cli` and the dispatcher that runs them.
//!
//! ## Commands
//! ```text
//! hotel-cli [--config <path>] [--data-dir <dir>] [COMMAND]
//!
//!   menu                                  interactive menu (default)
//!   hotel create --id --name --location --rooms
//!   hotel delete --id
//!   hotel list
//!   hotel modify --id --name --location --rooms
//!   hotel reserve --id
//!   hotel cancel --id
//!   customer create --id --name --email
//!   customer delete --id
//!   customer list
//!   customer modify --id --name --email [--reservation-id]
//!   reservation create --id --customer-id --hotel-id
//!   reservation cancel --id
//!   reservation list
//! ```
//!
//! Successful mutations print the stored record as JSON; `list` prints one
//! record per line. Store errors are returned to `main`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hotel_core::{CustomerId, HotelId, ReservationId};
use hotel_store::{RoomCancellation, Stores};

use crate::menu::Menu;
use crate::write_json_lines;

#[derive(Debug, Parser)]
#[command(
    name = "hotel-cli",
    about = "Hotel, customer and reservation records kept in JSON files",
    version
)]
pub struct Cli {
    /// Config file (default: hotel.toml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the JSON documents; overrides every configured path
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu
    Menu,

    /// Manage hotels
    #[command(subcommand)]
    Hotel(HotelCommand),

    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Manage reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),
}

#[derive(Debug, Subcommand)]
pub enum HotelCommand {
    /// Create a hotel with every room available
    Create {
        #[arg(long)]
        id: HotelId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long, allow_negative_numbers = true)]
        rooms: i64,
    },

    /// Delete a hotel
    Delete {
        #[arg(long)]
        id: HotelId,
    },

    /// Print every hotel
    List,

    /// Overwrite a hotel and reset its availability
    Modify {
        #[arg(long)]
        id: HotelId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long, allow_negative_numbers = true)]
        rooms: i64,
    },

    /// Take one room
    Reserve {
        #[arg(long)]
        id: HotelId,
    },

    /// Return one room
    Cancel {
        #[arg(long)]
        id: HotelId,
    },
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Create a customer
    Create {
        #[arg(long)]
        id: CustomerId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },

    /// Delete a customer
    Delete {
        #[arg(long)]
        id: CustomerId,
    },

    /// Print every customer
    List,

    /// Overwrite a customer's name and email
    Modify {
        #[arg(long)]
        id: CustomerId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// New reservation pointer (kept as is when omitted)
        #[arg(long)]
        reservation_id: Option<ReservationId>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReservationCommand {
    /// Book a customer into a hotel
    Create {
        #[arg(long)]
        id: ReservationId,
        #[arg(long)]
        customer_id: CustomerId,
        #[arg(long)]
        hotel_id: HotelId,
    },

    /// Cancel a reservation and clear the customer's pointer
    Cancel {
        #[arg(long)]
        id: ReservationId,
    },

    /// Print every reservation
    List,
}

/// Runs one command against `stores`.
///
/// `input` is only read by the interactive menu.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    stores: &Stores,
    input: R,
    mut out: W,
) -> Result<()> {
    match command {
        Command::Menu => Menu::new(stores, input, out).run()?,
        Command::Hotel(cmd) => execute_hotel(cmd, stores, &mut out)?,
        Command::Customer(cmd) => execute_customer(cmd, stores, &mut out)?,
        Command::Reservation(cmd) => execute_reservation(cmd, stores, &mut out)?,
    }
    Ok(())
}

fn execute_hotel(cmd: HotelCommand, stores: &Stores, out: &mut impl Write) -> Result<()> {
    let hotels = stores.hotels();

    match cmd {
        HotelCommand::Create {
            id,
            name,
            location,
            rooms,
        } => {
            let hotel = hotels.create(id, &name, &location, rooms)?;
            write_json_lines(out, &[hotel])?;
        }
        HotelCommand::Delete { id } => {
            report(out, hotels.delete(id)?, "Hotel", id, "deleted")?;
        }
        HotelCommand::List => write_json_lines(out, &hotels.list()?)?,
        HotelCommand::Modify {
            id,
            name,
            location,
            rooms,
        } => {
            report(
                out,
                hotels.modify(id, &name, &location, rooms)?,
                "Hotel",
                id,
                "modified",
            )?;
        }
        HotelCommand::Reserve { id } => {
            let hotel = hotels.reserve_room(id)?;
            write_json_lines(out, &[hotel])?;
        }
        HotelCommand::Cancel { id } => match hotels.cancel_reservation(id)? {
            RoomCancellation::Released => {
                if let Some(hotel) = hotels.get(id)? {
                    write_json_lines(out, &[hotel])?;
                }
            }
            RoomCancellation::NothingToCancel => writeln!(out, "No reservations to cancel.")?,
            RoomCancellation::HotelNotFound => writeln!(out, "Hotel {} not found.", id)?,
        },
    }
    Ok(())
}

fn execute_customer(cmd: CustomerCommand, stores: &Stores, out: &mut impl Write) -> Result<()> {
    let customers = stores.customers();

    match cmd {
        CustomerCommand::Create { id, name, email } => {
            let customer = customers.create(id, &name, &email)?;
            write_json_lines(out, &[customer])?;
        }
        CustomerCommand::Delete { id } => {
            report(out, customers.delete(id)?, "Customer", id, "deleted")?;
        }
        CustomerCommand::List => write_json_lines(out, &customers.list()?)?,
        CustomerCommand::Modify {
            id,
            name,
            email,
            reservation_id,
        } => {
            let reservation_id = match reservation_id {
                Some(rid) => Some(rid),
                None => customers.get(id)?.and_then(|c| c.reservation_id),
            };
            report(
                out,
                customers.modify(id, &name, &email, reservation_id)?,
                "Customer",
                id,
                "modified",
            )?;
        }
    }
    Ok(())
}

fn execute_reservation(
    cmd: ReservationCommand,
    stores: &Stores,
    out: &mut impl Write,
) -> Result<()> {
    let reservations = stores.reservations();

    match cmd {
        ReservationCommand::Create {
            id,
            customer_id,
            hotel_id,
        } => {
            let reservation = reservations.create(id, customer_id, hotel_id)?;
            write_json_lines(out, &[reservation])?;
        }
        ReservationCommand::Cancel { id } => {
            report(out, reservations.cancel(id)?, "Reservation", id, "canceled")?;
        }
        ReservationCommand::List => write_json_lines(out, &reservations.list()?)?,
    }
    Ok(())
}

/// One-line outcome for delete, modify and cancel.
fn report(
    out: &mut impl Write,
    found: bool,
    entity: &str,
    id: i64,
    action: &str,
) -> std::io::Result<()> {
    if found {
        writeln!(out, "{} {} {}.", entity, id, action)
    } else {
        writeln!(out, "{} {} not found.", entity, id)
    }
}
