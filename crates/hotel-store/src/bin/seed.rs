//! # Seed Data Generator
//!
//! Populates the documents with sample hotels and customers for development.
//!
//! ## Usage
//! ```bash
//! # 10 hotels, 25 customers into ./data (defaults)
//! cargo run -p hotel-store --bin seed
//!
//! # Custom amounts and location
//! cargo run -p hotel-store --bin seed -- --hotels 40 --customers 200 --data-dir /tmp/hotel
//! ```
//!
//! Ids start at 1. Ids that already exist are skipped, so running the seed
//! twice leaves the documents unchanged.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hotel_store::{ErrorKind, StoreConfig, Stores};
use tracing_subscriber::EnvFilter;

/// Cities used for hotel locations.
const CITIES: &[&str] = &[
    "Monterrey",
    "Guadalajara",
    "Mexico City",
    "Puebla",
    "Queretaro",
    "Merida",
    "Oaxaca",
    "Cancun",
];

/// Hotel name stems.
const HOTEL_NAMES: &[&str] = &[
    "Grand Plaza",
    "Casa Azul",
    "Hotel del Centro",
    "Vista Hermosa",
    "Posada Real",
    "Mision",
    "Camino Real",
    "Hacienda Los Arcos",
];

/// Customer first names.
const FIRST_NAMES: &[&str] = &[
    "Victor", "Hugo", "Ana", "Lucia", "Jorge", "Sofia", "Diego", "Paula", "Mateo", "Elena",
];

/// Customer last names.
const LAST_NAMES: &[&str] = &[
    "Vazquez", "Herrera", "Garcia", "Lopez", "Martinez", "Hernandez", "Torres", "Ramirez",
];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Hotel reservations seed data generator")]
struct Args {
    /// Number of hotels to generate
    #[arg(long, default_value_t = 10)]
    hotels: u32,

    /// Number of customers to generate
    #[arg(long, default_value_t = 25)]
    customers: u32,

    /// Directory holding the JSON documents
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("🌱 Hotel Reservations Seed Data Generator");
    println!("=========================================");
    println!("Data dir:  {}", args.data_dir.display());
    println!("Hotels:    {}", args.hotels);
    println!("Customers: {}", args.customers);
    println!();

    let stores = Stores::new(StoreConfig::in_dir(&args.data_dir));

    let hotels = stores.hotels();
    let mut created = 0u32;
    for id in 1..=i64::from(args.hotels) {
        let (name, location, rooms) = generate_hotel(id);
        match hotels.create(id, &name, location, rooms) {
            Ok(_) => created += 1,
            Err(e) if e.kind() == ErrorKind::DuplicateKey => {}
            Err(e) => return Err(e.into()),
        }
    }
    println!("✓ Created {} hotels ({} skipped)", created, args.hotels - created);

    let customers = stores.customers();
    let mut created = 0u32;
    for id in 1..=i64::from(args.customers) {
        let (name, email) = generate_customer(id);
        match customers.create(id, &name, &email) {
            Ok(_) => created += 1,
            Err(e) if e.kind() == ErrorKind::DuplicateKey => {}
            Err(e) => return Err(e.into()),
        }
    }
    println!(
        "✓ Created {} customers ({} skipped)",
        created,
        args.customers - created
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates name, location and room count for a hotel id.
fn generate_hotel(id: i64) -> (String, &'static str, i64) {
    let seed = id as usize;
    let name = format!("{} {}", HOTEL_NAMES[seed % HOTEL_NAMES.len()], id);
    let location = CITIES[(seed * 3) % CITIES.len()];

    // 5 - 120 rooms
    let rooms = 5 + ((seed * 37) % 116) as i64;

    (name, location, rooms)
}

/// Generates name and email for a customer id.
fn generate_customer(id: i64) -> (String, String) {
    let seed = id as usize;
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed * 7) % LAST_NAMES.len()];

    let name = format!("{} {}", first, last);
    let email = format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        id
    );

    (name, email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_counts_rejected() {
        assert!(Args::try_parse_from(["seed", "--hotels", "-5"]).is_err());
        assert!(Args::try_parse_from(["seed", "--customers", "-1"]).is_err());
    }

    #[test]
    fn test_default_counts() {
        let args = Args::try_parse_from(["seed"]).unwrap();
        assert_eq!(args.hotels, 10);
        assert_eq!(args.customers, 25);
        assert_eq!(args.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_generated_records_are_valid() {
        let (_, _, rooms) = generate_hotel(3);
        assert!((5..=120).contains(&rooms));

        let (_, email) = generate_customer(3);
        assert!(hotel_core::validation::validate_email(&email).is_ok());
    }
}
