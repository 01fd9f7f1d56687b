//! Contact Book - demo entry point
//!
//! Builds a small address book, reports how far away each birthday is and
//! walks the book in configured batch sizes.

use anyhow::Result;
use chrono::Local;
use contact_book::{AddressBook, Birthday, Config, Name, Phone, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn sample_book() -> Result<AddressBook> {
    let mut book = AddressBook::new();

    book.add_record(
        Record::new(Name::new("Білл")?)
            .with_phone(Phone::from_number("1234567890")?)
            .with_birthday(Birthday::parse("1990-08-14")?),
    );

    let mut phone = Phone::from_number("380501234567")?;
    phone.add_number("380671234567")?;
    book.add_record(
        Record::new(Name::new("Olena")?)
            .with_phone(phone)
            .with_birthday(Birthday::parse("1988-02-29")?),
    );

    book.add_record(Record::new(Name::new("Taras")?).with_phone(Phone::from_number("0441234567")?));

    Ok(book)
}

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can set the default filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = sample_book()?;
    let today = Local::now().date_naive();
    info!(records = book.len(), %today, "Address book ready");

    for record in &book {
        match record.days_to_next_birthday_with(today, config.leap_day_policy) {
            Some(days) => info!("{}: {} day(s) to birthday", record.name(), days),
            None => info!("{}: no birthday on record", record.name()),
        }
    }

    for (number, batch) in book.batches(config.batch_size)?.enumerate() {
        let names: Vec<&str> = batch.iter().map(|r| r.name().as_str()).collect();
        info!("Batch {}: {}", number + 1, names.join(", "));
    }

    for (record, days) in book.upcoming_birthdays(today, config.upcoming_days, config.leap_day_policy)
    {
        info!("Upcoming: {} in {} day(s)", record.name(), days);
    }

    Ok(())
}
