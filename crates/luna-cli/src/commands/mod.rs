pub mod config;
pub mod medication;
pub mod mood;
pub mod trend;

use chrono::{Local, NaiveDate};
use luna_core::tracking::parse_date;
use luna_core::{Config, Journal};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Journal for this invocation, seeded with sample data unless disabled.
pub fn session_journal(config: &Config, no_fixtures: bool) -> Journal {
    if config.journal.seed_fixtures && !no_fixtures {
        Journal::with_fixtures()
    } else {
        Journal::new()
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `--date` argument, defaulting to today.
pub fn date_arg(raw: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match raw {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today()),
    }
}
