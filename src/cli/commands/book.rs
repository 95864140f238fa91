//! Book command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::LedigError;
use crate::schedule::{BookingReport, Schedule};
use anyhow::Result;

/// Run the book command.
pub fn run_book(
    date: &str,
    start_time: &str,
    end_time: &str,
    reservation_name: &str,
    settings: Settings,
) -> Result<()> {
    if reservation_name.trim().is_empty() {
        return Err(LedigError::InvalidInput("reservation name is empty".to_string()).into());
    }

    let mut schedule = Schedule::load(&settings.schedule)?;

    match schedule.book_slot(date, start_time, end_time, reservation_name) {
        BookingReport::Success { message } => {
            Output::success(&message);
            Output::info("Bookings live for the process lifetime; use 'ledig serve' or 'ledig mcp' to keep a calendar running.");
        }
        BookingReport::Error { message } => {
            Output::error(&message);
        }
    }

    Ok(())
}
