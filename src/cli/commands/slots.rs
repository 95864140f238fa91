//! Slots command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::schedule::{DayReport, Schedule};
use anyhow::Result;
use chrono::Local;

/// Run the slots command.
pub fn run_slots(date: Option<&str>, settings: Settings) -> Result<()> {
    let schedule = Schedule::load(&settings.schedule)?;

    // The calendar matches dates by exact key; "today" is only a CLI default
    let date = match date {
        Some(d) => d.to_string(),
        None => Local::now().format("%Y-%m-%d").to_string(),
    };

    match schedule.list_availabilities(&date) {
        DayReport::Success {
            available_slots,
            booked_slots,
            ..
        } => {
            Output::header(&format!("Availability for {}", date));
            println!();

            for slot in &available_slots {
                Output::free_slot(slot);
            }
            for (slot, occupant) in &booked_slots {
                Output::booked_slot(slot, occupant);
            }

            println!();
            Output::kv("Free", &available_slots.len().to_string());
            Output::kv("Booked", &booked_slots.len().to_string());
        }
        DayReport::Error { message } => {
            Output::warning(&message);
            let known = schedule.dates();
            if !known.is_empty() {
                Output::info(&format!("Known dates: {}", known.join(", ")));
            }
        }
    }

    Ok(())
}
