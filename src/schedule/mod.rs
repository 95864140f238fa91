//! The availability store for Ledig.
//!
//! Holds a booking calendar in memory: dates mapped to hourly slots, each
//! slot either free or occupied by a named reservation. Exposes exactly two
//! operations, [`Schedule::list_availabilities`] and [`Schedule::book_slot`],
//! which every tool surface (agent, MCP, HTTP, CLI) calls through.
//!
//! Both operations report their outcome as a tagged `success`/`error` value
//! rather than a Rust error: an unknown date or an occupied slot is a normal
//! answer for a caller relaying results to a language model, not a fault.

mod memory;

pub use memory::MemoryScheduleStore;

use crate::config::ScheduleSettings;
use crate::error::{LedigError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The booked/free state of a single slot.
///
/// Serialized as `null` (free) or the occupant string, so no occupant name
/// can ever collide with a "free" sentinel. An occupant literally called
/// `"busy"` is just a reservation like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Occupancy {
    /// The slot has never been booked.
    Free,
    /// The slot is held under an opaque reservation label.
    Occupied(String),
}

impl From<Option<String>> for Occupancy {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Occupancy::Free,
            Some(name) => Occupancy::Occupied(name),
        }
    }
}

impl From<Occupancy> for Option<String> {
    fn from(value: Occupancy) -> Self {
        match value {
            Occupancy::Free => None,
            Occupancy::Occupied(name) => Some(name),
        }
    }
}

/// One day of the calendar: hour strings (`"08:00"`) mapped to occupancy.
///
/// `BTreeMap` keeps iteration deterministic; wall-clock hour strings sort
/// chronologically, so output order follows the day.
pub type Day = BTreeMap<String, Occupancy>;

/// Outcome of an availability query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DayReport {
    Success {
        message: String,
        available_slots: Vec<String>,
        booked_slots: BTreeMap<String, String>,
    },
    Error {
        message: String,
    },
}

impl DayReport {
    /// Whether the query found a known date.
    pub fn is_success(&self) -> bool {
        matches!(self, DayReport::Success { .. })
    }

    /// Human-readable message for either outcome.
    pub fn message(&self) -> &str {
        match self {
            DayReport::Success { message, .. } | DayReport::Error { message } => message,
        }
    }

    /// Free slot keys, empty on error.
    pub fn available_slots(&self) -> &[String] {
        match self {
            DayReport::Success {
                available_slots, ..
            } => available_slots,
            DayReport::Error { .. } => &[],
        }
    }

    /// Booked slot keys with their occupants; `None` on error.
    pub fn booked_slots(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            DayReport::Success { booked_slots, .. } => Some(booked_slots),
            DayReport::Error { .. } => None,
        }
    }
}

/// Outcome of a booking attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BookingReport {
    Success { message: String },
    Error { message: String },
}

impl BookingReport {
    /// Whether the slot was booked.
    pub fn is_success(&self) -> bool {
        matches!(self, BookingReport::Success { .. })
    }

    /// Human-readable message for either outcome.
    pub fn message(&self) -> &str {
        match self {
            BookingReport::Success { message } | BookingReport::Error { message } => message,
        }
    }
}

/// The booking calendar: dates mapped to days.
///
/// Built once at startup and mutated in place only by [`Schedule::book_slot`].
/// There is no ambient global instance; callers own their schedule (usually
/// behind a [`MemoryScheduleStore`]) so tests can build independent ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<String, Day>,
}

impl Schedule {
    /// Build a schedule from explicit days.
    ///
    /// Every date must carry at least one slot; a dateless calendar entry
    /// would make `list_availabilities` claim a day exists with nothing in it.
    pub fn from_days(days: BTreeMap<String, Day>) -> Result<Self> {
        for (date, day) in &days {
            if day.is_empty() {
                return Err(LedigError::Seed(format!("date {} has no slots", date)));
            }
        }
        Ok(Self { days })
    }

    /// Parse a schedule from a JSON seed document.
    ///
    /// The format maps dates to `{time: occupant-or-null}`:
    ///
    /// ```json
    /// {"2025-11-10": {"08:00": null, "09:00": "Alice"}}
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let days: BTreeMap<String, Day> = serde_json::from_str(json)?;
        Self::from_days(days)
    }

    /// Build the store from settings: the configured seed file if one is
    /// set, the built-in demo calendar otherwise.
    pub fn load(settings: &ScheduleSettings) -> Result<Self> {
        match &settings.seed_path {
            Some(path) => {
                let expanded = crate::config::Settings::expand_path(path);
                let content = std::fs::read_to_string(&expanded).map_err(|e| {
                    LedigError::Seed(format!("cannot read {}: {}", expanded.display(), e))
                })?;
                Self::from_json_str(&content)
            }
            None => Ok(Self::demo()),
        }
    }

    /// The built-in demo calendar: three November dates, one slot pre-booked.
    ///
    /// Stand-in for a real scheduling backend.
    pub fn demo() -> Self {
        let mut days = BTreeMap::new();

        days.insert("2025-11-10".to_string(), free_day(&["08:00", "09:00", "10:00"]));

        let mut tuesday = free_day(&["08:00", "09:00", "11:00"]);
        tuesday.insert("10:00".to_string(), Occupancy::Occupied("busy".to_string()));
        days.insert("2025-11-11".to_string(), tuesday);

        days.insert("2025-11-12".to_string(), free_day(&["08:00", "09:00", "10:00"]));

        Self { days }
    }

    /// All dates the calendar knows about, in order.
    pub fn dates(&self) -> Vec<String> {
        self.days.keys().cloned().collect()
    }

    /// Total number of slots across all dates.
    pub fn slot_count(&self) -> usize {
        self.days.values().map(|day| day.len()).sum()
    }

    /// List free and booked slots for a date.
    ///
    /// An unknown date is an expected outcome and comes back as a tagged
    /// error naming the date. The date is matched by exact key lookup; no
    /// calendar parsing happens here.
    pub fn list_availabilities(&self, date: &str) -> DayReport {
        let Some(day) = self.days.get(date) else {
            return DayReport::Error {
                message: format!("No schedule found for {}. Try another date.", date),
            };
        };

        let available_slots = day
            .iter()
            .filter(|(_, occupancy)| **occupancy == Occupancy::Free)
            .map(|(time, _)| time.clone())
            .collect();

        let booked_slots = day
            .iter()
            .filter_map(|(time, occupancy)| match occupancy {
                Occupancy::Occupied(name) => Some((time.clone(), name.clone())),
                Occupancy::Free => None,
            })
            .collect();

        DayReport::Success {
            message: format!("Schedule for {}.", date),
            available_slots,
            booked_slots,
        }
    }

    /// Book the slot starting at `start_time` on `date` under
    /// `reservation_name`.
    ///
    /// `_end_time` is accepted for interface parity with callers that pass a
    /// window, but bookings cover the single slot keyed by `start_time`.
    ///
    /// Checks run in order - unknown date, invalid slot, already booked - and
    /// the first failure wins with no mutation. A free slot flips to occupied
    /// exactly once; repeating the same call reports the existing occupant.
    pub fn book_slot(
        &mut self,
        date: &str,
        start_time: &str,
        _end_time: &str,
        reservation_name: &str,
    ) -> BookingReport {
        let Some(day) = self.days.get_mut(date) else {
            return BookingReport::Error {
                message: format!("No schedule found for {}.", date),
            };
        };

        let Some(current) = day.get(start_time) else {
            let valid: Vec<&str> = day.keys().map(String::as_str).collect();
            return BookingReport::Error {
                message: format!(
                    "Invalid start time {}. Valid slots on {}: {}.",
                    start_time,
                    date,
                    valid.join(", ")
                ),
            };
        };

        if let Occupancy::Occupied(existing) = current {
            return BookingReport::Error {
                message: format!(
                    "Slot {} on {} is already booked by {}.",
                    start_time, date, existing
                ),
            };
        }

        // The slot key exists and is free; this replaces its occupancy only.
        day.insert(
            start_time.to_string(),
            Occupancy::Occupied(reservation_name.to_string()),
        );

        BookingReport::Success {
            message: format!("Booked {} at {} for {}.", date, start_time, reservation_name),
        }
    }
}

fn free_day(times: &[&str]) -> Day {
    times
        .iter()
        .map(|time| (time.to_string(), Occupancy::Free))
        .collect()
}

/// Trait seam over the schedule for the async tool surfaces.
///
/// The agent, MCP server, and HTTP API all talk to the calendar through this
/// trait so a future real data source can slot in behind it. It carries
/// exactly the two operations the tool boundary exposes.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// List free and booked slots for a date.
    async fn list_availabilities(&self, date: &str) -> Result<DayReport>;

    /// Book a single slot under a reservation name.
    async fn book_slot(
        &self,
        date: &str,
        start_time: &str,
        end_time: &str,
        reservation_name: &str,
    ) -> Result<BookingReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The seed calendar used throughout: two dates, one pre-booked slot.
    fn seed() -> Schedule {
        let mut days = BTreeMap::new();
        days.insert("2025-11-10".to_string(), free_day(&["08:00", "09:00", "10:00"]));

        let mut day = free_day(&["08:00", "09:00", "11:00"]);
        day.insert("10:00".to_string(), Occupancy::Occupied("busy".to_string()));
        days.insert("2025-11-11".to_string(), day);

        Schedule::from_days(days).unwrap()
    }

    #[test]
    fn test_list_all_free() {
        let schedule = seed();
        let report = schedule.list_availabilities("2025-11-10");

        assert!(report.is_success());
        assert_eq!(report.available_slots(), ["08:00", "09:00", "10:00"]);
        assert!(report.booked_slots().unwrap().is_empty());
    }

    #[test]
    fn test_list_mixed_day() {
        let schedule = seed();
        let report = schedule.list_availabilities("2025-11-11");

        assert!(report.is_success());
        assert_eq!(report.available_slots(), ["08:00", "09:00", "11:00"]);
        assert_eq!(
            report.booked_slots().unwrap().get("10:00"),
            Some(&"busy".to_string())
        );
    }

    #[test]
    fn test_list_unknown_date() {
        let schedule = seed();
        let report = schedule.list_availabilities("2025-11-09");

        assert!(!report.is_success());
        assert!(report.message().contains("2025-11-09"));
        assert!(report.available_slots().is_empty());
        assert!(report.booked_slots().is_none());
    }

    #[test]
    fn test_slots_partition_the_day() {
        let schedule = seed();
        let report = schedule.list_availabilities("2025-11-11");

        let mut seen: Vec<&str> = report
            .available_slots()
            .iter()
            .map(String::as_str)
            .chain(report.booked_slots().unwrap().keys().map(String::as_str))
            .collect();
        seen.sort();

        // No slot missing, none duplicated, none in both sets.
        assert_eq!(seen, ["08:00", "09:00", "10:00", "11:00"]);
        for slot in report.available_slots() {
            assert!(!report.booked_slots().unwrap().contains_key(slot));
        }
    }

    #[test]
    fn test_book_free_slot() {
        let mut schedule = seed();
        let report = schedule.book_slot("2025-11-10", "08:00", "09:00", "Alice");

        assert!(report.is_success());
        assert!(report.message().contains("Alice"));

        // The booking is visible to a subsequent query.
        let listing = schedule.list_availabilities("2025-11-10");
        assert_eq!(listing.available_slots(), ["09:00", "10:00"]);
        assert_eq!(
            listing.booked_slots().unwrap().get("08:00"),
            Some(&"Alice".to_string())
        );
    }

    #[test]
    fn test_book_occupied_slot_rejected() {
        let mut schedule = seed();
        let report = schedule.book_slot("2025-11-11", "10:00", "11:00", "Bob");

        assert!(!report.is_success());
        assert!(report.message().contains("busy"));

        // The original occupant is untouched.
        let listing = schedule.list_availabilities("2025-11-11");
        assert_eq!(
            listing.booked_slots().unwrap().get("10:00"),
            Some(&"busy".to_string())
        );
    }

    #[test]
    fn test_double_booking_names_first_occupant() {
        let mut schedule = seed();
        assert!(schedule.book_slot("2025-11-10", "09:00", "10:00", "Alice").is_success());

        let second = schedule.book_slot("2025-11-10", "09:00", "10:00", "Mallory");
        assert!(!second.is_success());
        assert!(second.message().contains("Alice"));

        let listing = schedule.list_availabilities("2025-11-10");
        assert_eq!(
            listing.booked_slots().unwrap().get("09:00"),
            Some(&"Alice".to_string())
        );
    }

    #[test]
    fn test_book_unknown_date_creates_nothing() {
        let mut schedule = seed();
        let report = schedule.book_slot("2025-11-09", "08:00", "09:00", "Carl");

        assert!(!report.is_success());
        assert!(report.message().contains("2025-11-09"));
        assert_eq!(schedule.dates(), ["2025-11-10", "2025-11-11"]);
        assert!(!schedule.list_availabilities("2025-11-09").is_success());
    }

    #[test]
    fn test_book_invalid_slot_lists_valid_ones() {
        let mut schedule = seed();
        let before = schedule.list_availabilities("2025-11-10");

        let report = schedule.book_slot("2025-11-10", "23:00", "23:59", "Dana");
        assert!(!report.is_success());
        for valid in ["08:00", "09:00", "10:00"] {
            assert!(report.message().contains(valid));
        }

        // Booking never adds or removes slot keys.
        assert_eq!(schedule.list_availabilities("2025-11-10"), before);
    }

    #[test]
    fn test_day_report_wire_shape() {
        let schedule = seed();
        let json =
            serde_json::to_value(schedule.list_availabilities("2025-11-11")).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["available_slots"][2], "11:00");
        assert_eq!(json["booked_slots"]["10:00"], "busy");

        let err = serde_json::to_value(schedule.list_availabilities("1999-01-01")).unwrap();
        assert_eq!(err["status"], "error");
        assert!(err["message"].as_str().unwrap().contains("1999-01-01"));
    }

    #[test]
    fn test_booking_report_wire_shape() {
        let mut schedule = seed();
        let json =
            serde_json::to_value(schedule.book_slot("2025-11-10", "08:00", "09:00", "Eve"))
                .unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Booked 2025-11-10 at 08:00 for Eve.");
    }

    #[test]
    fn test_seed_json_round_trip() {
        let schedule = Schedule::from_json_str(
            r#"{"2025-12-01": {"08:00": null, "09:00": "Alice", "10:00": "busy"}}"#,
        )
        .unwrap();

        let report = schedule.list_availabilities("2025-12-01");
        assert_eq!(report.available_slots(), ["08:00"]);
        // "busy" is an occupant label like any other, not a sentinel.
        assert_eq!(
            report.booked_slots().unwrap().get("10:00"),
            Some(&"busy".to_string())
        );
    }

    #[test]
    fn test_seed_rejects_empty_day() {
        let result = Schedule::from_json_str(r#"{"2025-12-01": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_demo_calendar() {
        let schedule = Schedule::demo();
        assert_eq!(schedule.dates().len(), 3);
        assert_eq!(schedule.slot_count(), 10);

        let report = schedule.list_availabilities("2025-11-11");
        assert_eq!(
            report.booked_slots().unwrap().get("10:00"),
            Some(&"busy".to_string())
        );
    }
}
