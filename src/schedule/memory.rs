//! In-memory schedule store.
//!
//! The only backend for now; the calendar lives for the life of the process
//! and is discarded on exit.

use super::{BookingReport, DayReport, Schedule, ScheduleStore};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory schedule store.
///
/// Wraps a [`Schedule`] in a lock so the agent loop, MCP server, and HTTP
/// handlers can share one calendar. A booking's check-then-set runs under a
/// single write-lock acquisition, so two concurrent attempts on the same slot
/// can never both succeed.
pub struct MemoryScheduleStore {
    schedule: RwLock<Schedule>,
}

impl MemoryScheduleStore {
    /// Create a store around an existing calendar.
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: RwLock::new(schedule),
        }
    }
}

impl Default for MemoryScheduleStore {
    fn default() -> Self {
        Self::new(Schedule::demo())
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn list_availabilities(&self, date: &str) -> Result<DayReport> {
        let schedule = self.schedule.read().unwrap();
        Ok(schedule.list_availabilities(date))
    }

    async fn book_slot(
        &self,
        date: &str,
        start_time: &str,
        end_time: &str,
        reservation_name: &str,
    ) -> Result<BookingReport> {
        let mut schedule = self.schedule.write().unwrap();
        Ok(schedule.book_slot(date, start_time, end_time, reservation_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_booking_visible_through_store() {
        let store = MemoryScheduleStore::default();

        let booked = store
            .book_slot("2025-11-10", "08:00", "09:00", "Alice")
            .await
            .unwrap();
        assert!(booked.is_success());

        let listing = store.list_availabilities("2025-11-10").await.unwrap();
        assert_eq!(
            listing.booked_slots().unwrap().get("08:00"),
            Some(&"Alice".to_string())
        );
    }

    #[tokio::test]
    async fn test_stores_are_independent() {
        let a = MemoryScheduleStore::default();
        let b = MemoryScheduleStore::default();

        a.book_slot("2025-11-10", "08:00", "09:00", "Alice")
            .await
            .unwrap();

        let listing = b.list_availabilities("2025-11-10").await.unwrap();
        assert!(listing.booked_slots().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_bookings_yield_one_winner() {
        use std::sync::Arc;

        let store = Arc::new(MemoryScheduleStore::default());

        let mut handles = Vec::new();
        for name in ["Alice", "Bob", "Carl", "Dana"] {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .book_slot("2025-11-10", "09:00", "10:00", name)
                    .await
                    .unwrap()
            }));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap().is_success() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
    }
}
