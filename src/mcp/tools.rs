//! MCP tool definitions for Ledig.

use super::protocol::Tool;
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "list_availabilities".to_string(),
            description: "List free and booked time slots for a date on the booking calendar. \
                Returns available slots and, for booked slots, who holds them."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "The date to query, e.g. 2025-11-10"
                    }
                },
                "required": ["date"]
            }),
        },
        Tool {
            name: "book_slot".to_string(),
            description: "Book a time slot on a date under a reservation name. \
                Bookings cover the single hourly slot starting at start_time; \
                an already-booked slot is reported back with its current occupant."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "The date to book, e.g. 2025-11-10"
                    },
                    "start_time": {
                        "type": "string",
                        "description": "Start of the slot, e.g. 08:00"
                    },
                    "end_time": {
                        "type": "string",
                        "description": "End of the requested window, e.g. 09:00"
                    },
                    "reservation_name": {
                        "type": "string",
                        "description": "Who the reservation is for"
                    }
                },
                "required": ["date", "start_time", "end_time", "reservation_name"]
            }),
        },
    ]
}
