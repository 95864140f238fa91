//! Tool definitions and implementations for the agent system.

use crate::error::{LedigError, Result};
use crate::schedule::ScheduleStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// List free and booked slots for a date.
    ListAvailabilities { date: String },

    /// Book a slot under a reservation name.
    BookSlot {
        date: String,
        start_time: String,
        end_time: String,
        reservation_name: String,
    },
}

/// Tool execution context with access to the schedule store.
pub struct ToolContext {
    pub store: Arc<dyn ScheduleStore>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Execute a tool call and return the result as a string.
    ///
    /// The result is the tagged report serialized as JSON; the model turns it
    /// into prose. Unknown dates and occupied slots come back inside the
    /// report, not as errors.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::ListAvailabilities { date } => {
                let report = self.store.list_availabilities(date).await?;
                Ok(serde_json::to_string(&report)?)
            }
            ToolCall::BookSlot {
                date,
                start_time,
                end_time,
                reservation_name,
            } => {
                let report = self
                    .store
                    .book_slot(date, start_time, end_time, reservation_name)
                    .await?;
                Ok(serde_json::to_string(&report)?)
            }
        }
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "list_availabilities".to_string(),
                description: Some(
                    "List free and booked time slots for a date. \
                    Use this before booking, or whenever the user asks what is available."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "date": {
                            "type": "string",
                            "description": "The date to query, e.g. 2025-11-10"
                        }
                    },
                    "required": ["date"]
                })),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "book_slot".to_string(),
                description: Some(
                    "Book a time slot on a date under a reservation name. \
                    Bookings cover the single hourly slot starting at start_time."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
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
                })),
                strict: None,
            },
        },
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| LedigError::Agent(format!("Invalid tool arguments: {}", e)))?;

    let require = |key: &str| -> Result<String> {
        args[key]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| LedigError::Agent(format!("Missing '{}' argument", key)))
    };

    match name {
        "list_availabilities" => Ok(ToolCall::ListAvailabilities {
            date: require("date")?,
        }),
        "book_slot" => Ok(ToolCall::BookSlot {
            date: require("date")?,
            start_time: require("start_time")?,
            end_time: require("end_time")?,
            reservation_name: require("reservation_name")?,
        }),
        _ => Err(LedigError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::MemoryScheduleStore;

    #[test]
    fn test_parse_list_availabilities_tool() {
        let tool = parse_tool_call("list_availabilities", r#"{"date": "2025-11-10"}"#).unwrap();
        match tool {
            ToolCall::ListAvailabilities { date } => assert_eq!(date, "2025-11-10"),
            _ => panic!("Expected ListAvailabilities tool"),
        }
    }

    #[test]
    fn test_parse_book_slot_tool() {
        let tool = parse_tool_call(
            "book_slot",
            r#"{"date": "2025-11-10", "start_time": "08:00", "end_time": "09:00", "reservation_name": "Alice"}"#,
        )
        .unwrap();
        match tool {
            ToolCall::BookSlot {
                date,
                start_time,
                reservation_name,
                ..
            } => {
                assert_eq!(date, "2025-11-10");
                assert_eq!(start_time, "08:00");
                assert_eq!(reservation_name, "Alice");
            }
            _ => panic!("Expected BookSlot tool"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_argument() {
        let result = parse_tool_call("book_slot", r#"{"date": "2025-11-10"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_tool() {
        let result = parse_tool_call("cancel_slot", "{}");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_returns_tagged_json() {
        let context = ToolContext::new(Arc::new(MemoryScheduleStore::default()));

        let output = context
            .execute(&ToolCall::ListAvailabilities {
                date: "2025-11-10".to_string(),
            })
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["status"], "success");

        let output = context
            .execute(&ToolCall::BookSlot {
                date: "2025-11-11".to_string(),
                start_time: "10:00".to_string(),
                end_time: "11:00".to_string(),
                reservation_name: "Bob".to_string(),
            })
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().contains("busy"));
    }
}
