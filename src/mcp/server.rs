//! MCP server implementation.

use super::protocol::*;
use super::tools::get_tools;
use crate::config::Settings;
use crate::schedule::{MemoryScheduleStore, Schedule, ScheduleStore};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "ledig";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for Ledig.
pub struct McpServer {
    settings: Settings,
    store: Option<Arc<MemoryScheduleStore>>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            store: None,
        }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("Ledig MCP server starting...");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                    let response = JsonRpcResponse::error(None, -32700, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "initialized" => {
                // Notification, no response needed but we'll send empty success
                JsonRpcResponse::success(request.id, json!({}))
            }
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&mut self, id: Option<Value>) -> JsonRpcResponse {
        // Load the calendar lazily so a bad seed file surfaces here
        match Schedule::load(&self.settings.schedule) {
            Ok(schedule) => {
                eprintln!(
                    "Calendar loaded: {} dates, {} slots",
                    schedule.dates().len(),
                    schedule.slot_count()
                );
                self.store = Some(Arc::new(MemoryScheduleStore::new(schedule)));
            }
            Err(e) => {
                eprintln!("Failed to load calendar: {}", e);
                return JsonRpcResponse::error(id, -32000, &format!("Init failed: {}", e));
            }
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/call request.
    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, -32602, "Missing params"),
        };

        let result = match params.name.as_str() {
            "list_availabilities" => self.tool_list_availabilities(params.arguments).await,
            "book_slot" => self.tool_book_slot(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Availability tool.
    async fn tool_list_availabilities(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let date = match args.get("date").and_then(|v| v.as_str()) {
            Some(d) => d,
            None => return ToolCallResult::error("Missing 'date' argument".to_string()),
        };

        let store = match &self.store {
            Some(s) => s,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        // The report is already tagged; an unknown date is content, not an error
        match store.list_availabilities(date).await {
            Ok(report) => match serde_json::to_string(&report) {
                Ok(text) => ToolCallResult::text(text),
                Err(e) => ToolCallResult::error(format!("Failed to encode report: {}", e)),
            },
            Err(e) => ToolCallResult::error(format!("Availability lookup failed: {}", e)),
        }
    }

    /// Booking tool.
    async fn tool_book_slot(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let field = |key: &str| -> Option<String> {
            args.get(key).and_then(|v| v.as_str()).map(str::to_string)
        };

        let (date, start_time, end_time, reservation_name) = match (
            field("date"),
            field("start_time"),
            field("end_time"),
            field("reservation_name"),
        ) {
            (Some(d), Some(s), Some(e), Some(r)) => (d, s, e, r),
            _ => {
                return ToolCallResult::error(
                    "book_slot requires 'date', 'start_time', 'end_time', and 'reservation_name'"
                        .to_string(),
                )
            }
        };

        let store = match &self.store {
            Some(s) => s,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match store
            .book_slot(&date, &start_time, &end_time, &reservation_name)
            .await
        {
            Ok(report) => match serde_json::to_string(&report) {
                Ok(text) => ToolCallResult::text(text),
                Err(e) => ToolCallResult::error(format!("Failed to encode report: {}", e)),
            },
            Err(e) => ToolCallResult::error(format!("Booking failed: {}", e)),
        }
    }
}
