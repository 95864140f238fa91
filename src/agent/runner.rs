//! Agent runner with tool calling loop.

use super::client::create_client;
use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use crate::error::{LedigError, Result};
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use tracing::{debug, info};

/// Default system prompt for the agent.
const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a helpful scheduling assistant who manages a booking calendar.

You have tools to check availability and to book slots.

Guidelines:
- Use 'list_availabilities' to see which slots are free or taken on a date
- Use 'book_slot' only after confirming the slot is free and you know who the reservation is for
- Dates are written as YYYY-MM-DD and times as HH:MM
- If a date has no schedule, say so and suggest the user try another date
- Never claim a booking succeeded unless the tool reported success

When you have the answer, reply clearly and concisely, naming dates and times."#;

/// Agent that answers scheduling questions using the calendar tools.
pub struct Agent {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    tools: ToolContext,
    max_iterations: usize,
    system_prompt: String,
}

impl Agent {
    /// Create a new agent with the given tool context and model.
    pub fn new(tools: ToolContext, model: &str) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
            tools,
            max_iterations: 10,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Set a custom system prompt.
    pub fn with_system_prompt(mut self, prompt: &str) -> Self {
        self.system_prompt = prompt.to_string();
        self
    }

    /// Set maximum iterations for the agent loop.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Run the agent on a user question.
    pub async fn run(&self, question: &str, context: Option<&str>) -> Result<AgentResponse> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()
                .map_err(|e| LedigError::Agent(e.to_string()))?
                .into(),
        ];

        let user_message = match context {
            Some(ctx) => format!("Context: {}\n\nQuestion: {}", ctx, question),
            None => question.to_string(),
        };

        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_message)
                .build()
                .map_err(|e| LedigError::Agent(e.to_string()))?
                .into(),
        );

        let mut iterations = 0;
        let mut tool_calls_made = Vec::new();

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(LedigError::Agent(format!(
                    "Agent exceeded maximum iterations ({})",
                    self.max_iterations
                )));
            }

            debug!("Agent iteration {}", iterations);

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(messages.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| LedigError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| LedigError::OpenAI(format!("Agent API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| LedigError::Agent("No response from model".to_string()))?;

            if let Some(ref tool_calls) = choice.message.tool_calls {
                if tool_calls.is_empty() {
                    return self.build_response(&choice.message.content, tool_calls_made, iterations);
                }

                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(|e| LedigError::Agent(e.to_string()))?;
                messages.push(assistant_msg.into());

                for tool_call in tool_calls {
                    let record = self.execute_tool_call(tool_call).await;

                    let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(&tool_call.id)
                        .content(record.result.clone())
                        .build()
                        .map_err(|e| LedigError::Agent(e.to_string()))?;
                    messages.push(tool_msg.into());

                    tool_calls_made.push(record);
                }
            } else {
                // No tool calls - the model is done.
                return self.build_response(&choice.message.content, tool_calls_made, iterations);
            }
        }
    }

    /// Execute a single tool call and return a record of it.
    async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> ToolCallRecord {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Agent calling tool: {} with args: {}", name, arguments);

        let result = match parse_tool_call(name, arguments) {
            Ok(tool) => match self.tools.execute(&tool).await {
                Ok(output) => output,
                Err(e) => format!("Tool error: {}", e),
            },
            Err(e) => format!("Failed to parse tool call: {}", e),
        };

        ToolCallRecord {
            name: name.clone(),
            arguments: arguments.clone(),
            result,
        }
    }

    /// Build the final agent response.
    fn build_response(
        &self,
        content: &Option<String>,
        tool_calls: Vec<ToolCallRecord>,
        iterations: usize,
    ) -> Result<AgentResponse> {
        let content = content.clone().unwrap_or_default();

        Ok(AgentResponse {
            content,
            tool_calls,
            iterations,
        })
    }
}

/// Response from an agent run.
#[derive(Debug)]
pub struct AgentResponse {
    /// The final response content from the agent.
    pub content: String,
    /// Record of all tool calls made during execution.
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of iterations (LLM calls) used.
    pub iterations: usize,
}

/// Record of a tool call made by the agent.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    /// Name of the tool called.
    pub name: String,
    /// JSON arguments passed to the tool.
    pub arguments: String,
    /// Result returned by the tool.
    pub result: String,
}

impl std::fmt::Display for ToolCallRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_call_record_display() {
        let record = ToolCallRecord {
            name: "book_slot".to_string(),
            arguments: r#"{"date": "2025-11-10"}"#.to_string(),
            result: "Booked".to_string(),
        };
        assert_eq!(format!("{}", record), r#"book_slot({"date": "2025-11-10"})"#);
    }
}
