use serde::{Deserialize, Serialize};

use crate::types::{Action, InputValue};

/// One in-progress or completed tool call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCallRecord {
    /// Canonical action type
    pub action_type: String,
    /// Canonical input name to parsed value, in close order
    pub inputs: Vec<(String, InputValue)>,
    /// True once the closing function tag has been seen
    pub completed: bool,
}

impl ToolCallRecord {
    pub fn to_action(&self) -> Action {
        Action {
            action_type: self.action_type.clone(),
            inputs: self.inputs.clone(),
        }
    }
}

/// One streaming update for a tool call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolCallDelta {
    /// Index of the call in arrival order
    pub index: usize,
    /// Canonical action type, present on the update that opens the call
    pub action_type: Option<String>,
    /// Canonical input name, present when a parameter closed
    pub input_name: Option<String>,
    /// Parsed input value, present when a parameter closed
    pub input_value: Option<InputValue>,
    /// True on the update that completes the call
    pub completed: bool,
}

/// Output of one chunk-processing call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChunkOutput {
    /// Thinking text newly classified by this chunk
    pub thinking_delta: String,
    /// Tool-call updates in source order
    pub tool_call_updates: Vec<ToolCallDelta>,
}

impl ChunkOutput {
    pub fn is_empty(&self) -> bool {
        self.thinking_delta.is_empty() && self.tool_call_updates.is_empty()
    }
}

/// Result of parsing a whole response in one call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedResponse {
    /// Accumulated thinking text
    pub thinking: String,
    /// Completed tool calls, in call order
    pub actions: Vec<Action>,
}

/// Parsing position within one model turn.
///
/// Owned exclusively by the caller driving the streaming loop, mutated
/// in place by every chunk-processing call, and discarded at turn end.
/// The extractor never retains it beyond the call it is given.
#[derive(Debug, Clone, Default)]
pub struct StreamProcessingState {
    /// Inside a think region
    pub inside_think: bool,
    /// Inside a code-env block
    pub inside_code_env: bool,
    /// Inside a function tag
    pub inside_function: bool,
    /// Inside a parameter tag
    pub inside_parameter: bool,
    /// Partial text pending more chunks while outside tags or inside
    /// the think region
    pub think_buffer: String,
    /// Partial text pending while inside a code-env or function region
    pub current_function_buffer: String,
    /// Partial value text pending while inside a parameter
    pub current_parameter_buffer: String,
    /// Canonical name of the parameter whose value is still streaming
    pub current_parameter_name: Option<String>,
    /// Thinking text accumulated so far
    pub reasoning_buffer: String,
    /// Tool calls in arrival order
    pub tool_calls: Vec<ToolCallRecord>,
    /// Set once a closing think tag has been seen; think content is
    /// parsed at most once per turn
    pub think_parse_completed: bool,
    /// Set once a leading think opener has been consumed or ruled out;
    /// turns that start inside the think region may still echo it
    pub think_start_stripped: bool,
}

impl StreamProcessingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the turn-start position
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Open a new tool call, returning its index
    pub fn start_tool_call(&mut self, action_type: String) -> usize {
        self.tool_calls.push(ToolCallRecord {
            action_type,
            inputs: Vec::new(),
            completed: false,
        });
        self.tool_calls.len() - 1
    }

    /// Attach a closed parameter to the call at `index`
    pub fn push_input(&mut self, index: usize, name: String, value: InputValue) {
        if let Some(record) = self.tool_calls.get_mut(index) {
            record.inputs.push((name, value));
        }
    }

    /// Mark the call at `index` complete
    pub fn complete_tool_call(&mut self, index: usize) {
        if let Some(record) = self.tool_calls.get_mut(index) {
            record.completed = true;
        }
    }

    /// Actions for every completed call, in call order
    pub fn completed_actions(&self) -> Vec<Action> {
        self.tool_calls
            .iter()
            .filter(|record| record.completed)
            .map(ToolCallRecord::to_action)
            .collect()
    }
}
