use tracing::warn;

use crate::coords::parse_coordinates;
use crate::extractor::config::ExtractorConfig;
use crate::extractor::state::{ChunkOutput, ParsedResponse, StreamProcessingState, ToolCallDelta};
use crate::extractor::tags;
use crate::standardize::{standardize_action_input_name, standardize_action_type};
use crate::types::{COORDINATE_FIELDS, InputValue};

/// Streaming extractor for thinking spans and tool calls.
///
/// Consumes model output in arbitrarily sized chunks and classifies it
/// against the tag grammar
/// `<code_env><function=NAME><parameter=NAME>value</parameter></function></code_env>`
/// plus a per-dialect think block. Processing one chunk at a time is
/// equivalent to processing the concatenated text in one call: a tag
/// split across chunk boundaries is held back as the longest partial
/// prefix and re-examined when the next chunk arrives.
///
/// The extractor holds only immutable configuration; all parsing
/// position lives in the caller-owned [`StreamProcessingState`].
/// Malformed nesting never raises. Unmatched closers and text outside
/// recognized tags are dropped.
#[derive(Debug, Clone, Default)]
pub struct StreamExtractor {
    config: ExtractorConfig,
}

impl StreamExtractor {
    /// Extractor for the default tag vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor for a specific dialect.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Fresh state for one model turn, seeded for reasoning-first
    /// dialects.
    pub fn new_state(&self) -> StreamProcessingState {
        let mut state = StreamProcessingState::new();
        state.inside_think = self.config.initial_inside_think;
        state
    }

    /// Whether `text` contains the opening markers of a tool call.
    pub fn contains_action_markers(&self, text: &str) -> bool {
        text.contains(&self.config.code_env_start_token)
            || text.contains(&self.config.function_prefix)
    }

    /// Process one chunk of model output.
    ///
    /// Returns the thinking text newly classified by this chunk and the
    /// tool-call updates it produced, in source order. Call repeatedly
    /// with successive chunks of one stream against the same state.
    pub fn process_chunk(&self, chunk: &str, state: &mut StreamProcessingState) -> ChunkOutput {
        let mut out = ChunkOutput::default();

        // Re-examine whatever the previous chunk left unresolved in the
        // region we are currently inside.
        let mut text = self.take_pending(state);
        text.push_str(chunk);

        while !text.is_empty() {
            text = if state.inside_parameter {
                self.scan_parameter(text, state, &mut out)
            } else if state.inside_function {
                self.scan_function(text, state, &mut out)
            } else if state.inside_code_env {
                self.scan_code_env(text, state, &mut out)
            } else if state.inside_think {
                self.scan_think(text, state, &mut out)
            } else {
                self.scan_outside(text, state, &mut out)
            };
        }
        out
    }

    /// Parse a complete response in one call.
    ///
    /// Runs the streaming machine over the whole text with a fresh
    /// state. A stream cut off inside the think region still yields the
    /// reasoning that arrived.
    pub fn extract_complete(&self, text: &str) -> ParsedResponse {
        let mut state = self.new_state();
        self.process_chunk(text, &mut state);
        let mut thinking = std::mem::take(&mut state.reasoning_buffer);
        if state.inside_think && !state.think_buffer.is_empty() {
            thinking.push_str(&state.think_buffer);
        }
        ParsedResponse {
            thinking,
            actions: state.completed_actions(),
        }
    }

    fn take_pending(&self, state: &mut StreamProcessingState) -> String {
        if state.inside_parameter {
            std::mem::take(&mut state.current_parameter_buffer)
        } else if state.inside_function || state.inside_code_env {
            std::mem::take(&mut state.current_function_buffer)
        } else {
            std::mem::take(&mut state.think_buffer)
        }
    }

    /// Outside all tags: text is dropped, watching for the think opener
    /// (at most once per turn) and the code-env opener.
    fn scan_outside(
        &self,
        text: String,
        state: &mut StreamProcessingState,
        _out: &mut ChunkOutput,
    ) -> String {
        let think_at = (!state.think_parse_completed)
            .then(|| text.find(&self.config.think_start_token))
            .flatten();
        let env_at = text.find(&self.config.code_env_start_token);

        match (think_at, env_at) {
            (Some(t), e) if e.is_none_or(|e| t <= e) => {
                state.inside_think = true;
                state.think_start_stripped = true;
                text[t + self.config.think_start_token.len()..].to_string()
            }
            (_, Some(e)) => {
                state.inside_code_env = true;
                text[e + self.config.code_env_start_token.len()..].to_string()
            }
            _ => {
                let mut watched = vec![self.config.code_env_start_token.as_str()];
                if !state.think_parse_completed {
                    watched.push(self.config.think_start_token.as_str());
                }
                let keep = tags::longest_partial_suffix_len(&text, &watched);
                state.think_buffer = text[text.len() - keep..].to_string();
                String::new()
            }
        }
    }

    /// Inside the think region: emit content eagerly, holding back only
    /// a tail that could still grow into the close tag.
    fn scan_think(
        &self,
        text: String,
        state: &mut StreamProcessingState,
        out: &mut ChunkOutput,
    ) -> String {
        // Reasoning-first turns may still echo the opener; drop it once.
        if !state.think_start_stripped {
            let start = self.config.think_start_token.as_str();
            if let Some(rest) = text.strip_prefix(start) {
                state.think_start_stripped = true;
                return rest.to_string();
            }
            if tags::partial_suffix_len(&text, start) == text.len() {
                state.think_buffer = text;
                return String::new();
            }
            state.think_start_stripped = true;
        }

        let end = self.config.think_end_token.as_str();
        match text.find(end) {
            Some(at) => {
                let segment = &text[..at];
                state.reasoning_buffer.push_str(segment);
                out.thinking_delta.push_str(segment);
                state.inside_think = false;
                state.think_parse_completed = true;
                text[at + end.len()..].to_string()
            }
            None => {
                let keep = tags::partial_suffix_len(&text, end);
                let emit = &text[..text.len() - keep];
                state.reasoning_buffer.push_str(emit);
                out.thinking_delta.push_str(emit);
                state.think_buffer = text[text.len() - keep..].to_string();
                String::new()
            }
        }
    }

    /// Inside a code-env block, before or between functions.
    fn scan_code_env(
        &self,
        text: String,
        state: &mut StreamProcessingState,
        out: &mut ChunkOutput,
    ) -> String {
        let func_at = text.find(&self.config.function_prefix);
        let close_at = text.find(&self.config.code_env_end_token);

        match (func_at, close_at) {
            (Some(f), c) if c.is_none_or(|c| f < c) => {
                let name_start = f + self.config.function_prefix.len();
                match text[name_start..].find('>') {
                    Some(gt) => {
                        let name = text[name_start..name_start + gt].trim();
                        let action_type = standardize_action_type(name);
                        let index = state.start_tool_call(action_type.clone());
                        out.tool_call_updates.push(ToolCallDelta {
                            index,
                            action_type: Some(action_type),
                            ..Default::default()
                        });
                        state.inside_function = true;
                        text[name_start + gt + 1..].to_string()
                    }
                    None => {
                        // Name still streaming; hold from the opener on.
                        state.current_function_buffer = text[f..].to_string();
                        String::new()
                    }
                }
            }
            (_, Some(c)) => {
                state.inside_code_env = false;
                text[c + self.config.code_env_end_token.len()..].to_string()
            }
            _ => {
                let watched = [
                    self.config.function_prefix.as_str(),
                    self.config.code_env_end_token.as_str(),
                ];
                let keep = tags::longest_partial_suffix_len(&text, &watched);
                state.current_function_buffer = text[text.len() - keep..].to_string();
                String::new()
            }
        }
    }

    /// Inside a function tag, before or between parameters.
    fn scan_function(
        &self,
        text: String,
        state: &mut StreamProcessingState,
        out: &mut ChunkOutput,
    ) -> String {
        let param_at = text.find(&self.config.parameter_prefix);
        let close_at = text.find(&self.config.function_end_token);

        match (param_at, close_at) {
            (Some(p), c) if c.is_none_or(|c| p < c) => {
                let name_start = p + self.config.parameter_prefix.len();
                match text[name_start..].find('>') {
                    Some(gt) => {
                        let raw_name = text[name_start..name_start + gt].trim();
                        let action_type = state
                            .tool_calls
                            .last()
                            .map(|record| record.action_type.clone())
                            .unwrap_or_default();
                        state.current_parameter_name =
                            Some(standardize_action_input_name(&action_type, raw_name));
                        state.inside_parameter = true;
                        text[name_start + gt + 1..].to_string()
                    }
                    None => {
                        state.current_function_buffer = text[p..].to_string();
                        String::new()
                    }
                }
            }
            (_, Some(c)) => {
                let index = state.tool_calls.len().saturating_sub(1);
                state.complete_tool_call(index);
                out.tool_call_updates.push(ToolCallDelta {
                    index,
                    completed: true,
                    ..Default::default()
                });
                state.inside_function = false;
                text[c + self.config.function_end_token.len()..].to_string()
            }
            _ => {
                let watched = [
                    self.config.parameter_prefix.as_str(),
                    self.config.function_end_token.as_str(),
                ];
                let keep = tags::longest_partial_suffix_len(&text, &watched);
                state.current_function_buffer = text[text.len() - keep..].to_string();
                String::new()
            }
        }
    }

    /// Inside a parameter tag: buffer the value until the close tag,
    /// then parse and emit the finished pair.
    fn scan_parameter(
        &self,
        text: String,
        state: &mut StreamProcessingState,
        out: &mut ChunkOutput,
    ) -> String {
        let end = self.config.parameter_end_token.as_str();
        match text.find(end) {
            Some(at) => {
                let value_text = text[..at].trim().to_string();
                let name = state.current_parameter_name.take().unwrap_or_default();
                let value = self.parse_parameter_value(&name, &value_text);
                let index = state.tool_calls.len().saturating_sub(1);
                state.push_input(index, name.clone(), value.clone());
                out.tool_call_updates.push(ToolCallDelta {
                    index,
                    input_name: Some(name),
                    input_value: Some(value),
                    ..Default::default()
                });
                state.inside_parameter = false;
                text[at + end.len()..].to_string()
            }
            None => {
                state.current_parameter_buffer = text;
                String::new()
            }
        }
    }

    fn parse_parameter_value(&self, name: &str, text: &str) -> InputValue {
        if COORDINATE_FIELDS.contains(&name) {
            match parse_coordinates(text) {
                Ok(coords) => return InputValue::Coordinates(coords),
                Err(error) => {
                    warn!(input = %name, %error, "coordinate parse failed, keeping text value");
                }
            }
        }
        InputValue::Text(text.to_string())
    }
}
