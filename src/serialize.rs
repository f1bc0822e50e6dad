//! Rendering canonical actions back into the textual call syntax.
//!
//! The inverse of extraction, used to re-inject actions into prompts and
//! conversation history. Serialization is total: a value no rule covers
//! degrades to the literal text `unsupported` instead of failing the turn.

use crate::types::{Action, InputValue};

/// Rendering of a single input, surfaced as a tagged union so callers
/// can detect the degenerate branch without string matching
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedInput {
    /// Key and rendered value text, joined as `key='text'`
    Pair { key: String, text: String },
    /// Value that no rendering rule covers
    Unsupported { key: String },
}

/// Render one input value under the given action type.
///
/// Rules in priority order: plain text renders verbatim (under
/// `navigate` the key is forced to `url`); coordinates render from `raw`
/// when present, else from `reference_box` as a bbox tag, else from
/// `normalized`; numbers only render under `wait`, with a seconds
/// suffix.
pub fn render_input(action_type: &str, key: &str, value: &InputValue) -> RenderedInput {
    match value {
        InputValue::Text(text) => {
            let key = if action_type == "navigate" { "url" } else { key };
            RenderedInput::Pair {
                key: key.to_string(),
                text: text.clone(),
            }
        }
        InputValue::Coordinates(coords) => {
            if let Some(raw) = coords.raw {
                // raw wins over normalized and reference_box
                RenderedInput::Pair {
                    key: key.to_string(),
                    text: format!("({}, {})", raw.x, raw.y),
                }
            } else if let Some(b) = coords.reference_box {
                RenderedInput::Pair {
                    key: key.to_string(),
                    text: format!("<bbox>{}, {}, {}, {}</bbox>", b.x1, b.y1, b.x2, b.y2),
                }
            } else if let Some(normalized) = coords.normalized {
                RenderedInput::Pair {
                    key: key.to_string(),
                    text: format!("({}, {})", normalized.x, normalized.y),
                }
            } else {
                RenderedInput::Unsupported {
                    key: key.to_string(),
                }
            }
        }
        InputValue::Number(n) if action_type == "wait" => RenderedInput::Pair {
            key: key.to_string(),
            text: format!("{}s", n),
        },
        InputValue::Number(_) => RenderedInput::Unsupported {
            key: key.to_string(),
        },
    }
}

/// Render a canonical action as `type(key1='v1', key2='v2')`.
pub fn serialize_action(action: &Action) -> String {
    let rendered: Vec<String> = action
        .inputs
        .iter()
        .map(|(key, value)| match render_input(&action.action_type, key, value) {
            RenderedInput::Pair { key, text } => format!("{}='{}'", key, text),
            RenderedInput::Unsupported { key } => {
                tracing::warn!(
                    action_type = %action.action_type,
                    input = %key,
                    "no rendering rule for input value, emitting unsupported"
                );
                "unsupported".to_string()
            }
        })
        .collect();

    format!("{}({})", action.action_type, rendered.join(", "))
}
