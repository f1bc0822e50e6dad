//! Streaming action/response parser for GUI agent model output.
//!
//! The session layer of a GUI agent platform feeds incrementally
//! arriving model text into this crate and gets back structured tool
//! calls and thinking segments:
//!
//! - [`extractor`] scans chunked output for think blocks and
//!   `<code_env>` tool-call blocks, tolerating tags split anywhere
//!   across chunk boundaries.
//! - [`coords`] parses the many coordinate dialects models emit and
//!   normalizes them against a reference frame.
//! - [`standardize`] folds synonym action types and input names onto
//!   the canonical vocabulary.
//! - [`serialize`] renders canonical actions back into the textual
//!   call syntax for prompts and history.
//!
//! ```
//! use gui_action_parser::{StreamExtractor, serialize_action};
//!
//! let extractor = StreamExtractor::new();
//! let mut state = extractor.new_state();
//!
//! // Chunks arrive with tag boundaries anywhere, including mid-tag.
//! extractor.process_chunk("<think>find the button</think><code_env><function=cli", &mut state);
//! extractor.process_chunk("ck><parameter=point>(100, 200)</parameter></function></code_env>", &mut state);
//!
//! assert_eq!(state.reasoning_buffer, "find the button");
//! let actions = state.completed_actions();
//! assert_eq!(serialize_action(&actions[0]), "click(point='(100, 200)')");
//! ```

pub mod coords;
pub mod extractor;
pub mod logging;
pub mod serialize;
pub mod standardize;
pub mod types;

pub use coords::{
    ParseError, frame_normalizer, normalize_action_coords, normalize_coordinates,
    parse_coordinates,
};
pub use extractor::{
    ChunkOutput, ExtractorConfig, ParsedResponse, StreamExtractor, StreamProcessingState,
    ToolCallDelta, ToolCallRecord,
};
pub use serialize::{RenderedInput, render_input, serialize_action};
pub use standardize::{standardize_action_input_name, standardize_action_type};
pub use types::{Action, Coordinates, InputValue, Point, ReferenceBox};
