//! Streaming extraction of thinking spans and tool calls.
//!
//! Model output arrives in arbitrarily sized chunks; tags split across
//! chunk boundaries are held back as partial prefixes and re-examined
//! with the next chunk, so feeding a stream chunk-by-chunk produces the
//! same result as parsing the concatenated text once.
//!
//! The extractor is immutable after construction; all parsing position
//! lives in the caller-owned [`StreamProcessingState`], one per model
//! turn.

pub mod config;
pub mod parser;
pub mod state;
pub mod tags;

pub use config::ExtractorConfig;
pub use parser::StreamExtractor;
pub use state::{
    ChunkOutput, ParsedResponse, StreamProcessingState, ToolCallDelta, ToolCallRecord,
};
