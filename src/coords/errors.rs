use thiserror::Error;

/// Result type for coordinate parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors surfaced by coordinate parsing
///
/// Message text is a compatibility contract with the surrounding agent
/// protocol; callers assert on the rendered strings.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Insufficient coordinate, at least 2 numbers required")]
    InsufficientCoordinates,

    #[error("Invalid number at position {position}: {token}")]
    InvalidNumber { position: usize, token: String },
}
