//! Coordinate parsing and normalization.
//!
//! Models emit coordinates in many textual dialects (`(x, y)`, `[x, y]`,
//! `<point>x y</point>`, `<bbox>x1, y1, x2, y2</bbox>`, bare pairs).
//! [`parse_coordinates`] folds them all into [`crate::types::Coordinates`];
//! the normalizers attach a [0,1]-scaled pair for operator backends.

pub mod errors;
pub mod normalize;
pub mod parser;

pub use errors::{ParseError, ParseResult};
pub use normalize::{frame_normalizer, normalize_action_coords, normalize_coordinates};
pub use parser::parse_coordinates;
