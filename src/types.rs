use serde::{Deserialize, Serialize};

/// Input field names that carry coordinate values
pub const COORDINATE_FIELDS: [&str; 3] = ["point", "start", "end"];

/// A single x/y pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle implied by a coordinate expression
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Parsed coordinate value from model output
///
/// `raw` holds the literal pair as emitted (often on a 0-1000 integer
/// scale), `reference_box` the rectangle implied by the syntax, and
/// `normalized` the [0,1]-scaled pair attached later by normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    /// Literal numeric pair found in the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Point>,
    /// Box implied by the syntax; degenerates to a point for 2-token forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_box: Option<ReferenceBox>,
    /// [0,1]-scaled pair relative to a reference frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<Point>,
}

impl Coordinates {
    /// Coordinate for a single point; the box degenerates to the point itself
    pub fn from_point(x: f64, y: f64) -> Self {
        Self {
            raw: Some(Point::new(x, y)),
            reference_box: Some(ReferenceBox {
                x1: x,
                y1: y,
                x2: x,
                y2: y,
            }),
            normalized: None,
        }
    }

    /// Coordinate carrying a full bounding box with a representative point
    pub fn from_box(point: Point, reference_box: ReferenceBox) -> Self {
        Self {
            raw: Some(point),
            reference_box: Some(reference_box),
            normalized: None,
        }
    }
}

/// Value of a single action input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InputValue {
    /// Plain text value
    Text(String),
    /// Numeric value (e.g. a wait duration)
    Number(f64),
    /// Parsed coordinate value
    Coordinates(Coordinates),
}

/// One agent-issued command with canonical type and named inputs
///
/// Inputs keep source order; serialization and streaming updates both
/// depend on the order parameters were closed in the model output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    /// Canonical action type (e.g. `click`, `drag`, `wait`)
    pub action_type: String,
    /// Canonical field name to value, in source order
    pub inputs: Vec<(String, InputValue)>,
}

impl Action {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            inputs: Vec::new(),
        }
    }

    /// Value of the first input with the given canonical name
    pub fn input(&self, name: &str) -> Option<&InputValue> {
        self.inputs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
}
