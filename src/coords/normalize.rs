use crate::types::{Action, COORDINATE_FIELDS, Coordinates, InputValue, Point};

/// Models commonly emit integer coordinates on a 0-1000 scale.
const DEFAULT_SCALE: f64 = 1000.0;

/// Attach a [0,1] `normalized` pair assuming the 0-1000 integer scale.
///
/// `raw` and `reference_box` are kept intact; a value without `raw`
/// passes through unchanged.
pub fn normalize_coordinates(coords: &Coordinates) -> Coordinates {
    scale_by(coords, DEFAULT_SCALE, DEFAULT_SCALE)
}

/// Normalizer for a concrete reference frame, e.g. screen dimensions.
pub fn frame_normalizer(width: f64, height: f64) -> impl Fn(&Coordinates) -> Coordinates {
    move |coords| scale_by(coords, width, height)
}

fn scale_by(coords: &Coordinates, width: f64, height: f64) -> Coordinates {
    let mut out = *coords;
    if let Some(raw) = coords.raw {
        out.normalized = Some(Point::new(raw.x / width, raw.y / height));
    }
    out
}

/// Apply a normalization function to every coordinate-bearing input.
///
/// Only `point`, `start` and `end` carry coordinates; all other inputs
/// pass through untouched. Returns a new action, never mutates.
pub fn normalize_action_coords<F>(action: &Action, normalize: F) -> Action
where
    F: Fn(&Coordinates) -> Coordinates,
{
    let inputs = action
        .inputs
        .iter()
        .map(|(name, value)| {
            let value = match value {
                InputValue::Coordinates(coords) if COORDINATE_FIELDS.contains(&name.as_str()) => {
                    InputValue::Coordinates(normalize(coords))
                }
                other => other.clone(),
            };
            (name.clone(), value)
        })
        .collect();

    Action {
        action_type: action.action_type.clone(),
        inputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::parser::parse_coordinates;

    #[test]
    fn test_default_scale() {
        let coords = parse_coordinates("(500, 250)").unwrap();
        let normalized = normalize_coordinates(&coords);
        assert_eq!(normalized.normalized, Some(Point::new(0.5, 0.25)));
        assert_eq!(normalized.raw, coords.raw);
        assert_eq!(normalized.reference_box, coords.reference_box);
    }

    #[test]
    fn test_frame_scale() {
        let coords = parse_coordinates("(960, 540)").unwrap();
        let normalize = frame_normalizer(1920.0, 1080.0);
        let normalized = normalize(&coords);
        assert_eq!(normalized.normalized, Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_missing_raw_passes_through() {
        let coords = Coordinates::default();
        let normalized = normalize_coordinates(&coords);
        assert_eq!(normalized, coords);
    }

    #[test]
    fn test_action_coords_only_touch_coordinate_fields() {
        let mut action = Action::new("drag");
        action.inputs.push((
            "start".to_string(),
            InputValue::Coordinates(parse_coordinates("(100, 100)").unwrap()),
        ));
        action.inputs.push((
            "end".to_string(),
            InputValue::Coordinates(parse_coordinates("(900, 900)").unwrap()),
        ));
        action
            .inputs
            .push(("content".to_string(), InputValue::Text("file.txt".to_string())));

        let normalized = normalize_action_coords(&action, normalize_coordinates);

        match normalized.input("start") {
            Some(InputValue::Coordinates(coords)) => {
                assert_eq!(coords.normalized, Some(Point::new(0.1, 0.1)));
                assert_eq!(coords.raw, Some(Point::new(100.0, 100.0)));
            }
            other => panic!("unexpected start value: {:?}", other),
        }
        match normalized.input("end") {
            Some(InputValue::Coordinates(coords)) => {
                assert_eq!(coords.normalized, Some(Point::new(0.9, 0.9)));
            }
            other => panic!("unexpected end value: {:?}", other),
        }
        assert_eq!(
            normalized.input("content"),
            Some(&InputValue::Text("file.txt".to_string()))
        );
        // Source action untouched
        match action.input("start") {
            Some(InputValue::Coordinates(coords)) => assert!(coords.normalized.is_none()),
            other => panic!("unexpected start value: {:?}", other),
        }
    }
}
