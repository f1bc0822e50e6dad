//! Canonical vocabulary for action types and input names.
//!
//! Model checkpoints drift across synonym spellings (`leftclick`,
//! `left_single`, `Click`, ...). Both lookups are case-insensitive and
//! total: unknown names pass through lower-cased so a new dialect never
//! aborts a turn. Input-name lookup consults the action-type-specific
//! table first, then the general table, then falls back to identity.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Synonym action type to canonical action type
static ACTION_TYPE_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("leftclick", "click"),
        ("left_click", "click"),
        ("left_single", "click"),
        ("single_click", "click"),
        ("tap", "click"),
        ("doubleclick", "double_click"),
        ("left_double", "double_click"),
        ("rightclick", "right_click"),
        ("right_single", "right_click"),
        ("mouse_move", "hover"),
        ("move_to", "hover"),
        ("press", "hotkey"),
        ("keypress", "hotkey"),
        ("key_press", "hotkey"),
        ("input", "type"),
        ("input_text", "type"),
        ("type_text", "type"),
        ("swipe", "scroll"),
        ("launch", "open_app"),
        ("launch_app", "open_app"),
        ("open", "open_app"),
        ("goto", "navigate"),
        ("go_to_url", "navigate"),
        ("open_url", "navigate"),
        ("drag_and_drop", "drag"),
        ("stop", "finished"),
        ("end", "finished"),
        ("done", "finished"),
    ])
});

/// Synonym input name to canonical input name, any action type
static INPUT_NAME_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("start_box", "start"),
        ("end_box", "end"),
        ("start_point", "start"),
        ("end_point", "end"),
        ("coordinate", "point"),
        ("position", "point"),
        ("text", "content"),
        ("duration", "time"),
        ("seconds", "time"),
        ("app_name", "name"),
    ])
});

/// Input-name overrides whose canonical form depends on the action type,
/// consulted before the general table
static TYPE_SPECIFIC_INPUT_SYNONYMS: Lazy<
    HashMap<&'static str, HashMap<&'static str, &'static str>>,
> = Lazy::new(|| {
    let mut map = HashMap::new();
    // Single-position pointer actions address their target as `point`,
    // whichever start spelling the checkpoint emits.
    for action in ["click", "double_click", "right_click", "hover"] {
        map.insert(
            action,
            HashMap::from([
                ("start_box", "point"),
                ("start_point", "point"),
                ("start", "point"),
            ]),
        );
    }
    map.insert("navigate", HashMap::from([("content", "url"), ("text", "url")]));
    map.insert(
        "open_app",
        HashMap::from([("content", "name"), ("app_name", "name"), ("appname", "name")]),
    );
    map
});

/// Map a model-emitted action type onto the canonical vocabulary.
pub fn standardize_action_type(name: &str) -> String {
    let folded = name.trim().to_lowercase();
    match ACTION_TYPE_SYNONYMS.get(folded.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => folded,
    }
}

/// Map a model-emitted input name onto the canonical vocabulary.
///
/// `action_type` is expected in canonical form (as produced by
/// [`standardize_action_type`]).
pub fn standardize_action_input_name(action_type: &str, input_name: &str) -> String {
    let action = action_type.trim().to_lowercase();
    let folded = input_name.trim().to_lowercase();

    if let Some(overrides) = TYPE_SPECIFIC_INPUT_SYNONYMS.get(action.as_str()) {
        if let Some(canonical) = overrides.get(folded.as_str()) {
            return (*canonical).to_string();
        }
    }
    match INPUT_NAME_SYNONYMS.get(folded.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => folded,
    }
}
