//! Logging Bootstrap Tests
//!
//! The library only emits `tracing` events; this suite installs the
//! subscriber the way an embedding binary would and checks that library
//! events reach the rolling file sink and that repeated initialization
//! stays harmless.
//!
//! Kept as a single test: the first `init_logging` call in the process
//! wins the global subscriber slot, so the file sink must be installed
//! before the repeated-init call.

use gui_action_parser::logging::{LoggingConfig, init_logging};
use gui_action_parser::{Action, InputValue, serialize_action};

#[test]
fn test_init_logging_file_sink_and_repeated_init() {
    let log_dir =
        std::env::temp_dir().join(format!("gui-action-parser-logs-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&log_dir);

    let config = LoggingConfig {
        log_dir: Some(log_dir.to_string_lossy().into_owned()),
        colorize: false,
        ..Default::default()
    };
    let guard = init_logging(config);

    // Route a real library event through the installed subscriber: an
    // unrenderable input makes the serializer warn.
    let mut action = Action::new("click");
    action
        .inputs
        .push(("button".to_string(), InputValue::Number(2.0)));
    assert_eq!(serialize_action(&action), "click(unsupported)");
    tracing::info!(target: "gui_action_parser", "logging smoke event");

    // A second init against the already-installed subscriber must be
    // swallowed, not panic or error.
    let _second = init_logging(LoggingConfig::default());

    // Dropping the guard flushes the non-blocking worker.
    drop(guard);

    let entries: Vec<_> = std::fs::read_dir(&log_dir)
        .expect("log directory exists")
        .filter_map(Result::ok)
        .collect();
    assert_eq!(entries.len(), 1, "expected one rolling log file");

    let file_name = entries[0].file_name();
    assert!(
        file_name.to_string_lossy().starts_with("gui-action-parser"),
        "unexpected log file name: {:?}",
        file_name
    );

    let content = std::fs::read_to_string(entries[0].path()).expect("log file readable");
    assert!(
        content.contains("no rendering rule for input value"),
        "library warn missing from log file: {:?}",
        content
    );
    assert!(content.contains("logging smoke event"));

    let _ = std::fs::remove_dir_all(&log_dir);
}
