use tracelens_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp log dir");
    let other_dir = tempfile::tempdir().expect("second temp dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp path");
    let other_dir_str = other_dir.path().to_str().expect("utf-8 temp path");

    init_logging("info", log_dir_str).expect("first init should succeed");
    init_logging("INFO", log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", log_dir_str).expect_err("level conflict");
    assert!(matches!(level_error, LoggingError::LevelConflict { .. }));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging("info", other_dir_str).expect_err("directory conflict");
    assert!(matches!(dir_error, LoggingError::DirConflict { .. }));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());
}
