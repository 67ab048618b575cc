use perch_base::logging::{format_timestamp, init_stdout_logger};
use log::Level;

#[test]
fn test_timestamp_format() {
    let ts = format_timestamp();
    // YYYY-MM-DDTHH:MM:SS
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[7..8], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
    assert_eq!(&ts[16..17], ":");
    assert!(ts[0..4].parse::<u32>().unwrap() >= 2024);
}

#[test]
fn test_init_is_idempotent() {
    init_stdout_logger(Level::Info);
    // Second init must not panic.
    init_stdout_logger(Level::Debug);

    log::info!("logger initialized");
    log::debug!("suppressed in info mode");
}
