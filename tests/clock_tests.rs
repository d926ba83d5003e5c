use chrono::NaiveDateTime;
use spinlog::clock::{Clock, FixedClock, LocalClock, TIMESTAMP_FORMAT};

#[test]
fn test_local_timestamp_shape() {
    let ts = LocalClock.timestamp();
    assert_eq!(ts.len(), 19, "unexpected timestamp: {}", ts);
    assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn test_local_timestamp_has_second_resolution() {
    let ts = LocalClock.timestamp();
    assert!(!ts.contains('.'), "sub-second digits in {}", ts);
}

#[test]
fn test_consecutive_local_timestamps_parse() {
    // Wall time may step backwards, so only the format is checked
    for _ in 0..100 {
        let ts = LocalClock.timestamp();
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok(), "bad timestamp: {}", ts);
    }
}

#[test]
fn test_fixed_clock() {
    let clock = FixedClock::new("1999-12-31T23:59:59");
    assert_eq!(clock.timestamp(), "1999-12-31T23:59:59");
    assert_eq!(clock.timestamp(), clock.timestamp());
}
