use booking_helper::config::RateTable;
use booking_helper::error::BookingError;
use booking_helper::pricing::calculate_total_price;
use std::io::Write;
use tempfile::NamedTempFile;

fn rates_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_from_json_file() {
    let file = rates_file(r#"{"standard": 79, "deluxe": 129, "suite": 199}"#);
    let rates = RateTable::from_file(file.path()).unwrap();
    assert_eq!(rates.standard, 79);
    assert_eq!(rates.deluxe, 129);
    assert_eq!(rates.suite, 199);
}

#[test]
fn test_loaded_rates_flow_into_pricing() {
    let file = rates_file(r#"{"standard": 79, "deluxe": 129, "suite": 199}"#);
    let rates = RateTable::load(Some(file.path())).unwrap();
    assert_eq!(
        calculate_total_price(&rates, "suite", "2024-01-01", "2024-01-03"),
        398
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = RateTable::load(Some(std::path::Path::new("/nonexistent/rates.json"))).unwrap_err();
    assert!(matches!(err, BookingError::IoError { .. }));
}

#[test]
fn test_invalid_json_is_reported_with_path() {
    let file = rates_file("{not json");
    let err = RateTable::from_file(file.path()).unwrap_err();
    match err {
        BookingError::RatesFile { path, .. } => {
            assert!(path.contains(file.path().file_name().unwrap().to_str().unwrap()));
        }
        other => panic!("Expected RatesFile error, got {other:?}"),
    }
}

#[test]
fn test_unknown_fields_are_rejected() {
    let file = rates_file(r#"{"standard": 79, "deluxe": 129, "suite": 199, "penthouse": 999}"#);
    assert!(RateTable::from_file(file.path()).is_err());
}

#[test]
fn test_missing_room_type_is_rejected() {
    let file = rates_file(r#"{"standard": 79, "deluxe": 129}"#);
    assert!(RateTable::from_file(file.path()).is_err());
}

#[test]
fn test_zero_rate_is_rejected() {
    let file = rates_file(r#"{"standard": 0, "deluxe": 129, "suite": 199}"#);
    let err = RateTable::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("nightly rates must be positive"));
}

#[test]
fn test_load_without_any_file_succeeds() {
    // Falls back to the built-in table unless a rates.json happens to exist in
    // the user config dir.
    assert!(RateTable::load(None).is_ok());
}

#[test]
fn test_round_trip_through_json() {
    let rates = RateTable {
        standard: 88,
        deluxe: 166,
        suite: 333,
    };
    let json = serde_json::to_string(&rates).unwrap();
    let back: RateTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rates);
}
