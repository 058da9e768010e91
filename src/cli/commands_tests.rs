use super::*;
use crate::error::{SandwichError, ValidationError};
use std::path::PathBuf;

// =========================================================================
// format_row Tests
// =========================================================================

#[test]
fn test_format_row() {
    assert_eq!(format_row(&[40, 30, 20, 10, 0, -10]), "[40, 30, 20, 10, 0, -10]");
}

#[test]
fn test_format_row_empty() {
    assert_eq!(format_row(&[]), "[]");
}

// =========================================================================
// validate Tests
// =========================================================================

#[test]
fn test_validate_ok() {
    assert!(validate("10,20,30,40,50,60").is_ok());
}

#[test]
fn test_validate_wrong_count() {
    let err = validate("10,20,30").unwrap_err();
    assert!(matches!(
        err,
        SandwichError::InvalidData(ValidationError::WrongCount { provided: 3, .. })
    ));
}

#[test]
fn test_validate_not_a_number() {
    let err = validate("10,20,abc,40,50,60").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid data: invalid literal for integer: 'abc'"
    );
}

// =========================================================================
// surplus Tests
// =========================================================================

#[test]
fn test_surplus_ok() {
    assert!(surplus("50,50,50,50,50,50", "10,20,30,40,50,60").is_ok());
}

#[test]
fn test_surplus_bad_stock() {
    let err = surplus("50,50", "10,20,30,40,50,60").unwrap_err();
    assert!(matches!(err, SandwichError::InvalidData(_)));
}

#[test]
fn test_surplus_overflow() {
    let max = i64::MAX.to_string();
    let sales = vec![max.as_str(); 6].join(",");
    let err = surplus("-10,-10,-10,-10,-10,-10", &sales).unwrap_err();
    assert!(matches!(err, SandwichError::Overflow(_)));
}

#[test]
fn test_surplus_bad_sales() {
    assert!(surplus("50,50,50,50,50,50", "ten").is_err());
}

// =========================================================================
// run Tests
// =========================================================================

#[test]
fn test_run_missing_credentials() {
    let config = Config {
        credentials: PathBuf::from("missing-creds-for-test.json"),
        ..Config::default()
    };
    let err = run(&config, false).unwrap_err();
    assert!(matches!(err, SandwichError::Credentials(_)));

    let err = run(&config, true).unwrap_err();
    assert!(matches!(err, SandwichError::Credentials(_)));
}
