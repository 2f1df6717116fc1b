use std::fs;

use facesync::error::AppError;
use facesync::names::load_names;

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.csv");

    match load_names(&path) {
        Err(AppError::NamesFileNotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected missing file error, got {other:?}"),
    }
}

#[test]
fn header_row_named_name_is_excluded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("active.csv");
    fs::write(&path, "name\nJohn Doe\nJane Smith\n").expect("write csv");

    let names = load_names(&path).expect("names load");

    assert_eq!(names.len(), 2);
    assert!(!names.contains("name"));
}

#[test]
fn first_row_real_name_is_included() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("active.csv");
    fs::write(&path, "John Doe,Sales\nJane Smith,Ops\n").expect("write csv");

    let names = load_names(&path).expect("names load");

    assert!(names.contains("john doe"));
    assert!(names.contains("JANE SMITH"));
}

#[test]
fn byte_order_mark_and_crlf_are_handled() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("excel.csv");
    fs::write(&path, "\u{feff}Name,Team\r\nJohn Doe,Sales\r\n").expect("write csv");

    let names = load_names(&path).expect("names load");

    assert_eq!(names.len(), 1);
    assert!(names.contains("john doe"));
}
