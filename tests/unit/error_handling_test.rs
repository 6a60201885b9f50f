use crate::error::{ErrorKind, OjError};

#[test]
fn test_error_creation() {
    let error = OjError::new(ErrorKind::Internal, "Test error", "test_stage");
    assert_eq!(error.message, "Test error");
    assert_eq!(error.stage, "test_stage");
    assert_eq!(error.kind, ErrorKind::Internal);
}

#[test]
fn test_profile_not_found_carries_user() {
    let error = OjError::profile_not_found(42);
    assert_eq!(error.kind, ErrorKind::ProfileNotFound);
    assert!(error.is_not_found());
    assert_eq!(error.context.as_deref(), Some("user_id: 42"));
}

#[test]
fn test_error_display() {
    let error = OjError::new(ErrorKind::ProblemNotFound, "Problem does not exist", "routes")
        .with_context("problem_id: 1000")
        .with_source("catalog");
    let display = format!("{}", error);
    assert!(display.contains("[routes]"));
    assert!(display.contains("problem not found"));
    assert!(display.contains("problem_id: 1000"));
    assert!(display.contains("catalog"));
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: OjError = parse.into();
    assert_eq!(error.kind, ErrorKind::Json);
    assert_eq!(error.source.as_deref(), Some("serde_json"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = OjError::from(io);
    assert_eq!(error.kind, ErrorKind::Io);
    assert!(!error.is_not_found());
}
