use extendz::error::AppError;

#[test]
fn test_app_error_display_missing_token() {
    let error = AppError::MissingToken;
    assert_eq!(error.to_string(), "response carried no access token");
}

#[test]
fn test_app_error_display_session_closed() {
    assert_eq!(AppError::SessionClosed.to_string(), "session closed");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad id".to_string());
    assert_eq!(error.to_string(), "invalid input: bad id");
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("EXTEND_EMAIL missing".to_string());
    assert_eq!(error.to_string(), "configuration error: EXTEND_EMAIL missing");
}

#[test]
fn test_app_error_sign_in_wraps_source() {
    let error = AppError::sign_in(AppError::MissingToken);
    assert!(matches!(&error, AppError::SignIn(inner) if matches!(**inner, AppError::MissingToken)));
    assert_eq!(
        error.to_string(),
        "sign-in failed: response carried no access token"
    );
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
    let error: AppError = io_error.into();
    assert_eq!(error.to_string(), "io error: stdout closed");
}
