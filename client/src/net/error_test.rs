use super::*;

#[test]
fn from_status_extracts_string_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 400, detail: Some("Email already registered".to_owned()) }
    );
    assert_eq!(err.detail_or("fallback"), "Email already registered");
}

#[test]
fn from_status_tolerates_non_json_body() {
    let err = ApiError::from_status(502, "<html>bad gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
    assert_eq!(err.detail_or("Something went wrong"), "Something went wrong");
}

#[test]
fn transport_and_decode_use_fallback() {
    assert_eq!(ApiError::Transport("offline".to_owned()).detail_or("x"), "x");
    assert_eq!(ApiError::Decode("eof".to_owned()).detail_or("y"), "y");
    assert_eq!(ApiError::Unavailable.detail_or("z"), "z");
}

#[test]
fn status_accessor() {
    assert_eq!(ApiError::from_status(401, "{}").status(), Some(401));
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 404, detail: None };
    assert_eq!(err.to_string(), "request failed with status 404");
}
