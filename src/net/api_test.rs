use super::*;

// =============================================================================
// status_error — HTTP status to failure mapping
// =============================================================================

#[test]
fn status_401_is_invalid_credentials() {
    assert_eq!(status_error(401), AuthError::InvalidCredentials);
}

#[test]
fn status_403_is_invalid_credentials() {
    assert_eq!(status_error(403), AuthError::InvalidCredentials);
}

#[test]
fn status_500_is_server_error() {
    assert_eq!(status_error(500), AuthError::Server(500));
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(status_error(418), AuthError::Server(418));
    assert_eq!(status_error(404), AuthError::Server(404));
}

// =============================================================================
// AuthError display
// =============================================================================

#[test]
fn errors_render_their_cause() {
    assert_eq!(
        AuthError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    assert_eq!(AuthError::Server(503).to_string(), "server error (status 503)");
    assert_eq!(AuthError::Malformed.to_string(), "malformed response body");
}
