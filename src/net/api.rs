//! Authentication API port and its HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with paths relative
//! to the serving origin. The `AuthApi` trait is the seam: tests and native
//! callers supply their own implementation instead of the browser transport.
//!
//! ERROR HANDLING
//! ==============
//! Transport and endpoint failures map onto `AuthError` so callers can
//! branch on cause instead of inspecting a bare boolean.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{Credentials, LoginResponse, UserAuthorities};

/// Reason a login or authority fetch failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint rejected the credentials or the session.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Any other non-success status from the endpoint.
    #[error("server error (status {0})")]
    Server(u16),
    /// A success status whose body did not decode.
    #[error("malformed response body")]
    Malformed,
}

/// Map a non-success HTTP status to the failure it represents.
///
/// 401 and 403 both read as "bad credentials" because the backend answers
/// 403 on the same endpoints for disabled accounts.
#[must_use]
pub fn status_error(status: u16) -> AuthError {
    match status {
        401 | 403 => AuthError::InvalidCredentials,
        other => AuthError::Server(other),
    }
}

/// Port for the backend's authentication endpoints.
///
/// `HttpAuthApi` implements this against the real backend; tests use an
/// in-memory fake.
// Single-threaded browser runtime; futures need no Send bound.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /api/auth/login` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` describing why the endpoint or the transport
    /// rejected the attempt.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;

    /// Best-effort `POST /api/auth/logout` invalidating `refresh_token`.
    /// The outcome is ignored by callers.
    async fn logout(&self, refresh_token: &str);

    /// `GET /api/auth/user-authorities` for the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` describing why the fetch failed.
    async fn fetch_authorities(&self, access_token: &str) -> Result<UserAuthorities, AuthError>;
}

/// `AuthApi` implementation speaking to the backend over HTTP.
///
/// Paths are relative to the serving origin, so the same build works behind
/// any host. Only meaningful in the browser; outside `hydrate` every call
/// reports a network error.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/login")
                .json(credentials)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|_| AuthError::Malformed)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn logout(&self, refresh_token: &str) {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            #[serde(rename_all = "camelCase")]
            struct Body<'a> {
                refresh_token: &'a str,
            }
            if let Ok(req) =
                gloo_net::http::Request::post("/api/auth/logout").json(&Body { refresh_token })
            {
                let _ = req.send().await;
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
        }
    }

    async fn fetch_authorities(&self, access_token: &str) -> Result<UserAuthorities, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/auth/user-authorities")
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            resp.json::<UserAuthorities>()
                .await
                .map_err(|_| AuthError::Malformed)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(AuthError::Network("not available outside the browser".to_owned()))
        }
    }
}
