//! Wire types shared with the backend's authentication endpoints.
//!
//! Field names follow the backend's JSON (camelCase). The same serialized
//! form is reused for the persisted `user`/`roles`/`permissions` fields, so
//! stored values round-trip verbatim with what the endpoint returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// Login request body: the identifier/secret pair.
///
/// Transient: serialized into the request and dropped, never persisted.
/// Shape constraints (non-empty fields) are the endpoint's contract and
/// are not enforced locally.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl LoginResponse {
    /// Assemble the profile embedded in the response.
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

/// Success body of `GET /api/auth/user-authorities`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthorities {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl UserAuthorities {
    /// Assemble the profile embedded in the response.
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}
