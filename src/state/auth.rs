//! Authentication state and the session that owns it.
//!
//! DESIGN
//! ======
//! `AuthSession` is the single owner of both the persisted fields (behind a
//! `Storage` port) and the in-memory `AuthState`, so the two cannot drift:
//! a successful login writes all five persisted fields before the state is
//! replaced, and failure paths mutate nothing.
//!
//! In the full Leptos integration the state lives in an `RwSignal` provided
//! via context; the model itself is plain data.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{AuthApi, AuthError};
use crate::net::types::{Credentials, User};
use crate::storage::Storage;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const REFRESH_TOKEN_KEY: &str = "refreshToken";
const USER_KEY: &str = "user";
const ROLES_KEY: &str = "roles";
const PERMISSIONS_KEY: &str = "permissions";

/// Authentication state tracking the current user and their authorities.
///
/// Roles and permissions keep the order the endpoint returned them in;
/// membership is what matters, checked via [`AuthSession::has_role`] and
/// [`AuthSession::has_permission`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

/// Decode a persisted JSON field, falling back to the default on corrupt
/// text so a damaged store degrades to "logged out" instead of failing
/// restoration.
fn decode_or_default<T>(key: &str, raw: Option<String>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match raw {
        None => T::default(),
        Some(text) => match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("corrupt `{key}` field in storage, using default: {err}");
                T::default()
            }
        },
    }
}

/// Decode the persisted profile.
///
/// Serde's derived struct decode also accepts JSON sequences, so require an
/// object before decoding; anything else in the `user` field is corrupt and
/// degrades to `None`. A stored JSON `null` reads as "no profile".
fn decode_user(raw: Option<String>) -> Option<User> {
    let text = raw?;
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(serde_json::Value::Null) => None,
        Ok(value @ serde_json::Value::Object(_)) => match serde_json::from_value(value) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("corrupt `user` field in storage, using default: {err}");
                None
            }
        },
        Ok(_) => {
            log::warn!("corrupt `user` field in storage, using default: not an object");
            None
        }
        Err(err) => {
            log::warn!("corrupt `user` field in storage, using default: {err}");
            None
        }
    }
}

/// The client session: persisted fields plus the in-memory [`AuthState`].
#[derive(Clone, Debug)]
pub struct AuthSession<S: Storage> {
    storage: S,
    state: AuthState,
}

impl<S: Storage> AuthSession<S> {
    /// Restore the session from the persisted fields.
    ///
    /// Authenticated iff a non-empty access token is stored. Each of the
    /// profile and authority fields decodes independently; a missing or
    /// corrupt field yields its default. Restoration never fails.
    pub fn restore(storage: S) -> Self {
        let authenticated = storage
            .get(ACCESS_TOKEN_KEY)
            .is_some_and(|token| !token.is_empty());
        let user = decode_user(storage.get(USER_KEY));
        let roles = decode_or_default::<Vec<String>>(ROLES_KEY, storage.get(ROLES_KEY));
        let permissions = decode_or_default(PERMISSIONS_KEY, storage.get(PERMISSIONS_KEY));

        Self {
            storage,
            state: AuthState {
                authenticated,
                user,
                roles,
                permissions,
            },
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.state.roles
    }

    #[must_use]
    pub fn permissions(&self) -> &[String] {
        &self.state.permissions
    }

    /// Whether the current user carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.state.roles.iter().any(|r| r == role)
    }

    /// Whether the current user carries the given permission.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.state.permissions.iter().any(|p| p == permission)
    }

    /// The storage port backing this session.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Log in with the given credentials.
    ///
    /// One request, no retry, no local credential validation. On success the
    /// two tokens are persisted verbatim and the profile and authority
    /// fields as JSON, then the in-memory state is replaced.
    ///
    /// # Errors
    ///
    /// Returns the typed failure reason; neither the in-memory state nor the
    /// persisted fields change on any failure path.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        credentials: &Credentials,
    ) -> Result<(), AuthError> {
        let resp = match api.login(credentials).await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("login failed: {err}");
                return Err(err);
            }
        };

        let user = resp.user();
        self.storage.set(ACCESS_TOKEN_KEY, &resp.access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &resp.refresh_token);
        self.persist_authorities(&user, &resp.roles, &resp.permissions);

        self.state = AuthState {
            authenticated: true,
            user: Some(user),
            roles: resp.roles,
            permissions: resp.permissions,
        };
        Ok(())
    }

    /// Log out: best-effort server-side invalidation, then clear everything.
    ///
    /// The persisted fields and the in-memory state are cleared even when
    /// the endpoint call fails, so an unreachable backend cannot pin the
    /// client in a logged-in state.
    pub async fn logout<A: AuthApi>(&mut self, api: &A) {
        if let Some(refresh_token) = self.storage.get(REFRESH_TOKEN_KEY) {
            api.logout(&refresh_token).await;
        }
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(ROLES_KEY);
        self.storage.remove(PERMISSIONS_KEY);
        self.state = AuthState::default();
    }

    /// Re-fetch the current user's profile and authorities.
    ///
    /// Rewrites the `user`/`roles`/`permissions` fields; the tokens and the
    /// authenticated flag are untouched.
    ///
    /// # Errors
    ///
    /// Fails with `AuthError::InvalidCredentials` when no access token is
    /// stored, or with the endpoint's failure reason; nothing is mutated on
    /// failure.
    pub async fn refresh_authorities<A: AuthApi>(&mut self, api: &A) -> Result<(), AuthError> {
        let Some(token) = self
            .storage
            .get(ACCESS_TOKEN_KEY)
            .filter(|t| !t.is_empty())
        else {
            return Err(AuthError::InvalidCredentials);
        };

        let authorities = api.fetch_authorities(&token).await?;
        let user = authorities.user();
        self.persist_authorities(&user, &authorities.roles, &authorities.permissions);
        self.state.user = Some(user);
        self.state.roles = authorities.roles;
        self.state.permissions = authorities.permissions;
        Ok(())
    }

    /// Serialize and persist the `user`/`roles`/`permissions` fields.
    fn persist_authorities(&mut self, user: &User, roles: &[String], permissions: &[String]) {
        if let Ok(json) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &json);
        }
        if let Ok(json) = serde_json::to_string(roles) {
            self.storage.set(ROLES_KEY, &json);
        }
        if let Ok(json) = serde_json::to_string(permissions) {
            self.storage.set(PERMISSIONS_KEY, &json);
        }
    }
}
