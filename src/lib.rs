//! # covolt-client
//!
//! Client-side session layer for the Covolt web front-end. Holds the
//! authentication state (who is logged in, with which roles and
//! permissions), persists it across page reloads, and performs the login
//! call against the backend.
//!
//! The crate targets WASM-in-browser, but everything browser-specific
//! (`localStorage`, HTTP via `gloo-net`) sits behind the `hydrate` feature
//! and a pair of ports — [`storage::Storage`] and [`net::api::AuthApi`] —
//! so the session logic itself builds and tests natively with in-memory
//! substitutes.

pub mod net;
pub mod state;
pub mod storage;
