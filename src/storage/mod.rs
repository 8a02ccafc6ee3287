//! Storage port for the persisted session fields.
//!
//! DESIGN
//! ======
//! The session never touches `localStorage` directly; it goes through the
//! `Storage` trait so tests and native callers can substitute an in-memory
//! implementation for the browser store.

pub mod browser;
pub mod memory;

pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

/// Key/value storage port for persisted session fields.
///
/// Writes are infallible by contract: implementations that can fail
/// (quota, privacy mode) drop the write, matching how `localStorage`
/// failures are treated in the browser implementation.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove the value stored under `key`, if present.
    fn remove(&mut self, key: &str);
}
