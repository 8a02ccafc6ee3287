//! Network layer: wire types and the authentication API port.

pub mod api;
pub mod types;
