//! HTTP layer: wire types and the REST gateway.

pub mod api;
pub mod types;
