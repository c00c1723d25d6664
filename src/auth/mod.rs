//! Bearer token persistence and validation.

pub mod token;
pub mod token_store;
