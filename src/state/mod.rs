//! Shared application state provided via Leptos context.

pub mod auth;
pub mod cart;
