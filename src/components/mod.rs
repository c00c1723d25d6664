//! Shared UI components.

pub mod loading_screen;
pub mod nav_bar;
