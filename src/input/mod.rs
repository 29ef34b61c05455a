//! Input adapters for the explorer.
//!
//! Adapters here receive events from a host window system and translate them
//! into controller input.

#[cfg(feature = "gui")]
pub mod gui;
