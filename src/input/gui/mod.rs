//! Windowed front end built on winit for events and pixels for the framebuffer.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
pub mod key_bindings;

pub use commands::run_gui::RunGuiCommand;
