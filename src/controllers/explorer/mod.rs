pub mod config;
pub mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod help;
pub mod ports;
