//! Pure domain: escape-time evaluation, viewport mapping, parallel grid
//! rendering and palette colouring. No I/O and no host dependencies.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
