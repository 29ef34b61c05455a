pub mod colour;
pub mod complex;
pub mod iteration_grid;
pub mod pixel_buffer;
pub mod point;
pub mod surface;
pub mod viewport;
