mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use adapters::pixel_format::{PixelFormatError, clear_rgba, copy_rgb_to_rgba, rgba_len_for};
pub use controllers::explorer::config::{ConfigError, ExplorerConfig};
pub use controllers::explorer::controller::ExplorerController;
pub use controllers::explorer::data::frame_data::FrameData;
pub use controllers::explorer::errors::RenderError;
pub use controllers::explorer::events::{EventOutcome, InputEvent, Key};
pub use controllers::explorer::help::{controls_legend, print_controls_legend};
pub use controllers::explorer::ports::presenter::ExplorerPresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_grid::render_grid;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::surface::{Surface, SurfaceError};
pub use crate::core::data::viewport::{ViewportError, ViewportState};
pub use crate::core::fractals::mandelbrot::algorithm::{
    MAX_ITERATIONS, MandelbrotAlgorithm, escape_time, evaluate,
};
pub use crate::core::fractals::mandelbrot::colour_map::{PaletteColourMap, colour_of, hsv_to_rgb, smoothed};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::palette::Palette;
pub use crate::core::util::viewport_mapping::{complex_to_pixel, pixel_to_complex, zoom_about_pixel};

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
