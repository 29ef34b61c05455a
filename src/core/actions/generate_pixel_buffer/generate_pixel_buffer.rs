use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours a finished iteration grid into a packed RGB frame.
///
/// Takes the whole grid, so a frame is only ever built from a complete
/// render.
pub fn generate_pixel_buffer<CMap: ColourMap<u32>>(
    grid: &IterationGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let surface = grid.surface();
    let mut buffer: PixelBufferData = Vec::with_capacity(surface.size() * BYTES_PER_PIXEL);

    for &iterations in grid.cells() {
        let Colour { r, g, b } = mapper
            .map(iterations)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(surface, buffer)?)
}
