use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::surface::Surface;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn surface_to_buffer_size(surface: Surface) -> usize {
    surface.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, surface: Surface },
    BoundsMismatch {
        surface_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                surface_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "surface byte size {} does not match buffer size {}",
                    surface_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, surface } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    pixel.x,
                    pixel.y,
                    surface.width(),
                    surface.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB frame, three bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    surface: Surface,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            buffer: vec![0; surface_to_buffer_size(surface)],
        }
    }

    pub fn from_data(surface: Surface, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let surface_size = surface_to_buffer_size(surface);

        if surface_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                surface_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { surface, buffer })
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.surface.index_of(pixel)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .surface
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                surface: self.surface,
            })?
            * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
