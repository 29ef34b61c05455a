use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Fractal(MandelbrotError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractal(err) => write!(f, "fractal render failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "colouring failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Fractal(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}
