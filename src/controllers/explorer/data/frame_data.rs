use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::palette::Palette;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub frame_number: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
    pub viewport: ViewportState,
    pub palette: Palette,
}
