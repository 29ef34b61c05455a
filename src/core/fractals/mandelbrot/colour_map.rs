use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::palette::Palette;
use std::error::Error;
use std::f64::consts::{LN_2, TAU};

const SMOOTHING_PERIOD: f64 = 256.0;

/// Continuous iteration count folded into `[0, 1)`.
///
/// `n + 1 - ln(ln(sqrt(n))) / ln 2` is undefined for `n < 2` (it takes the
/// log of zero or of a negative), so those counts map to 0.0.
#[must_use]
pub fn smoothed(iterations: u32) -> f64 {
    if iterations < 2 {
        return 0.0;
    }

    let n = iterations as f64;
    let continuous = n + 1.0 - n.sqrt().ln().ln() / LN_2;

    continuous.rem_euclid(SMOOTHING_PERIOD) / SMOOTHING_PERIOD
}

fn channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

/// Six-sector HSV to RGB. Hue wraps, so 1.25 is treated like 0.25.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let sector = (hue * 6.0).floor();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Colour for an iteration count. Counts at or above `max_iterations` are
/// inside the set and always black.
#[must_use]
pub fn colour_of(iterations: u32, palette: Palette, max_iterations: u32) -> Colour {
    if iterations >= max_iterations {
        return Colour::BLACK;
    }

    let s = smoothed(iterations);

    match palette {
        Palette::Classic => hsv_to_rgb(0.6 + 0.4 * s, 0.8, 1.0),
        Palette::Fire => hsv_to_rgb((0.2 * s) % 1.0, 0.8, (0.5 + s).min(1.0)),
        Palette::Electric => hsv_to_rgb(0.5 + 0.3 * s, 0.8 + 0.2 * (TAU * s).sin(), 1.0),
        Palette::Ocean => hsv_to_rgb(0.3 + 0.3 * s, 0.8, 1.0),
        Palette::Grayscale => Colour::grey(channel(1.0 - s)),
    }
}

/// [`ColourMap`] adapter binding a palette to an iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColourMap {
    palette: Palette,
    max_iterations: u32,
}

impl ColourMap<u32> for PaletteColourMap {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        Ok(colour_of(iterations, self.palette, self.max_iterations))
    }

    fn display_name(&self) -> &str {
        self.palette.display_name()
    }
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }
}
