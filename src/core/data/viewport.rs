use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_CENTRE: Complex = Complex::new(-0.5, 0.0);

/// Zoom bounds. Inside them the pixel scale `4 / (zoom * side)` stays finite
/// and non-zero for any surface side that fits an `i32`.
pub const MIN_ZOOM: f64 = 1e-300;
pub const MAX_ZOOM: f64 = 1e290;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    InvalidScaleFactor { factor: f64 },
    InvalidCentre { centre: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must lie between {:e} and {:e}: {}", MIN_ZOOM, MAX_ZOOM, zoom)
            }
            Self::InvalidScaleFactor { factor } => {
                write!(f, "zoom factor must be finite and greater than zero: {}", factor)
            }
            Self::InvalidCentre { centre } => {
                write!(f, "viewport centre must be finite: {} + {}i", centre.real, centre.imag)
            }
        }
    }
}

impl Error for ViewportError {}

fn is_valid_zoom(zoom: f64) -> bool {
    (MIN_ZOOM..=MAX_ZOOM).contains(&zoom)
}

fn is_valid_factor(factor: f64) -> bool {
    factor.is_finite() && factor > 0.0
}

/// Which part of the complex plane is on screen.
///
/// `zoom` is a scale factor where 1.0 fits a span of 4.0 across the
/// shorter side of the surface. Zoom always lies in `[MIN_ZOOM, MAX_ZOOM]`
/// and the centre is always finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    centre: Complex,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            centre: DEFAULT_CENTRE,
        }
    }
}

impl ViewportState {
    pub fn new(zoom: f64, centre: Complex) -> Result<Self, ViewportError> {
        if !is_valid_zoom(zoom) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !centre.is_finite() {
            return Err(ViewportError::InvalidCentre { centre });
        }

        Ok(Self { zoom, centre })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        self.centre
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Multiplies the zoom by `factor`, leaving the centre where it is.
    ///
    /// Leaves the viewport untouched and returns an error if the factor or
    /// the resulting zoom would break the zoom invariant.
    pub fn scale_by(&mut self, factor: f64) -> Result<(), ViewportError> {
        if !is_valid_factor(factor) {
            return Err(ViewportError::InvalidScaleFactor { factor });
        }

        let zoom = self.zoom * factor;
        if !is_valid_zoom(zoom) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        self.zoom = zoom;
        Ok(())
    }

    /// Shifts the centre by `step / zoom` along each axis, so the apparent
    /// pan distance on screen does not depend on the zoom level.
    ///
    /// Leaves the viewport untouched if the new centre would not be finite.
    pub fn pan(&mut self, step_real: f64, step_imag: f64) -> Result<(), ViewportError> {
        self.set_centre(Complex {
            real: self.centre.real + step_real / self.zoom,
            imag: self.centre.imag + step_imag / self.zoom,
        })
    }

    pub fn set_centre(&mut self, centre: Complex) -> Result<(), ViewportError> {
        if !centre.is_finite() {
            return Err(ViewportError::InvalidCentre { centre });
        }

        self.centre = centre;
        Ok(())
    }
}
