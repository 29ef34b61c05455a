use crate::core::data::surface::{Surface, SurfaceError};
use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;
use crate::core::fractals::mandelbrot::palette::Palette;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_KEYBOARD_ZOOM_FACTOR: f64 = 1.5;
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f64 = 1.2;
pub const DEFAULT_PAN_STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Surface(SurfaceError),
    ZeroMaxIterations,
    InvalidZoomFactor { name: &'static str, value: f64 },
    InvalidPanStep { value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "invalid surface: {}", err),
            Self::ZeroMaxIterations => write!(f, "max iterations must be greater than zero"),
            Self::InvalidZoomFactor { name, value } => {
                write!(f, "{} must be finite and greater than 1: {}", name, value)
            }
            Self::InvalidPanStep { value } => {
                write!(f, "pan step must be finite and greater than 0: {}", value)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SurfaceError> for ConfigError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

/// Start-up settings for an explorer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// Applied by the zoom-in / zoom-out keys, anchored at the surface centre.
    pub keyboard_zoom_factor: f64,
    /// Applied per wheel notch, anchored at the cursor.
    pub wheel_zoom_factor: f64,
    /// Pan distance per arrow key press at zoom 1.0.
    pub pan_step: f64,
    pub palette: Palette,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: MAX_ITERATIONS,
            keyboard_zoom_factor: DEFAULT_KEYBOARD_ZOOM_FACTOR,
            wheel_zoom_factor: DEFAULT_WHEEL_ZOOM_FACTOR,
            pan_step: DEFAULT_PAN_STEP,
            palette: Palette::default(),
        }
    }
}

fn check_zoom_factor(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidZoomFactor { name, value })
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.surface()?;

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        check_zoom_factor("keyboard zoom factor", self.keyboard_zoom_factor)?;
        check_zoom_factor("wheel zoom factor", self.wheel_zoom_factor)?;

        if !(self.pan_step.is_finite() && self.pan_step > 0.0) {
            return Err(ConfigError::InvalidPanStep {
                value: self.pan_step,
            });
        }

        Ok(())
    }

    pub fn surface(&self) -> Result<Surface, SurfaceError> {
        Surface::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExplorerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.surface().unwrap(), Surface::new(800, 600).unwrap());
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.palette, Palette::Classic);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = ExplorerConfig {
            width: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Surface(SurfaceError::InvalidSize {
                width: 0,
                height: 600
            }))
        );
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let config = ExplorerConfig {
            max_iterations: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_zoom_factors_must_grow() {
        for bad in [1.0, 0.5, -2.0, f64::INFINITY] {
            let keyboard = ExplorerConfig {
                keyboard_zoom_factor: bad,
                ..ExplorerConfig::default()
            };
            let wheel = ExplorerConfig {
                wheel_zoom_factor: bad,
                ..ExplorerConfig::default()
            };

            assert!(matches!(
                keyboard.validate(),
                Err(ConfigError::InvalidZoomFactor { name: "keyboard zoom factor", .. })
            ));
            assert!(matches!(
                wheel.validate(),
                Err(ConfigError::InvalidZoomFactor { name: "wheel zoom factor", .. })
            ));
        }
    }

    #[test]
    fn test_pan_step_must_be_positive() {
        let config = ExplorerConfig {
            pan_step: 0.0,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::InvalidPanStep { value: 0.0 }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidPanStep { value: -1.0 }.to_string(),
            "pan step must be finite and greater than 0: -1"
        );
        assert_eq!(
            ConfigError::ZeroMaxIterations.to_string(),
            "max iterations must be greater than zero"
        );
    }
}
