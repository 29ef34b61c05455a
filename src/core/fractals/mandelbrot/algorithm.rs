use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::surface::Surface;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::viewport_mapping::pixel_to_complex;

/// Iteration budget. A point that reaches it is treated as inside the set.
pub const MAX_ITERATIONS: u32 = 1000;

/// |z| > 2 means the orbit escapes; compared squared to skip the sqrt.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts steps of `z <- z² + c` from `z = 0` until `|z| > 2` or the
/// budget is spent. Returns `max_iterations` for points that never escape.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iterations += 1;
    }

    iterations
}

#[must_use]
pub fn evaluate(real: f64, imag: f64) -> u32 {
    escape_time(Complex { real, imag }, MAX_ITERATIONS)
}

/// Escape-time evaluation of one frame: pixel in, iteration count out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    surface: Surface,
    viewport: ViewportState,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = pixel_to_complex(pixel.x as f64, pixel.y as f64, &self.viewport, self.surface);

        escape_time(c, self.max_iterations)
    }

    fn surface(&self) -> Surface {
        self.surface
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        surface: Surface,
        viewport: ViewportState,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            surface,
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_inside_the_set() {
        assert_eq!(evaluate(0.0, 0.0), MAX_ITERATIONS);
    }

    #[test]
    fn test_known_interior_points_hit_the_cap() {
        assert_eq!(evaluate(-1.0, 0.0), MAX_ITERATIONS);
        assert_eq!(evaluate(-2.0, 0.0), MAX_ITERATIONS);
        assert_eq!(evaluate(0.0, 1.0), MAX_ITERATIONS);
        assert_eq!(evaluate(0.25, 0.0), MAX_ITERATIONS);
    }

    #[test]
    fn test_points_outside_radius_escape_after_one_step() {
        for &(real, imag) in &[(2.1, 0.0), (0.0, -3.0), (-1.5, 1.5), (100.0, 100.0), (1e300, 0.0)] {
            assert_eq!(evaluate(real, imag), 1, "({}, {})", real, imag);
        }
    }

    #[test]
    fn test_point_on_escape_circle_escapes_quickly() {
        // z: 0 -> 2 -> 6; |2| is not > 2 so one more step is taken.
        assert_eq!(evaluate(2.0, 0.0), 2);
    }

    #[test]
    fn test_escape_count_for_one() {
        // z: 0 -> 1 -> 2 -> 5
        assert_eq!(evaluate(1.0, 0.0), 3);
    }

    #[test]
    fn test_escape_time_respects_custom_budget() {
        assert_eq!(escape_time(Complex::ZERO, 7), 7);
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 2), 2);
    }

    #[test]
    fn test_escape_time_is_bounded_by_budget() {
        for i in -20..=20 {
            for j in -20..=20 {
                let n = evaluate(i as f64 * 0.1, j as f64 * 0.1);
                assert!(n <= MAX_ITERATIONS);
            }
        }
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let surface = Surface::new(4, 4).unwrap();

        assert_eq!(
            MandelbrotAlgorithm::new(surface, ViewportState::default(), 0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_compute_uses_viewport_mapping() {
        let surface = Surface::new(800, 600).unwrap();
        let algorithm =
            MandelbrotAlgorithm::new(surface, ViewportState::default(), MAX_ITERATIONS).unwrap();

        // Pixel (400, 300) is the viewport centre (-0.5, 0.0), inside the set.
        assert_eq!(algorithm.compute(Point { x: 400, y: 300 }), MAX_ITERATIONS);
        // Pixel (0, 0) is (-3.1666, -2.0), outside the escape radius.
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 1);
    }
}
