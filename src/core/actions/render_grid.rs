use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::surface::Surface;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Computes the escape-time count of every pixel in `surface` for the
/// given viewport, in parallel. Always a full recompute.
pub fn render_grid(
    viewport: &ViewportState,
    surface: Surface,
    max_iterations: u32,
) -> Result<IterationGrid, MandelbrotError> {
    let algorithm = MandelbrotAlgorithm::new(surface, *viewport, max_iterations)?;
    let cells = generate_fractal_parallel_rayon(&algorithm);

    Ok(IterationGrid::from_cells(surface, cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;

    #[test]
    fn test_parallel_grid_matches_sequential_evaluation() {
        let surface = Surface::new(160, 120).unwrap();
        let viewport = ViewportState::new(3.0, Complex::new(-0.75, 0.1)).unwrap();
        let algorithm = MandelbrotAlgorithm::new(surface, viewport, MAX_ITERATIONS).unwrap();

        let grid = render_grid(&viewport, surface, MAX_ITERATIONS).unwrap();

        assert_eq!(grid.cells(), generate_fractal_serial(&algorithm).as_slice());
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let surface = Surface::new(97, 61).unwrap();
        let viewport = ViewportState::default();

        let first = render_grid(&viewport, surface, 200).unwrap();
        let second = render_grid(&viewport, surface, 200).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_default_view_has_interior_and_exterior() {
        let surface = Surface::new(80, 60).unwrap();
        let grid = render_grid(&ViewportState::default(), surface, MAX_ITERATIONS).unwrap();

        assert_eq!(grid.cells().len(), 80 * 60);
        assert_eq!(grid.get(Point { x: 40, y: 30 }), Some(MAX_ITERATIONS));
        assert_eq!(grid.get(Point { x: 0, y: 0 }), Some(1));
        assert!(grid.cells().iter().all(|&n| n <= MAX_ITERATIONS));
    }

    #[test]
    fn test_grid_covers_every_pixel_of_odd_surfaces() {
        for (width, height) in [(1, 1), (1, 7), (13, 1), (33, 17)] {
            let surface = Surface::new(width, height).unwrap();

            let grid = render_grid(&ViewportState::default(), surface, 50).unwrap();

            assert_eq!(grid.surface(), surface);
            assert_eq!(grid.cells().len(), surface.size());
        }
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let surface = Surface::new(8, 8).unwrap();

        assert_eq!(
            render_grid(&ViewportState::default(), surface, 0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }
}
