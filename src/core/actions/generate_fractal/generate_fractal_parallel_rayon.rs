use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// The output is allocated up front and split into one disjoint slice per
/// row. Rayon hands rows to idle workers as they free up, which balances
/// the very uneven per-row cost between interior and exterior regions.
/// Every cell is written exactly once by exactly one worker, so no locking
/// is needed, and the result is identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Default + Clone,
{
    let surface = algorithm.surface();
    let width = surface.width() as usize;
    let mut cells = vec![Alg::Success::default(); surface.size()];

    cells
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = algorithm.compute(Point {
                    x: x as i32,
                    y: y as i32,
                });
            }
        });

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::surface::Surface;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        surface: Surface,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.x as u64) * 1_000 + pixel.y as u64
        }

        fn surface(&self) -> Surface {
            self.surface
        }
    }

    struct CountingAlgorithm {
        surface: Surface,
        calls: AtomicUsize,
    }

    impl FractalAlgorithm for CountingAlgorithm {
        type Success = u32;

        fn compute(&self, _: Point) -> Self::Success {
            self.calls.fetch_add(1, Ordering::Relaxed);
            1
        }

        fn surface(&self) -> Surface {
            self.surface
        }
    }

    fn stub(width: u32, height: u32) -> StubSuccessAlgorithm {
        StubSuccessAlgorithm {
            surface: Surface::new(width, height).unwrap(),
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = stub(11, 9);

        assert_eq!(
            generate_fractal_parallel_rayon(&algorithm),
            generate_fractal_serial(&algorithm)
        );
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let algorithm = stub(1, 1);

        assert_eq!(generate_fractal_parallel_rayon(&algorithm), vec![0]);
    }

    #[test]
    fn test_rayon_with_single_row_and_single_column() {
        let row = stub(17, 1);
        let column = stub(1, 17);

        assert_eq!(generate_fractal_parallel_rayon(&row), generate_fractal_serial(&row));
        assert_eq!(generate_fractal_parallel_rayon(&column), generate_fractal_serial(&column));
    }

    #[test]
    fn test_rayon_with_large_rect() {
        let algorithm = stub(301, 257);

        assert_eq!(
            generate_fractal_parallel_rayon(&algorithm),
            generate_fractal_serial(&algorithm)
        );
    }

    #[test]
    fn test_rayon_computes_each_cell_exactly_once() {
        let algorithm = CountingAlgorithm {
            surface: Surface::new(64, 48).unwrap(),
            calls: AtomicUsize::new(0),
        };

        let cells = generate_fractal_parallel_rayon(&algorithm);

        assert_eq!(cells.len(), 64 * 48);
        assert!(cells.iter().all(|&c| c == 1));
        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 64 * 48);
    }
}
