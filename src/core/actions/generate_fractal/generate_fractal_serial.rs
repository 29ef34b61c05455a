use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread, row-major.
///
/// Reference ordering for [`generate_fractal_parallel_rayon`](super::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon).
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let surface = algorithm.surface();
    let width = surface.width() as i32;
    let height = surface.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
