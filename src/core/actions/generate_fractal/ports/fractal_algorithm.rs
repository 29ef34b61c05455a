use crate::core::data::point::Point;
use crate::core::data::surface::Surface;

/// Per-pixel computation run over a whole surface.
///
/// `compute` must depend only on `pixel` so cells can be evaluated in any
/// order on any thread.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn surface(&self) -> Surface;
}
