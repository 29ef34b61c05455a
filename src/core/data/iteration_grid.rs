use crate::core::data::point::Point;
use crate::core::data::surface::Surface;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    BoundsMismatch { surface_size: usize, cells: usize },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                surface_size,
                cells,
            } => {
                write!(
                    f,
                    "surface size {} does not match cell count {}",
                    surface_size, cells
                )
            }
        }
    }
}

impl Error for IterationGridError {}

/// Escape-time counts for every pixel of one frame, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    surface: Surface,
    cells: Vec<u32>,
}

impl IterationGrid {
    pub fn from_cells(surface: Surface, cells: Vec<u32>) -> Result<Self, IterationGridError> {
        if surface.size() != cells.len() {
            return Err(IterationGridError::BoundsMismatch {
                surface_size: surface.size(),
                cells: cells.len(),
            });
        }

        Ok(Self { surface, cells })
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        self.surface.index_of(point).map(|index| self.cells[index])
    }

    /// Number of cells that reached `max_iterations`, i.e. pixels inside the set.
    #[must_use]
    pub fn count_at(&self, max_iterations: u32) -> usize {
        self.cells.iter().filter(|&&n| n == max_iterations).count()
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }
}
