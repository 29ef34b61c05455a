use crate::core::data::iteration_grid::IterationGridError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
    Grid(IterationGridError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
            Self::Grid(err) => write!(f, "iteration grid error: {}", err),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IterationGridError> for MandelbrotError {
    fn from(err: IterationGridError) -> Self {
        Self::Grid(err)
    }
}
