use thiserror::Error;

/// Everything that can go wrong when building or twisting a cube.
///
/// All of these are precondition violations. They are checked before any
/// tile is touched, so a call that returns an error leaves the cube exactly
/// as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must be at least 1x1, but a size of {size} was requested")]
    InvalidDimension { size: usize },
    #[error("Index {index} is out of range, expected a value between 0 and {}", .size.saturating_sub(1))]
    IndexError { index: usize, size: usize },
    #[error("Expected a line of {expected} tiles but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Not a valid face: {0}")]
    InvalidFace(String),
    #[error("Malformed ring, this is a bug in the rotation engine: {0}")]
    InvalidRing(String),
}

pub type Result<T, E = CubeError> = std::result::Result<T, E>;

/// Check that `index` addresses a line of a grid of side `size`.
pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(CubeError::IndexError { index, size })
    }
}
