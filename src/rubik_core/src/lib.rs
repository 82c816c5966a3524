#![warn(clippy::pedantic)]

//! A model of an N×N twisty cube: six grids of colored tiles and the slice
//! twists that move tiles between them.
//!
//! Every twist goes through a single ring rotation primitive. Twists about
//! the axis that primitive can't reach directly are made by spinning the
//! whole cube so that they can.

pub mod cube;
pub mod error;
pub mod face;
pub mod face_grid;
pub mod moves;
pub(crate) mod ring;

pub use cube::Cube;
pub use error::{CubeError, Result};
pub use face::{Color, DEFAULT_COLORS, FaceId};
pub use face_grid::{FaceGrid, Tile};
pub use moves::{Move, MoveKind};
