use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use itertools::izip;
use log::debug;

use crate::{
    error::{CubeError, Result},
    face::{Color, FaceId},
    face_grid::{FaceGrid, Tile},
};

/// The six face grids of a cube, addressable by [`FaceId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Faces([FaceGrid; 6]);

impl Index<FaceId> for Faces {
    type Output = FaceGrid;

    fn index(&self, index: FaceId) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl IndexMut<FaceId> for Faces {
    fn index_mut(&mut self, index: FaceId) -> &mut Self::Output {
        &mut self.0[index as usize]
    }
}

/// An N×N cube.
///
/// Faces are stored as seen from outside the cube, laid out like the
/// usual unfolded net:
///
/// ```text
///        Top
/// Left  Front  Right  Back
///       Bottom
/// ```
///
/// The four side faces have row 0 along their top edge. Top has row 0
/// along the edge it shares with Back, and Bottom has row 0 along the edge
/// it shares with Front. Every face has column 0 on the left of that
/// picture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    pub(crate) faces: Faces,
    /// The home face whose stickers currently sit in the front slot. Only
    /// differs from `Front` in the middle of a move that reorients.
    pub(crate) current_front: FaceId,
    size: usize,
}

impl Cube {
    /// Create a solved cube with `size` tiles along each edge.
    ///
    /// # Errors
    ///
    /// If `size` is zero.
    pub fn new(size: usize) -> Result<Cube> {
        if size < 1 {
            return Err(CubeError::InvalidDimension { size });
        }

        debug!("Creating a {size}x{size} cube");
        Ok(Cube {
            faces: Faces(FaceId::ALL.map(|face| FaceGrid::new(size, face.default_color()))),
            current_front: FaceId::Front,
            size,
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn current_front(&self) -> FaceId {
        self.current_front
    }

    /// Borrow the grid of `face`.
    #[must_use]
    pub fn face(&self, face: FaceId) -> &FaceGrid {
        &self.faces[face]
    }

    /// Copy out the colors of `face`, row by row.
    #[must_use]
    pub fn face_snapshot(&self, face: FaceId) -> Vec<Vec<Color>> {
        self.faces[face].colors()
    }

    /// Like [`Cube::face_snapshot`] for callers that only have a raw face
    /// number, in [`FaceId::ALL`] order.
    ///
    /// # Errors
    ///
    /// If `index` does not name one of the six faces.
    pub fn face_snapshot_by_index(&self, index: u8) -> Result<Vec<Vec<Color>>> {
        Ok(self.face_snapshot(FaceId::try_from(index)?))
    }

    /// Whether every face is a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        FaceId::ALL.iter().all(|&face| self.faces[face].is_uniform())
    }
}

fn letters(row: &[Tile]) -> String {
    row.iter().map(|tile| tile.color().letter()).collect()
}

impl Display for Cube {
    /// Draw the unfolded net with one letter per tile.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pad = " ".repeat(self.size + 1);
        let rows = |face: FaceId| self.faces[face].rows().map(letters);

        for top in rows(FaceId::Top) {
            writeln!(f, "{pad}{top}")?;
        }
        for (left, front, right, back) in izip!(
            rows(FaceId::Left),
            rows(FaceId::Front),
            rows(FaceId::Right),
            rows(FaceId::Back)
        ) {
            writeln!(f, "{left} {front} {right} {back}")?;
        }
        for bottom in rows(FaceId::Bottom) {
            writeln!(f, "{pad}{bottom}")?;
        }

        Ok(())
    }
}
