//! The one primitive every twist is built from: shift one line of each of
//! four faces around a ring, and quarter turn a cap face when the line is
//! on the edge of the cube.

use itertools::Itertools;
use log::trace;

use crate::{
    cube::Cube,
    error::{CubeError, Result, check_index},
    face::FaceId,
    face_grid::{FaceGrid, Tile},
};

/// Which kind of line a ring moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Axis {
    Row,
    Column,
}

/// Direction of a cap's quarter turn, as seen from outside that face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Turn {
    #[must_use]
    pub(crate) fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    pub(crate) fn apply(self, grid: &mut FaceGrid) {
        match self {
            Turn::Clockwise => grid.rotate_clockwise(),
            Turn::CounterClockwise => grid.rotate_counter_clockwise(),
        }
    }
}

/// A family of slices: four faces sharing a line, and the two faces the
/// family is capped by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Ring {
    pub axis: Axis,
    /// Lines travel from `faces[k]` to `faces[k + 1]`, wrapping around.
    pub faces: [FaceId; 4],
    /// The member whose line runs backwards relative to the other three,
    /// and whose line index is counted from the other edge.
    pub mirrored: Option<FaceId>,
    /// Turned when the slice index is 0.
    pub near_cap: (FaceId, Turn),
    /// Turned when the slice index is N-1.
    pub far_cap: (FaceId, Turn),
}

/// Rows moving Front → Right → Back → Left, viewed from above this spins
/// the top layer counter-clockwise.
pub(crate) const HORIZONTAL: Ring = Ring {
    axis: Axis::Row,
    faces: [FaceId::Front, FaceId::Right, FaceId::Back, FaceId::Left],
    mirrored: None,
    near_cap: (FaceId::Top, Turn::CounterClockwise),
    far_cap: (FaceId::Bottom, Turn::Clockwise),
};

/// Columns moving Front → Bottom → Back → Top. Back is seen from behind,
/// so its columns are numbered from the other side and its tiles arrive
/// upside down.
pub(crate) const VERTICAL: Ring = Ring {
    axis: Axis::Column,
    faces: [FaceId::Front, FaceId::Bottom, FaceId::Back, FaceId::Top],
    mirrored: Some(FaceId::Back),
    near_cap: (FaceId::Left, Turn::Clockwise),
    far_cap: (FaceId::Right, Turn::CounterClockwise),
};

impl Ring {
    /// The same slices turned the other way.
    #[must_use]
    pub(crate) fn reversed(self) -> Ring {
        let [a, b, c, d] = self.faces;
        Ring {
            faces: [d, c, b, a],
            near_cap: (self.near_cap.0, self.near_cap.1.inverse()),
            far_cap: (self.far_cap.0, self.far_cap.1.inverse()),
            ..self
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.faces.iter().all_unique() {
            return Err(CubeError::InvalidRing(format!(
                "faces are not distinct: {:?}",
                self.faces
            )));
        }
        if let Some(mirrored) = self.mirrored
            && !self.faces.contains(&mirrored)
        {
            return Err(CubeError::InvalidRing(format!(
                "mirrored face {mirrored} is not part of {:?}",
                self.faces
            )));
        }
        let (near, far) = (self.near_cap.0, self.far_cap.0);
        if near == far || self.faces.contains(&near) || self.faces.contains(&far) {
            return Err(CubeError::InvalidRing(format!(
                "caps {near} and {far} must be two faces outside {:?}",
                self.faces
            )));
        }
        Ok(())
    }
}

impl Cube {
    /// Read the line of `face` that lies in slice `index` of `ring`, in
    /// ring order.
    fn ring_line(&self, ring: &Ring, face: FaceId, index: usize) -> Result<Vec<Tile>> {
        let grid = &self.faces[face];
        if ring.mirrored == Some(face) {
            let mut line = match ring.axis {
                Axis::Row => grid.row(self.size() - 1 - index)?,
                Axis::Column => grid.col(self.size() - 1 - index)?,
            };
            line.reverse();
            Ok(line)
        } else {
            match ring.axis {
                Axis::Row => grid.row(index),
                Axis::Column => grid.col(index),
            }
        }
    }

    /// Write a line given in ring order into slice `index` of `face`.
    fn set_ring_line(
        &mut self,
        ring: &Ring,
        face: FaceId,
        mut line: Vec<Tile>,
        index: usize,
    ) -> Result<()> {
        let size = self.size();
        let grid = &mut self.faces[face];
        let index = if ring.mirrored == Some(face) {
            line.reverse();
            size - 1 - index
        } else {
            index
        };
        match ring.axis {
            Axis::Row => grid.set_row(&line, index),
            Axis::Column => grid.set_col(&line, index),
        }
    }

    /// Twist slice `index` of `ring` by one step in ring order.
    ///
    /// Nothing is modified unless the ring and index are both valid.
    pub(crate) fn rotate_ring(&mut self, ring: &Ring, index: usize) -> Result<()> {
        ring.validate()?;
        check_index(index, self.size())?;
        trace!("Rotating slice {index} of {:?} ring {:?}", ring.axis, ring.faces);

        if index == 0 {
            let (cap, turn) = ring.near_cap;
            turn.apply(&mut self.faces[cap]);
        }
        if index == self.size() - 1 {
            let (cap, turn) = ring.far_cap;
            turn.apply(&mut self.faces[cap]);
        }

        let mut carry = self.ring_line(ring, ring.faces[3], index)?;
        for face in ring.faces {
            let next = self.ring_line(ring, face, index)?;
            self.set_ring_line(ring, face, carry, index)?;
            carry = next;
        }

        Ok(())
    }
}
