//! Public twists, all expressed with the two rings in [`crate::ring`].
//!
//! Twists whose slices are not parallel to Front's rows or columns are
//! handled by reorienting: spinning the whole cube about the vertical axis
//! until the face that makes the twist a column twist sits in the front
//! slot, twisting, and spinning back.

use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    cube::Cube,
    error::{CubeError, Result, check_index},
    face::FaceId,
    ring::{HORIZONTAL, Ring, VERTICAL},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveKind {
    RowRight,
    RowLeft,
    ColumnDown,
    ColumnUp,
}

impl MoveKind {
    pub const ALL: [Self; 4] = [
        MoveKind::RowRight,
        MoveKind::RowLeft,
        MoveKind::ColumnDown,
        MoveKind::ColumnUp,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MoveKind::RowRight => "row-right",
            MoveKind::RowLeft => "row-left",
            MoveKind::ColumnDown => "column-down",
            MoveKind::ColumnUp => "column-up",
        }
    }

    /// The kind that undoes this one for the same face and index.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            MoveKind::RowRight => MoveKind::RowLeft,
            MoveKind::RowLeft => MoveKind::RowRight,
            MoveKind::ColumnDown => MoveKind::ColumnUp,
            MoveKind::ColumnUp => MoveKind::ColumnDown,
        }
    }
}

/// A single twist, described relative to the face it is made from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    pub face: FaceId,
    pub index: usize,
}

impl Move {
    #[must_use]
    pub fn new(kind: MoveKind, face: FaceId, index: usize) -> Self {
        Self { kind, face, index }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            kind: self.kind.inverse(),
            ..self
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind.name(), self.face, self.index)
    }
}

impl Cube {
    /// Apply a structured move.
    ///
    /// # Errors
    ///
    /// If the move's index is out of range.
    pub fn apply(&mut self, move_: Move) -> Result<()> {
        match move_.kind {
            MoveKind::RowRight => self.rotate_row_right(move_.face, move_.index),
            MoveKind::RowLeft => self.rotate_row_left(move_.face, move_.index),
            MoveKind::ColumnDown => self.rotate_column_down(move_.face, move_.index),
            MoveKind::ColumnUp => self.rotate_column_up(move_.face, move_.index),
        }
    }

    /// Slide row `row` of `face` one face to the right.
    ///
    /// For the side faces this carries the row Front → Right → Back → Left.
    /// For Top and Bottom the row is counted in that face's own orientation
    /// (Top from the Back edge, Bottom from the Front edge) and the slice
    /// travels Top → Right → Bottom → Left.
    ///
    /// # Errors
    ///
    /// If `row` is out of range. The cube is left untouched.
    pub fn rotate_row_right(&mut self, face: FaceId, row: usize) -> Result<()> {
        debug!("Rotating row {row} of {face} right");
        self.rotate_row(face, row, HORIZONTAL, VERTICAL)
    }

    /// Undo [`Cube::rotate_row_right`] with the same arguments.
    ///
    /// # Errors
    ///
    /// If `row` is out of range. The cube is left untouched.
    pub fn rotate_row_left(&mut self, face: FaceId, row: usize) -> Result<()> {
        debug!("Rotating row {row} of {face} left");
        self.rotate_row(face, row, HORIZONTAL.reversed(), VERTICAL.reversed())
    }

    /// Slide column `col` of `face` one face downwards.
    ///
    /// Front, Back, Top and Bottom share the slices running
    /// Front → Bottom → Back → Top, with `col` counted as on Front. Right and
    /// Left share the slices running Right → Bottom → Left → Top, with `col`
    /// counted as on Right.
    ///
    /// # Errors
    ///
    /// If `col` is out of range. The cube is left untouched.
    pub fn rotate_column_down(&mut self, face: FaceId, col: usize) -> Result<()> {
        debug!("Rotating column {col} of {face} down");
        self.rotate_column(face, col, VERTICAL)
    }

    /// Undo [`Cube::rotate_column_down`] with the same arguments.
    ///
    /// # Errors
    ///
    /// If `col` is out of range. The cube is left untouched.
    pub fn rotate_column_up(&mut self, face: FaceId, col: usize) -> Result<()> {
        debug!("Rotating column {col} of {face} up");
        self.rotate_column(face, col, VERTICAL.reversed())
    }

    fn rotate_row(
        &mut self,
        face: FaceId,
        row: usize,
        sides: Ring,
        through_top: Ring,
    ) -> Result<()> {
        check_index(row, self.size())?;
        if face.is_side() {
            return self.rotate_ring(&sides, row);
        }

        // With Right in front, Top's rows are columns of the front slot. Top
        // counts them from Back, which is now on the right.
        let col = if face == FaceId::Top {
            self.size() - 1 - row
        } else {
            row
        };
        self.with_front(FaceId::Right, |cube| cube.rotate_ring(&through_top, col))
    }

    fn rotate_column(&mut self, face: FaceId, col: usize, ring: Ring) -> Result<()> {
        check_index(col, self.size())?;
        match face {
            FaceId::Front | FaceId::Back | FaceId::Top | FaceId::Bottom => {
                self.rotate_ring(&ring, col)
            }
            FaceId::Right | FaceId::Left => {
                self.with_front(FaceId::Right, |cube| cube.rotate_ring(&ring, col))
            }
        }
    }

    /// Run `f` with `front` reoriented into the front slot, then restore the
    /// home orientation whether or not `f` succeeded.
    fn with_front(
        &mut self,
        front: FaceId,
        f: impl FnOnce(&mut Cube) -> Result<()>,
    ) -> Result<()> {
        self.reorient(front)?;
        let result = f(self);
        self.reorient(FaceId::Front)?;
        result
    }

    /// Spin the whole cube about the vertical axis until the stickers of
    /// the home face `target` sit in the front slot.
    ///
    /// A forward spin (every row turned right) brings the left slot to the
    /// front, a reversed spin brings the right slot to the front. Whichever
    /// needs fewer spins is used.
    ///
    /// # Errors
    ///
    /// If `target` is Top or Bottom, which can never be spun to the front.
    pub(crate) fn reorient(&mut self, target: FaceId) -> Result<()> {
        let Some(goal) = FaceId::SIDES.iter().position(|&face| face == target) else {
            return Err(CubeError::InvalidFace(format!(
                "{target} cannot be reoriented to the front"
            )));
        };
        let current = self.current_front as usize;
        let forward_spins = (current + 4 - goal) % 4;

        if forward_spins <= 2 {
            for _ in 0..forward_spins {
                self.spin(&HORIZONTAL)?;
                self.current_front = FaceId::SIDES[(self.current_front as usize + 3) % 4];
            }
        } else {
            for _ in forward_spins..4 {
                self.spin(&HORIZONTAL.reversed())?;
                self.current_front = FaceId::SIDES[(self.current_front as usize + 1) % 4];
            }
        }

        debug!("Reoriented so that {} is in front", self.current_front);
        Ok(())
    }

    /// Turn every row of `ring`, moving the whole cube at once.
    fn spin(&mut self, ring: &Ring) -> Result<()> {
        for row in 0..self.size() {
            self.rotate_ring(ring, row)?;
        }
        Ok(())
    }
}
