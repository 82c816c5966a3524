use itertools::Itertools;

use crate::{
    error::{CubeError, Result, check_index},
    face::Color,
};

/// A single sticker. Tiles are only ever copied around whole lines at a
/// time, never created mid-solve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile(Color);

impl Tile {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self(color)
    }

    #[must_use]
    pub fn color(self) -> Color {
        self.0
    }
}

/// The N×N stickers of one face, stored row-major.
///
/// Row 0 is the edge nearest the top of the face as seen from outside the
/// cube, column 0 is the left edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    tiles: Vec<Tile>,
    size: usize,
}

impl FaceGrid {
    /// Create a grid filled with `color`.
    #[must_use]
    pub fn new(size: usize, color: Color) -> Self {
        Self {
            tiles: vec![Tile::new(color); size * size],
            size,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn at(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.size + col]
    }

    /// Get the tile at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// If either coordinate is outside the grid.
    pub fn tile(&self, row: usize, col: usize) -> Result<Tile> {
        check_index(row, self.size)?;
        check_index(col, self.size)?;
        Ok(self.at(row, col))
    }

    /// Copy out row `row`, left to right.
    ///
    /// # Errors
    ///
    /// If `row` is outside the grid.
    pub fn row(&self, row: usize) -> Result<Vec<Tile>> {
        check_index(row, self.size)?;
        Ok(self.tiles[row * self.size..(row + 1) * self.size].to_vec())
    }

    /// Copy out column `col`, top to bottom.
    ///
    /// # Errors
    ///
    /// If `col` is outside the grid.
    pub fn col(&self, col: usize) -> Result<Vec<Tile>> {
        check_index(col, self.size)?;
        Ok((0..self.size).map(|row| self.at(row, col)).collect())
    }

    fn check_line(&self, line: &[Tile], index: usize) -> Result<()> {
        check_index(index, self.size)?;
        if line.len() == self.size {
            Ok(())
        } else {
            Err(CubeError::LengthMismatch {
                expected: self.size,
                actual: line.len(),
            })
        }
    }

    /// Overwrite row `row` with `line`.
    ///
    /// # Errors
    ///
    /// If `row` is outside the grid or `line` is not exactly one row long.
    pub fn set_row(&mut self, line: &[Tile], row: usize) -> Result<()> {
        self.check_line(line, row)?;
        self.tiles[row * self.size..(row + 1) * self.size].copy_from_slice(line);
        Ok(())
    }

    /// Overwrite column `col` with `line`, top to bottom.
    ///
    /// # Errors
    ///
    /// If `col` is outside the grid or `line` is not exactly one column long.
    pub fn set_col(&mut self, line: &[Tile], col: usize) -> Result<()> {
        self.check_line(line, col)?;
        for (row, &tile) in line.iter().enumerate() {
            self.tiles[row * self.size + col] = tile;
        }
        Ok(())
    }

    /// Quarter turn the whole grid clockwise in place.
    pub fn rotate_clockwise(&mut self) {
        let n = self.size;
        self.tiles = (0..n)
            .cartesian_product(0..n)
            .map(|(row, col)| self.at(n - 1 - col, row))
            .collect();
    }

    /// Quarter turn the whole grid counter-clockwise in place.
    pub fn rotate_counter_clockwise(&mut self) {
        let n = self.size;
        self.tiles = (0..n)
            .cartesian_product(0..n)
            .map(|(row, col)| self.at(col, n - 1 - row))
            .collect();
    }

    /// Borrow every row in turn, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size)
    }

    /// The colors of every tile, row by row.
    #[must_use]
    pub fn colors(&self) -> Vec<Vec<Color>> {
        self.rows()
            .map(|row| row.iter().map(|tile| tile.color()).collect())
            .collect()
    }

    /// Whether every tile has the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.tiles.iter().map(|tile| tile.color()).all_equal()
    }
}
