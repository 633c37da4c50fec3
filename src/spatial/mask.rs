//! Immutable wet/dry mask with constant-time rectangle queries
//!
//! Cells are stored row-major as bits. A summed-area table built once at
//! construction answers "how many wet cells in this rectangle" in O(1), which
//! keeps the offset and size searches linear in the number of tiles.

use bitvec::prelude::*;
use ndarray::Array2;
use std::ops::Range;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Wet/dry land-sea mask
///
/// Row 0 is the top row in storage order. The grid is `height` rows of
/// `width` cells each.
#[derive(Debug, Clone)]
pub struct MaskGrid {
    wet: BitVec,
    height: usize,
    width: usize,
    /// `prefix[[r, c]]` holds the wet count of rows `0..r` and columns `0..c`
    prefix: Array2<usize>,
}

impl MaskGrid {
    /// Build a mask from row-major cell flags
    ///
    /// # Errors
    ///
    /// Returns an error if `cells.len()` differs from `height * width` or a
    /// dimension exceeds [`MAX_GRID_DIMENSION`]
    pub fn from_cells(height: usize, width: usize, cells: &[bool]) -> Result<Self> {
        if height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if cells.len() != height * width {
            return Err(invalid_parameter(
                "cells",
                &cells.len(),
                &format!("expected {height}x{width} = {} cells", height * width),
            ));
        }

        let wet: BitVec = cells.iter().copied().collect();
        let prefix = Self::summed_area(&wet, height, width);

        Ok(Self {
            wet,
            height,
            width,
            prefix,
        })
    }

    /// Build a mask from a 2-D array of flags
    pub fn from_array(cells: &Array2<bool>) -> Self {
        let (height, width) = cells.dim();
        let wet: BitVec = cells.iter().copied().collect();
        let prefix = Self::summed_area(&wet, height, width);

        Self {
            wet,
            height,
            width,
            prefix,
        }
    }

    fn summed_area(wet: &BitSlice, height: usize, width: usize) -> Array2<usize> {
        let mut prefix = Array2::zeros((height + 1, width + 1));
        for row in 0..height {
            let mut row_sum = 0;
            for col in 0..width {
                if wet.get(row * width + col).as_deref() == Some(&true) {
                    row_sum += 1;
                }
                let above = prefix.get([row, col + 1]).copied().unwrap_or(0);
                if let Some(cell) = prefix.get_mut([row + 1, col + 1]) {
                    *cell = above + row_sum;
                }
            }
        }
        prefix
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Test whether a cell is wet; out-of-range cells are dry
    pub fn is_wet(&self, row: usize, col: usize) -> bool {
        row < self.height
            && col < self.width
            && self.wet.get(row * self.width + col).as_deref() == Some(&true)
    }

    /// Total number of wet cells
    pub fn total_wet(&self) -> usize {
        self.wet.count_ones()
    }

    /// Count wet cells in a rectangle, clipping the ranges to the grid
    pub fn wet_count(&self, rows: Range<usize>, cols: Range<usize>) -> usize {
        let row_end = rows.end.min(self.height);
        let col_end = cols.end.min(self.width);
        let row_start = rows.start.min(row_end);
        let col_start = cols.start.min(col_end);

        let at = |r: usize, c: usize| self.prefix.get([r, c]).copied().unwrap_or(0);
        (at(row_end, col_end) + at(row_start, col_start))
            - (at(row_start, col_end) + at(row_end, col_start))
    }
}
