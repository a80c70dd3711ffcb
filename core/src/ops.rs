//! Grid primitives every move is built from.
//!
//! Only the leftward slide and merge exist; the other directions reorient the
//! grid with [`transpose`] and [`flip_rows`], run the leftward pair, and undo
//! the reorientation.

use ndarray::{Array2, ArrayViewMut1, Axis};

use crate::*;

/// Packs the non-zero tiles of every row into a prefix, keeping their order.
pub fn slide_left(grid: &mut Array2<Tile>) {
    for row in grid.rows_mut() {
        slide_row_left(row);
    }
}

/// Doubles each left tile of an equal non-zero pair and empties its partner.
///
/// Pairs are taken left to right in one pass, so a tile produced by a merge is
/// never merged again in the same call. A pair whose doubled value does not fit
/// in a [`Tile`] stays as it is.
pub fn merge_left(grid: &mut Array2<Tile>) {
    for row in grid.rows_mut() {
        merge_row_left(row);
    }
}

/// Swaps rows and columns.
pub fn transpose(grid: &mut Array2<Tile>) {
    let transposed = grid.t().as_standard_layout().into_owned();
    *grid = transposed;
}

/// Mirrors every row horizontally.
pub fn flip_rows(grid: &mut Array2<Tile>) {
    grid.invert_axis(Axis(1));
    let flipped = grid.as_standard_layout().into_owned();
    *grid = flipped;
}

/// Quarter turn clockwise.
pub fn rotate_clockwise(grid: &mut Array2<Tile>) {
    transpose(grid);
    flip_rows(grid);
}

fn slide_row_left(mut row: ArrayViewMut1<Tile>) {
    let len = row.len();
    let mut write = 0;
    for read in 0..len {
        let tile = row[read];
        if tile != EMPTY {
            row[write] = tile;
            write += 1;
        }
    }
    for idx in write..len {
        row[idx] = EMPTY;
    }
}

fn merge_row_left(mut row: ArrayViewMut1<Tile>) {
    for col in 1..row.len() {
        let left = row[col - 1];
        if left == EMPTY || left != row[col] {
            continue;
        }
        if let Some(merged) = left.checked_mul(2) {
            row[col - 1] = merged;
            row[col] = EMPTY;
        }
    }
}
