use core::fmt;
use ndarray::ArrayView2;

use crate::*;

const CELL_WIDTH: usize = 5;
const EMPTY_GLYPH: &str = "-";
const OPEN_GLYPH: &str = "**";

/// Plain text view of the grid, one line per row.
#[derive(Clone, Debug)]
pub struct GridDisplay<'a> {
    grid: ArrayView2<'a, Tile>,
}

/// Same as [`GridDisplay`], with cells from the open cell list marked.
#[derive(Clone, Debug)]
pub struct OpenCellsDisplay<'a> {
    grid: ArrayView2<'a, Tile>,
    open_cells: &'a [Coord2],
}

impl<S: TileSource> Board<S> {
    pub fn display(&self) -> GridDisplay<'_> {
        GridDisplay { grid: self.grid() }
    }

    /// Marks the cells the last recomputation found open, stale or not.
    pub fn display_open_cells(&self) -> OpenCellsDisplay<'_> {
        OpenCellsDisplay {
            grid: self.grid(),
            open_cells: self.open_cells(),
        }
    }
}

fn write_cell(f: &mut fmt::Formatter<'_>, tile: Tile) -> fmt::Result {
    if tile == EMPTY {
        write!(f, "{EMPTY_GLYPH:<CELL_WIDTH$}")
    } else {
        write!(f, "{tile:<CELL_WIDTH$}")
    }
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for &tile in row {
                write_cell(f, tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for OpenCellsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ((row, col), &tile) in self.grid.indexed_iter() {
            let coords = (row as Coord, col as Coord);
            if self.open_cells.contains(&coords) {
                write!(f, "{OPEN_GLYPH:<CELL_WIDTH$}")?;
            } else {
                write_cell(f, tile)?;
            }
            if col + 1 == self.grid.ncols() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
