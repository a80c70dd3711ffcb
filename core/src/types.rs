/// Value held by a single cell: `0` for empty, otherwise a power of two.
pub type Tile = u32;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for cell totals.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub const EMPTY: Tile = 0;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `tile` may legally sit on a board.
pub const fn is_valid_tile(tile: Tile) -> bool {
    tile == EMPTY || tile.is_power_of_two()
}

/// Converts an ndarray dimension back into a coordinate, if it fits.
pub(crate) fn coord_from_dim(dim: usize) -> Option<Coord> {
    Coord::try_from(dim).ok()
}
