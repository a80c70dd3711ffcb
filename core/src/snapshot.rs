use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned copy of the board state for renderers and other outside readers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub grid: Array2<Tile>,
    pub open_cells: Vec<Coord2>,
    pub score: u64,
}

impl BoardSnapshot {
    /// `None` when a deserialized grid is larger than a board can be.
    pub fn size(&self) -> Option<Coord2> {
        let (rows, cols) = self.grid.dim();
        Some((coord_from_dim(rows)?, coord_from_dim(cols)?))
    }

    /// Whether the snapshot was taken with no open cells on record.
    pub fn is_lost(&self) -> bool {
        self.open_cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use ndarray::array;

    #[test]
    fn snapshot_captures_grid_open_cells_and_score() {
        let rows: &[&[Tile]] = &[&[2, 0], &[4, 8]];
        let mut board = Board::from_rows(rows).unwrap();
        board.recompute_open_cells();

        let snapshot = board.snapshot();

        assert_eq!(snapshot.grid, array![[2, 0], [4, 8]]);
        assert_eq!(snapshot.open_cells, &[(0, 1)]);
        assert_eq!(snapshot.score, 14);
        assert_eq!(snapshot.size(), Some((2, 2)));
        assert!(!snapshot.is_lost());
    }

    #[test]
    fn snapshot_is_detached_from_the_board() {
        let rows: &[&[Tile]] = &[&[2, 2]];
        let mut board = Board::from_rows(rows).unwrap();
        let snapshot = board.snapshot();

        board.apply_move(Direction::Left);

        assert_eq!(snapshot.grid, array![[2, 2]]);
        assert_eq!(board.grid(), array![[4, 0]]);
    }

    #[test]
    fn oversized_snapshot_has_no_board_size() {
        let snapshot = BoardSnapshot {
            grid: Array2::zeros((1, 256)),
            open_cells: vec![],
            score: 0,
        };

        assert_eq!(snapshot.size(), None);
    }

    #[test]
    fn snapshot_serializes_with_serde() {
        let rows: &[&[Tile]] = &[&[0, 4]];
        let mut board = Board::from_rows(rows).unwrap();
        board.recompute_open_cells();
        let snapshot = board.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
    }
}
