use alloc::vec::Vec;
use ndarray::{Array2, ArrayView2};

use crate::*;

/// Owns the grid and its cached list of open cells.
///
/// The open cell list is only refreshed by [`Board::recompute_open_cells`].
/// Moves and spawns leave it as it was, so callers recompute before spawning
/// or asking whether the game is lost.
#[derive(Clone, Debug)]
pub struct Board<S = SeededSource> {
    grid: Array2<Tile>,
    open_cells: Vec<Coord2>,
    source: S,
}

impl Board<SeededSource> {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_source(config, SeededSource::default())
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::with_source(config, SeededSource::new(seed))
    }

    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows_with_source(rows, SeededSource::default())
    }

    pub fn from_rows_seeded<R: AsRef<[Tile]>>(rows: &[R], seed: u64) -> Result<Self> {
        Self::from_rows_with_source(rows, SeededSource::new(seed))
    }

    pub fn from_grid(grid: Array2<Tile>) -> Result<Self> {
        Self::from_grid_with_source(grid, SeededSource::default())
    }
}

impl Default for Board<SeededSource> {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl<S: TileSource> Board<S> {
    pub fn with_source(config: BoardConfig, source: S) -> Self {
        Self {
            grid: Array2::zeros(config.size.to_nd_index()),
            open_cells: Vec::new(),
            source,
        }
    }

    /// Copies a rectangular matrix given row by row.
    pub fn from_rows_with_source<R: AsRef<[Tile]>>(rows: &[R], source: S) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidDimensions);
        }

        let cells: Vec<Tile> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let grid = Array2::from_shape_vec((rows.len(), cols), cells)
            .map_err(|_| GameError::InvalidDimensions)?;

        Self::from_grid_with_source(grid, source)
    }

    pub fn from_grid_with_source(grid: Array2<Tile>, source: S) -> Result<Self> {
        let (rows, cols) = grid.dim();
        if rows == 0 || cols == 0 || coord_from_dim(rows).is_none() || coord_from_dim(cols).is_none()
        {
            return Err(GameError::InvalidDimensions);
        }
        if !grid.iter().all(|&tile| is_valid_tile(tile)) {
            return Err(GameError::InvalidTile);
        }

        Ok(Self {
            grid: grid.as_standard_layout().into_owned(),
            open_cells: Vec::new(),
            source,
        })
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size())
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.grid.dim();
        // dimensions are checked on construction and only swap transiently inside a move
        (rows as Coord, cols as Coord)
    }

    pub fn grid(&self) -> ArrayView2<'_, Tile> {
        self.grid.view()
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        self.grid
            .get(coords.to_nd_index())
            .copied()
            .ok_or(GameError::InvalidCoords)
    }

    /// Open cells as of the last [`Board::recompute_open_cells`], row-major.
    pub fn open_cells(&self) -> &[Coord2] {
        &self.open_cells
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn recompute_open_cells(&mut self) {
        self.open_cells.clear();
        self.open_cells.extend(
            self.grid
                .indexed_iter()
                .filter(|&(_, &tile)| tile == EMPTY)
                .map(|((row, col), _)| (row as Coord, col as Coord)),
        );
    }

    /// Places a 2 (or, one time in ten, a 4) on a random open cell.
    pub fn spawn_random_tile(&mut self) -> Result<(Coord2, Tile)> {
        if self.open_cells.is_empty() {
            log::warn!("Spawn requested with no open cells");
            return Err(GameError::NoOpenCells);
        }

        let pick = self.source.pick_index(self.open_cells.len());
        let coords = *self
            .open_cells
            .get(pick)
            .ok_or(GameError::StaleOpenCells)?;
        let tile = if self.source.value_draw() < FOUR_PROBABILITY {
            4
        } else {
            2
        };

        match self.grid.get_mut(coords.to_nd_index()) {
            Some(cell) if *cell == EMPTY => *cell = tile,
            _ => {
                log::warn!("Open cell {coords:?} is stale, refusing to spawn");
                return Err(GameError::StaleOpenCells);
            }
        }

        log::debug!("Spawned {tile} at {coords:?}");
        Ok((coords, tile))
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        use Direction::*;

        let before = self.grid.clone();
        match direction {
            Left => self.shift_left(),
            Right => {
                ops::flip_rows(&mut self.grid);
                self.shift_left();
                ops::flip_rows(&mut self.grid);
            }
            Up => {
                ops::transpose(&mut self.grid);
                self.shift_left();
                ops::transpose(&mut self.grid);
            }
            Down => {
                ops::transpose(&mut self.grid);
                ops::flip_rows(&mut self.grid);
                self.shift_left();
                ops::flip_rows(&mut self.grid);
                ops::transpose(&mut self.grid);
            }
        }

        let outcome = if self.grid == before {
            MoveOutcome::NoChange
        } else {
            MoveOutcome::Moved
        };
        log::trace!("Move {direction:?}: {outcome:?}");
        outcome
    }

    /// Lost when the last recomputation found no open cell.
    pub fn is_lost(&self) -> bool {
        self.open_cells.is_empty()
    }

    pub fn score(&self) -> u64 {
        self.grid.iter().map(|&tile| u64::from(tile)).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.iter().copied().max().unwrap_or(EMPTY)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: self.grid.clone(),
            open_cells: self.open_cells.clone(),
            score: self.score(),
        }
    }

    fn shift_left(&mut self) {
        ops::slide_left(&mut self.grid);
        ops::merge_left(&mut self.grid);
        ops::slide_left(&mut self.grid);
    }
}
