use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board rows must be non-empty and of equal length")]
    InvalidDimensions,
    #[error("Tile values must be zero or a power of two")]
    InvalidTile,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No open cells to spawn a tile into")]
    NoOpenCells,
    #[error("Open cell list is out of date, recompute before spawning")]
    StaleOpenCells,
}

pub type Result<T> = core::result::Result<T, GameError>;
