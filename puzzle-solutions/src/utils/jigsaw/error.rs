//! Structural failures of the assembly pipeline.

use super::tile::TileId;
use puzzle_solver::SolveError;
use thiserror::Error;

/// An invariant of a well-formed jigsaw did not hold; solving stops here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JigsawError {
    #[error("expected exactly 4 corner tiles, found {found}: {ids:?}")]
    CornerCount { found: usize, ids: Vec<TileId> },

    #[error("{count} tiles cannot be laid out as a square grid")]
    NotSquare { count: usize },

    #[error("tiles of side {side} have no interior pixels")]
    TileTooSmall { side: usize },

    #[error("no tile other than {tile} has border {border}")]
    NoNeighbour { tile: TileId, border: String },

    #[error("no orientation of tile {tile} fits at row {row}, column {col}")]
    NoOrientation { tile: TileId, row: usize, col: usize },

    #[error("tile {tile} is already placed but also fits at row {row}, column {col}")]
    TileReused { tile: TileId, row: usize, col: usize },

    #[error("tile {0} is not part of the puzzle")]
    UnknownTile(TileId),

    #[error("marker pattern has no foreground pixels")]
    EmptyMarker,

    #[error("marker pattern not found in any orientation of the image")]
    MarkerNotFound,

    #[error("product of corner ids overflows")]
    Overflow,
}

impl From<JigsawError> for SolveError {
    fn from(e: JigsawError) -> Self {
        SolveError::failed(e)
    }
}
