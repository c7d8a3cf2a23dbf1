//! Walks the border index to lay every tile out on the grid.

use super::border::BorderIndex;
use super::error::JigsawError;
use super::orientation::search_orientation;
use super::tile::{Tile, TileId, TileSet};
use log::debug;
use std::collections::HashSet;

/// Square arrangement of tile ids, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<TileId>,
}

impl Grid {
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> Option<TileId> {
        (row < self.side && col < self.side).then(|| self.cells[row * self.side + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileId]> {
        self.cells.chunks_exact(self.side)
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [TileId; 4] {
        let last = self.side - 1;
        [
            self.cells[0],
            self.cells[last],
            self.cells[last * self.side],
            self.cells[last * self.side + last],
        ]
    }
}

/// Side of the square grid holding `count` tiles.
pub fn grid_side(count: usize) -> Result<usize, JigsawError> {
    let side = (0..=count)
        .find(|n| n * n >= count)
        .filter(|n| n * n == count && *n > 0);
    side.ok_or(JigsawError::NotSquare { count })
}

struct Placer<'a> {
    tiles: &'a mut TileSet,
    side: usize,
    cells: Vec<TileId>,
    placed: HashSet<TileId>,
}

impl Placer<'_> {
    fn at(&self, row: usize, col: usize) -> TileId {
        self.cells[row * self.side + col]
    }

    fn place<F>(&mut self, id: TileId, fits: F) -> Result<(), JigsawError>
    where
        F: FnMut(&Tile) -> bool,
    {
        let (row, col) = (self.cells.len() / self.side, self.cells.len() % self.side);
        if self.placed.contains(&id) {
            return Err(JigsawError::TileReused { tile: id, row, col });
        }
        let tile = self.tiles.tile_mut(id)?;
        let applied = search_orientation(tile, fits)
            .ok_or(JigsawError::NoOrientation { tile: id, row, col })?;
        debug!(
            "placed tile {} at ({}, {}) after {} transforms, orientation {}",
            id,
            row,
            col,
            applied,
            tile.orientation()
        );
        self.placed.insert(id);
        self.cells.push(id);
        Ok(())
    }
}

/// Orient every tile and place it, starting from `anchor` in the top-left.
///
/// `anchor` must be a corner tile. Each following tile is the neighbour
/// across the border it joins and is turned until that border lines up
/// exactly; tiles on the outer edge must also face outward.
pub fn assemble(
    tiles: &mut TileSet,
    index: &BorderIndex,
    anchor: TileId,
) -> Result<Grid, JigsawError> {
    let side = grid_side(tiles.len())?;
    let mut placer = Placer {
        tiles,
        side,
        cells: Vec::with_capacity(side * side),
        placed: HashSet::new(),
    };

    placer.place(anchor, |t| {
        index.is_matched(&t.right()) && index.is_matched(&t.bottom())
    })?;

    for row in 0..side {
        if row > 0 {
            let above = placer.at(row - 1, 0);
            let join = placer.tiles.tile(above)?.bottom();
            let next = index.neighbour(placer.tiles, above, &join)?;
            placer.place(next, |t| {
                t.top() == join && index.count(&t.right()) == 2 && index.is_outward(&t.left())
            })?;
        }

        for col in 1..side {
            let left = placer.at(row, col - 1);
            let join = placer.tiles.tile(left)?.right();
            let above = match row {
                0 => None,
                _ => Some(placer.tiles.tile(placer.at(row - 1, col))?.bottom()),
            };
            let next = index.neighbour(placer.tiles, left, &join)?;
            placer.place(next, |t| {
                t.left() == join
                    && match &above {
                        Some(bottom) => t.top() == *bottom,
                        None => index.is_outward(&t.top()),
                    }
            })?;
        }
    }

    Ok(Grid {
        side,
        cells: placer.cells,
    })
}
