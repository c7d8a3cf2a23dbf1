//! Border fingerprints and the reverse index from fingerprint to tiles.

use super::error::JigsawError;
use super::tile::{Tile, TileId, TileSet};
use log::{debug, trace, warn};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// One edge of a tile, read left to right (rows) or top to bottom (columns).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Border(Vec<u8>);

impl Border {
    pub fn new(pixels: Vec<u8>) -> Self {
        Self(pixels)
    }

    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Equal as-is or after reversing one side.
    pub fn matches(&self, other: &Border) -> bool {
        self == other || self.0.iter().eq(other.0.iter().rev())
    }

    /// Orientation-independent key: the smaller of the border and its reversal.
    pub fn canonical(&self) -> Self {
        let reversed = self.reversed();
        if reversed < *self { reversed } else { self.clone() }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// The four borders of `tile`: top, bottom, left, right.
pub fn borders_of(tile: &Tile) -> [Border; 4] {
    tile.borders()
}

/// Reverse index from border fingerprint to the tiles exposing it.
///
/// Every border is filed under itself and under its reversal, so the keys of
/// a tile do not depend on its orientation: reorienting a tile never makes the
/// index stale, and rebuilding it over the same tiles gives an equal index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderIndex {
    entries: HashMap<Border, BTreeSet<TileId>>,
}

impl BorderIndex {
    pub fn build(tiles: &TileSet) -> Self {
        let mut entries: HashMap<Border, BTreeSet<TileId>> = HashMap::new();
        for tile in tiles.iter() {
            let Some(id) = tile.id() else { continue };
            for border in tile.borders() {
                entries.entry(border.reversed()).or_default().insert(id);
                entries.entry(border).or_default().insert(id);
            }
        }
        trace!("border index holds {} fingerprints", entries.len());
        Self { entries }
    }

    /// Number of distinct fingerprints (each direction counts separately).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tiles filed under `border` exactly.
    pub fn tiles_with(&self, border: &Border) -> impl Iterator<Item = TileId> + '_ {
        self.entries.get(border).into_iter().flatten().copied()
    }

    /// Number of tiles filed under `border`.
    pub fn count(&self, border: &Border) -> usize {
        self.entries.get(border).map_or(0, BTreeSet::len)
    }

    /// A border no other tile shares, i.e. on the outer edge of the picture.
    pub fn is_outward(&self, border: &Border) -> bool {
        self.count(border) < 2 && self.count(&border.reversed()) < 2
    }

    pub fn is_matched(&self, border: &Border) -> bool {
        !self.is_outward(border)
    }

    /// A corner has exactly two outward borders.
    pub fn is_corner(&self, tile: &Tile) -> bool {
        tile.borders()
            .iter()
            .filter(|border| self.is_outward(border))
            .count()
            == 2
    }

    /// The four corner tiles in input order.
    pub fn corners(&self, tiles: &TileSet) -> Result<[TileId; 4], JigsawError> {
        let ids: Vec<TileId> = tiles
            .iter()
            .filter(|tile| self.is_corner(tile))
            .filter_map(Tile::id)
            .collect();
        debug!("corner tiles: {:?}", ids);
        <[TileId; 4]>::try_from(ids.as_slice()).map_err(|_| JigsawError::CornerCount {
            found: ids.len(),
            ids: ids.clone(),
        })
    }

    /// The tile other than `current` sharing `border`, as-is or reversed.
    ///
    /// A candidate exposing `border` exactly in its current orientation wins
    /// over one exposing the reversal; remaining ties go to the lowest id.
    pub fn neighbour(
        &self,
        tiles: &TileSet,
        current: TileId,
        border: &Border,
    ) -> Result<TileId, JigsawError> {
        // Both directions are filed for every tile, so one lookup sees all of them.
        let candidates: Vec<&Tile> = self
            .tiles_with(border)
            .filter(|&id| id != current)
            .map(|id| tiles.tile(id))
            .collect::<Result<_, _>>()?;

        if candidates.len() > 1 {
            warn!(
                "border {} of tile {} is shared by {} tiles: {:?}",
                border,
                current,
                candidates.len(),
                candidates.iter().filter_map(|tile| tile.id()).collect::<Vec<_>>()
            );
        }

        let exposes = |tile: &Tile, exact: bool| {
            tile.borders()
                .iter()
                .any(|b| if exact { b == border } else { b.matches(border) })
        };
        candidates
            .iter()
            .find(|tile| exposes(tile, true))
            .or_else(|| candidates.iter().find(|tile| exposes(tile, false)))
            .and_then(|tile| tile.id())
            .ok_or_else(|| JigsawError::NoNeighbour {
                tile: current,
                border: border.to_string(),
            })
    }
}
