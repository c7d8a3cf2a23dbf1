//! Composite image assembly and marker pattern search.

use super::assembly::Grid;
use super::error::JigsawError;
use super::orientation::search_orientation;
use super::tile::{FOREGROUND, Tile, TileSet};
use itertools::Itertools;
use log::debug;

/// Strip the outer ring of every placed tile and join the interiors.
///
/// The result has no id and a side of `grid.side() * (tile_side - 2)`.
pub fn compose(grid: &Grid, tiles: &TileSet) -> Result<Tile, JigsawError> {
    let tile_side = tiles.tile_side();
    if tile_side < 3 {
        return Err(JigsawError::TileTooSmall { side: tile_side });
    }
    let inner = tile_side - 2;
    let side = grid.side() * inner;

    let mut pixels = Vec::with_capacity(side * side);
    for grid_row in grid.rows() {
        let placed: Vec<&Tile> = grid_row
            .iter()
            .map(|&id| tiles.tile(id))
            .collect::<Result<_, _>>()?;
        for r in 1..=inner {
            for tile in &placed {
                pixels.extend_from_slice(&tile.row(r)[1..=inner]);
            }
        }
    }
    Ok(Tile::from_parts(None, side, pixels))
}

/// Sparse bitmap searched for in the composite image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    width: usize,
    height: usize,
    cells: Vec<(usize, usize)>,
}

impl Marker {
    pub const SEA_MONSTER: [&'static str; 3] = [
        "                  # ",
        "#    ##    ##    ###",
        " #  #  #  #  #  #   ",
    ];

    /// Build a marker from text rows: `#` must be set, anything else is ignored.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, JigsawError> {
        let cells = foreground_cells(rows);
        if cells.is_empty() {
            return Err(JigsawError::EmptyMarker);
        }
        let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn sea_monster() -> Self {
        Self {
            width: Self::SEA_MONSTER[0].len(),
            height: Self::SEA_MONSTER.len(),
            cells: foreground_cells(&Self::SEA_MONSTER),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of foreground pixels in the pattern.
    pub fn cells(&self) -> usize {
        self.cells.len()
    }

    pub fn matches_at(&self, image: &Tile, row: usize, col: usize) -> bool {
        self.cells
            .iter()
            .all(|&(r, c)| image.get(row + r, col + c) == Some(FOREGROUND))
    }
}

fn foreground_cells<S: AsRef<str>>(rows: &[S]) -> Vec<(usize, usize)> {
    rows.iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.as_ref()
                .bytes()
                .positions(|b| b == FOREGROUND)
                .map(move |c| (r, c))
        })
        .collect()
}

/// Top-left corner of a marker occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub row: usize,
    pub col: usize,
}

/// Every occurrence of `marker` in `image` as currently oriented.
///
/// Rows are scanned top to bottom, left to right. After a hit the scan of
/// that row resumes one pixel past the end of the hit's first row, so hits
/// in different rows may share pixels but never a start.
pub fn find_matches(image: &Tile, marker: &Marker) -> Vec<MarkerMatch> {
    let side = image.side();
    let mut matches = Vec::new();
    if marker.width > side || marker.height > side {
        return matches;
    }
    for row in 0..=side - marker.height {
        let mut col = 0;
        while col + marker.width <= side {
            if marker.matches_at(image, row, col) {
                matches.push(MarkerMatch { row, col });
                col += marker.width + 1;
            } else {
                col += 1;
            }
        }
    }
    matches
}

/// Reorient `image` until `marker` occurs in it and return those occurrences.
pub fn locate(image: &mut Tile, marker: &Marker) -> Result<Vec<MarkerMatch>, JigsawError> {
    let mut matches = Vec::new();
    let applied = search_orientation(image, |img| {
        matches = find_matches(img, marker);
        !matches.is_empty()
    })
    .ok_or(JigsawError::MarkerNotFound)?;
    debug!(
        "found {} markers after {} transforms, orientation {}",
        matches.len(),
        applied,
        image.orientation()
    );
    Ok(matches)
}

/// Foreground pixels not covered by a marker, counting `matches` markers.
pub fn roughness(image: &Tile, marker: &Marker, matches: usize) -> usize {
    image
        .count(FOREGROUND)
        .saturating_sub(matches * marker.cells())
}

/// Render `image` with every marker pixel drawn as `O`.
pub fn highlight(image: &Tile, marker: &Marker, matches: &[MarkerMatch]) -> String {
    let mut rows: Vec<Vec<u8>> = image.rows().map(<[u8]>::to_vec).collect();
    for m in matches {
        for &(r, c) in &marker.cells {
            if let Some(pixel) = rows.get_mut(m.row + r).and_then(|row| row.get_mut(m.col + c)) {
                *pixel = b'O';
            }
        }
    }
    rows.iter()
        .map(|row| String::from_utf8_lossy(row))
        .join("\n")
}
