//! Square pixel tiles and the text format they are read from.

use super::border::Border;
use super::error::JigsawError;
use super::orientation::{Orientation, Transform};
use anyhow::{Context, anyhow, bail};
use log::debug;
use puzzle_solver::ParseError;
use std::collections::HashMap;
use std::fmt;

pub type TileId = u64;

/// Pixel value counted as "set" in images and marker patterns.
pub const FOREGROUND: u8 = b'#';

/// A square grid of ASCII pixels, stored row-major.
///
/// Tiles are created once by the parser and only ever reoriented in place;
/// the composite image is also a `Tile`, with no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: Option<TileId>,
    side: usize,
    pixels: Vec<u8>,
    orientation: Orientation,
}

impl Tile {
    /// Build a tile from equally long rows.
    pub fn from_rows<R: AsRef<[u8]>>(id: Option<TileId>, rows: &[R]) -> anyhow::Result<Self> {
        let side = rows.len();
        if side == 0 {
            bail!("tile has no rows");
        }
        let mut pixels = Vec::with_capacity(side * side);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != side {
                bail!("row {} has {} pixels, expected {}", r + 1, row.len(), side);
            }
            if !row.is_ascii() {
                bail!("row {} contains non-ASCII pixels", r + 1);
            }
            pixels.extend_from_slice(row);
        }
        Ok(Self::from_parts(id, side, pixels))
    }

    pub(crate) fn from_parts(id: Option<TileId>, side: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), side * side);
        Self {
            id,
            side,
            pixels,
            orientation: Orientation::default(),
        }
    }

    pub fn id(&self) -> Option<TileId> {
        self.id
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Orientation relative to how the tile was parsed.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn row(&self, r: usize) -> &[u8] {
        &self.pixels[r * self.side..(r + 1) * self.side]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.side)
    }

    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        (r < self.side && c < self.side).then(|| self.pixels[r * self.side + c])
    }

    fn column(&self, c: usize) -> Border {
        Border::new(self.rows().map(|row| row[c]).collect())
    }

    pub fn top(&self) -> Border {
        Border::new(self.row(0).to_vec())
    }

    pub fn bottom(&self) -> Border {
        Border::new(self.row(self.side - 1).to_vec())
    }

    pub fn left(&self) -> Border {
        self.column(0)
    }

    pub fn right(&self) -> Border {
        self.column(self.side - 1)
    }

    /// The four borders in fixed order: top, bottom, left, right.
    pub fn borders(&self) -> [Border; 4] {
        [self.top(), self.bottom(), self.left(), self.right()]
    }

    /// Number of pixels equal to `pixel`.
    pub fn count(&self, pixel: u8) -> usize {
        self.pixels.iter().filter(|&&p| p == pixel).count()
    }

    /// Quarter turn: new row `i` is old column `side - 1 - i` read top to bottom.
    pub fn rotate(&mut self) {
        let n = self.side;
        let mut rotated = Vec::with_capacity(self.pixels.len());
        for i in 0..n {
            rotated.extend(self.rows().map(|row| row[n - 1 - i]));
        }
        self.pixels = rotated;
        self.orientation = self.orientation.after(Transform::Rotate);
    }

    /// Reverse the row order.
    pub fn flip(&mut self) {
        let n = self.side;
        for r in 0..n / 2 {
            let (head, tail) = self.pixels.split_at_mut((n - 1 - r) * n);
            head[r * n..(r + 1) * n].swap_with_slice(&mut tail[..n]);
        }
        self.orientation = self.orientation.after(Transform::Flip);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.id {
            writeln!(f, "Tile {}:", id)?;
        }
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            f.write_str(&String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

/// Every parsed tile, in input order, with an id lookup.
///
/// The set owns the tiles; the border index and the grid only refer to them
/// by id.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
    positions: HashMap<TileId, usize>,
}

impl TileSet {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length shared by every tile (0 for an empty set).
    pub fn tile_side(&self) -> usize {
        self.tiles.first().map_or(0, Tile::side)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().filter_map(Tile::id)
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.positions.get(&id).map(|&i| &self.tiles[i])
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile, JigsawError> {
        self.get(id).ok_or(JigsawError::UnknownTile(id))
    }

    pub fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile, JigsawError> {
        let &i = self.positions.get(&id).ok_or(JigsawError::UnknownTile(id))?;
        Ok(&mut self.tiles[i])
    }

    fn insert(&mut self, tile: Tile) -> anyhow::Result<()> {
        let id = tile.id().ok_or_else(|| anyhow!("tile without an id"))?;
        if self.positions.contains_key(&id) {
            bail!("duplicate tile {}", id);
        }
        if !self.is_empty() && tile.side() != self.tile_side() {
            bail!(
                "tile {} is {}x{}, earlier tiles are {}x{}",
                id,
                tile.side(),
                tile.side(),
                self.tile_side(),
                self.tile_side()
            );
        }
        self.positions.insert(id, self.tiles.len());
        self.tiles.push(tile);
        Ok(())
    }
}

/// Match a `Tile <digits>:` header. `Ok(None)` means the line is not a header.
fn parse_header(line: &str) -> anyhow::Result<Option<TileId>> {
    let Some(rest) = line.trim().strip_prefix("Tile") else {
        return Ok(None);
    };
    let Some(digits) = rest.strip_suffix(':') else {
        return Ok(None);
    };
    if !rest.starts_with(char::is_whitespace) {
        return Ok(None);
    }
    let digits = digits.trim_start();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    digits
        .parse()
        .map(Some)
        .with_context(|| format!("tile id {} is out of range", digits))
}

/// Parse tile blocks until input ends or a line that is not a tile header.
///
/// A non-header line stops parsing and keeps the tiles read so far; a
/// malformed block after a valid header is an error.
pub fn parse_tiles(input: &str) -> Result<TileSet, ParseError> {
    let mut tiles = TileSet::default();
    let mut lines = input.lines().enumerate().peekable();

    loop {
        while lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
        let Some((header_idx, header)) = lines.next() else {
            break;
        };
        let id = match parse_header(header) {
            Ok(Some(id)) => id,
            Ok(None) => {
                debug!(
                    "line {}: {:?} is not a tile header, stopping after {} tiles",
                    header_idx + 1,
                    header,
                    tiles.len()
                );
                break;
            }
            Err(e) => return Err(invalid(header_idx, e)),
        };

        let first = lines
            .peek()
            .map(|(_, line)| line.trim_end().len())
            .unwrap_or(0);
        if first == 0 {
            return Err(invalid(header_idx, anyhow!("tile {} has no pixels", id)));
        }

        let mut rows = Vec::with_capacity(first);
        for _ in 0..first {
            match lines.next() {
                Some((_, line)) => rows.push(line.trim_end()),
                None => {
                    return Err(invalid(
                        header_idx,
                        anyhow!("tile {} ends after {} of {} rows", id, rows.len(), first),
                    ));
                }
            }
        }

        if let Some((idx, line)) = lines.next_if(|(_, line)| !line.trim().is_empty()) {
            return Err(invalid(
                idx,
                anyhow!("expected a blank line after tile {}, found {:?}", id, line),
            ));
        }

        let tile = Tile::from_rows(Some(id), &rows)
            .and_then(|tile| tiles.insert(tile))
            .with_context(|| format!("tile {}", id));
        if let Err(e) = tile {
            return Err(invalid(header_idx, e));
        }
    }

    if tiles.is_empty() {
        return Err(ParseError::MissingData("no tiles in input".to_string()));
    }
    debug!("parsed {} tiles of side {}", tiles.len(), tiles.tile_side());
    Ok(tiles)
}

fn invalid(line_idx: usize, e: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
}
