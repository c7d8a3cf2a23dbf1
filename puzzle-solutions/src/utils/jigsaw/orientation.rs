//! Tile orientations and the fixed search over them.

use super::tile::Tile;
use std::fmt;

/// Elementary reorientation of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Quarter turn, see [`Tile::rotate`].
    Rotate,
    /// Reverse the row order, see [`Tile::flip`].
    Flip,
}

impl Transform {
    pub fn apply(self, tile: &mut Tile) {
        match self {
            Transform::Rotate => tile.rotate(),
            Transform::Flip => tile.flip(),
        }
    }
}

/// Four rotations, a flip, four more rotations: visits all 8 orientations
/// (the starting one twice).
pub const SEARCH_ORDER: [Transform; 9] = [
    Transform::Rotate,
    Transform::Rotate,
    Transform::Rotate,
    Transform::Rotate,
    Transform::Flip,
    Transform::Rotate,
    Transform::Rotate,
    Transform::Rotate,
    Transform::Rotate,
];

/// One of the 8 orientations of a square: flip first (if `flipped`), then
/// `rotation` quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    rotation: u8,
    flipped: bool,
}

impl Orientation {
    pub fn new(rotation: u8, flipped: bool) -> Self {
        Self {
            rotation: rotation % 4,
            flipped,
        }
    }

    pub fn rotation(self) -> u8 {
        self.rotation
    }

    /// Orientation reached by applying `transform` on top of this one.
    pub fn after(self, transform: Transform) -> Self {
        match transform {
            Transform::Rotate => Self::new(self.rotation + 1, self.flipped),
            // flip . rotate^r == rotate^-r . flip
            Transform::Flip => Self::new(4 - self.rotation, !self.flipped),
        }
    }

    /// Transforms that take the parsed tile to this orientation.
    pub fn transforms(self) -> impl Iterator<Item = Transform> {
        self.flipped
            .then_some(Transform::Flip)
            .into_iter()
            .chain(std::iter::repeat_n(Transform::Rotate, self.rotation as usize))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", u16::from(self.rotation) * 90)?;
        if self.flipped {
            f.write_str(" flipped")?;
        }
        Ok(())
    }
}

/// Reorient `tile` along [`SEARCH_ORDER`] until `fits` accepts it.
///
/// The current orientation is tried first. Returns how many transforms were
/// applied, or `None` when no orientation fits (the tile is then back in its
/// starting orientation, flipped).
pub fn search_orientation<F>(tile: &mut Tile, mut fits: F) -> Option<usize>
where
    F: FnMut(&Tile) -> bool,
{
    if fits(tile) {
        return Some(0);
    }
    for (applied, transform) in SEARCH_ORDER.iter().enumerate() {
        transform.apply(tile);
        if fits(tile) {
            return Some(applied + 1);
        }
    }
    None
}
