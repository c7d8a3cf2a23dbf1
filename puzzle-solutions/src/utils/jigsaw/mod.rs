//! Jigsaw Tile Assembly
//!
//! Square tiles carry pixel borders; adjacent tiles share a border, possibly
//! reversed because one of them is flipped. This module reassembles them.
//!
//! # Pipeline
//!
//! 1. [`parse_tiles`] reads `Tile <id>:` blocks into a [`TileSet`]
//! 2. [`BorderIndex`] files every border (and its reversal) under the tiles
//!    exposing it, and finds the four [corners](BorderIndex::corners)
//! 3. [`assemble`] orients each tile with [`search_orientation`] and lays it
//!    out on a [`Grid`], starting from a corner
//! 4. [`compose`] strips the tile borders into one image; [`locate`] turns it
//!    until a [`Marker`] shows up, and [`roughness`] counts what is left
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::jigsaw::{
//!     BorderIndex, Marker, assemble, compose, locate, parse_tiles, roughness,
//! };
//!
//! # fn run(input: &str) -> Result<usize, Box<dyn std::error::Error>> {
//! let mut tiles = parse_tiles(input)?;
//! let index = BorderIndex::build(&tiles);
//! let [anchor, ..] = index.corners(&tiles)?;
//! let grid = assemble(&mut tiles, &index, anchor)?;
//! let mut image = compose(&grid, &tiles)?;
//! let marker = Marker::sea_monster();
//! let found = locate(&mut image, &marker)?;
//! Ok(roughness(&image, &marker, found.len()))
//! # }
//! ```

mod assembly;
mod border;
mod error;
mod image;
mod orientation;
mod tile;

pub use assembly::{Grid, assemble, grid_side};
pub use border::{Border, BorderIndex, borders_of};
pub use error::JigsawError;
pub use image::{Marker, MarkerMatch, compose, find_matches, highlight, locate, roughness};
pub use orientation::{Orientation, SEARCH_ORDER, Transform, search_orientation};
pub use tile::{FOREGROUND, Tile, TileId, TileSet, parse_tiles};

#[cfg(test)]
mod tests;
