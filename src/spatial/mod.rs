//! Spatial data structures for the mask and its tilings
//!
//! This module contains:
//! - The immutable wet/dry mask with rectangle wet counts
//! - Tile sizes, offsets and the layouts they induce

/// Wet/dry mask storage
pub mod mask;
/// Tile size, offset and layout geometry
pub mod tiles;

pub use mask::MaskGrid;
