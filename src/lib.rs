//! Rectangular domain decomposition of wet/dry land-sea masks
//!
//! The grid is cut into equally sized tiles whose placement (and optionally
//! size) is searched exhaustively to minimise the number of non-empty tiles or
//! to hit a requested processor count with the smallest per-tile load. The
//! surviving tiles are numbered, linked to their eight neighbors, and written
//! in the subdomain file layout read by parallel ocean solvers.

#![forbid(unsafe_code)]

/// Placement search, selection, numbering and the neighbor graph
pub mod algorithm;
/// Load-balance statistics for chosen placements
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mask storage and tile geometry
pub mod spatial;

pub use io::error::{DecompositionError, Result};
