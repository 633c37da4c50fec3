//! Analysis of chosen placements

/// Per-subdomain load statistics
pub mod statistics;
