//! Decomposition constants and runtime configuration defaults

// Size search range used when only --ncpus pins the problem
/// Default lower bound for the tile width and height searched
pub const DEFAULT_MIN_TILE_EXTENT: usize = 30;
/// Default upper bound for the tile width and height searched
pub const DEFAULT_MAX_TILE_EXTENT: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed mask dimension (rows or columns)
pub const MAX_GRID_DIMENSION: usize = 100_000;

/// Id marking an empty tile or an out-of-range neighbor
pub const NO_SUBDOMAIN: i64 = -1;

/// Trailing flag written after every subdomain record
pub const SUBDOMAIN_RECORD_FLAG: i64 = 1;

/// Number of neighbor slots per subdomain record
pub const NEIGHBOR_COUNT: usize = 8;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
