/// Tiling evaluation: per-tile wet counts for one placement
pub mod evaluation;
/// Search orchestration from request to numbered decomposition
pub mod executor;
/// Eight-neighbor graph over numbered subdomains
pub mod neighbors;
/// Dense subdomain numbering of non-empty tiles
pub mod numbering;
/// Offset and tile size search grouped by subdomain count
pub mod search;
/// Load-balance selection among equivalent placements
pub mod selection;
