//! Exhaustive placement search over offsets and tile sizes

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use crate::algorithm::evaluation::evaluate_layout;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::MaskGrid;
use crate::spatial::tiles::{Offset, TileLayout, TileSize};

/// One candidate tiling with the wet count of each non-empty tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Tile size used
    pub size: TileSize,
    /// Offset of the first tile boundary
    pub offset: Offset,
    /// Wet counts of the non-empty tiles in row-major tile order
    pub wet_counts: Vec<usize>,
}

impl Placement {
    /// Number of subdomains this placement produces
    pub fn subdomain_count(&self) -> usize {
        self.wet_counts.len()
    }

    /// Largest per-subdomain wet count, 0 when there are no subdomains
    pub fn max_load(&self) -> usize {
        self.wet_counts.iter().copied().max().unwrap_or(0)
    }
}

/// Placements of one tile size grouped by their subdomain count
///
/// Within a group placements keep enumeration order.
#[derive(Debug, Clone, Default)]
pub struct PlacementGroups {
    groups: BTreeMap<usize, Vec<Placement>>,
}

impl PlacementGroups {
    /// Add a placement to the group matching its subdomain count
    pub fn insert(&mut self, placement: Placement) {
        self.groups
            .entry(placement.subdomain_count())
            .or_default()
            .push(placement);
    }

    /// Placements producing exactly `count` subdomains
    pub fn with_count(&self, count: usize) -> &[Placement] {
        self.groups.get(&count).map_or(&[], Vec::as_slice)
    }

    /// Remove and return the placements producing exactly `count` subdomains
    pub fn take_count(&mut self, count: usize) -> Vec<Placement> {
        self.groups.remove(&count).unwrap_or_default()
    }

    /// Smallest subdomain count reached by any placement
    pub fn min_count(&self) -> Option<usize> {
        self.groups.keys().next().copied()
    }

    /// All subdomain counts reached, ascending
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    /// Total number of placements across all groups
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Test if no placement has been recorded
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Evaluate every offset of one tile size and group the results by count
///
/// # Errors
///
/// Infallible for sizes built through [`TileSize::new`]; the error is kept
/// for layouts constructed from raw fields
pub fn search_offsets(mask: &MaskGrid, size: TileSize) -> Result<PlacementGroups> {
    let mut groups = PlacementGroups::default();
    for offset in size.offsets() {
        let layout = TileLayout::new(size, offset, mask.height(), mask.width())?;
        groups.insert(Placement {
            size,
            offset,
            wet_counts: evaluate_layout(mask, &layout),
        });
    }
    Ok(groups)
}

/// Inclusive ranges of tile widths and heights to search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRange {
    /// Tile widths searched
    pub nx: RangeInclusive<usize>,
    /// Tile heights searched (ignored when `square` is set)
    pub ny: RangeInclusive<usize>,
    /// Only try square tiles `(nx, nx)`
    pub square: bool,
}

impl SizeRange {
    /// Create a size range, rejecting zero extents and inverted bounds
    ///
    /// # Errors
    ///
    /// Returns an error if a lower bound is zero or exceeds its upper bound
    pub fn new(
        nx: RangeInclusive<usize>,
        ny: RangeInclusive<usize>,
        square: bool,
    ) -> Result<Self> {
        for (name, range) in [("nx range", &nx), ("ny range", &ny)] {
            if *range.start() == 0 {
                return Err(invalid_parameter(
                    name,
                    &format!("{}..={}", range.start(), range.end()),
                    &"tile extents must be positive",
                ));
            }
            if range.start() > range.end() {
                return Err(invalid_parameter(
                    name,
                    &format!("{}..={}", range.start(), range.end()),
                    &"minimum exceeds maximum",
                ));
            }
        }
        Ok(Self { nx, ny, square })
    }

    /// A range holding exactly one size
    pub const fn single(size: TileSize) -> Self {
        Self {
            nx: size.nx..=size.nx,
            ny: size.ny..=size.ny,
            square: false,
        }
    }

    /// Every size in enumeration order: `nx` outer, `ny` inner, ascending
    pub fn sizes(&self) -> Vec<TileSize> {
        if self.square {
            return self
                .nx
                .clone()
                .map(|n| TileSize { nx: n, ny: n })
                .collect();
        }
        self.nx
            .clone()
            .flat_map(|nx| self.ny.clone().map(move |ny| TileSize { nx, ny }))
            .collect()
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.square {
            write!(f, "square tiles {}..={}", self.nx.start(), self.nx.end())
        } else {
            write!(
                f,
                "nx {}..={}, ny {}..={}",
                self.nx.start(),
                self.nx.end(),
                self.ny.start(),
                self.ny.end()
            )
        }
    }
}

/// Receives per-size search results, e.g. to drive a progress display
pub trait SearchObserver {
    /// Called once before the search with the number of sizes to try
    fn started(&mut self, _sizes: usize) {}

    /// Called after each size with the number of matching placements
    fn size_searched(&mut self, size: TileSize, matches: usize);

    /// Called once after the last size
    fn finished(&mut self) {}
}

/// Observer that ignores all events
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {
    fn size_searched(&mut self, _size: TileSize, _matches: usize) {}
}

/// Pool every placement with exactly `target` subdomains across a size range
///
/// Placements are pooled in enumeration order (sizes first, then offsets),
/// which is the tie-break order used by selection.
///
/// # Errors
///
/// Returns an error if a size in the range is invalid
pub fn search_sizes(
    mask: &MaskGrid,
    range: &SizeRange,
    target: usize,
    observer: &mut impl SearchObserver,
) -> Result<Vec<Placement>> {
    let sizes = range.sizes();
    observer.started(sizes.len());

    let mut pool = Vec::new();
    for size in sizes {
        let size = TileSize::new(size.nx, size.ny)?;
        let matches = search_offsets(mask, size)?.take_count(target);
        observer.size_searched(size, matches.len());
        pool.extend(matches);
    }

    observer.finished();
    Ok(pool)
}
