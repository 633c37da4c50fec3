use crate::{
    algorithm::neighbors::{Subdomain, build_neighbor_graph},
    algorithm::numbering::{SubdomainIds, number_subdomains},
    algorithm::search::{Placement, SearchObserver, SizeRange, search_offsets, search_sizes},
    algorithm::selection::select_best,
    analysis::statistics::LoadSummary,
    io::error::{DecompositionError, Result, invalid_parameter},
    spatial::MaskGrid,
    spatial::tiles::TileSize,
};

/// What the decomposition should optimise for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompositionRequest {
    /// Fixed tile size: use as few subdomains as possible, then balance load
    MinimalCount {
        /// Tile size to place
        size: TileSize,
    },
    /// Exactly `processors` subdomains, searching tile sizes in a range
    ProcessorCount {
        /// Requested number of subdomains
        processors: usize,
        /// Tile sizes to try
        sizes: SizeRange,
    },
}

impl DecompositionRequest {
    /// Describe the searched configuration for error messages
    pub fn describe(&self) -> String {
        match self {
            Self::MinimalCount { size } => format!("nx={}, ny={}", size.nx, size.ny),
            Self::ProcessorCount { sizes, .. } => sizes.to_string(),
        }
    }
}

/// Chosen placement with numbered subdomains and their neighbor graph
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Winning placement
    pub placement: Placement,
    /// Subdomain id of every tile slot
    pub ids: SubdomainIds,
    /// Numbered subdomains in id order
    pub subdomains: Vec<Subdomain>,
}

impl Decomposition {
    /// Number and connect the subdomains of a placement
    ///
    /// # Errors
    ///
    /// Returns an error if the placement's offset is invalid for its size
    pub fn from_placement(mask: &MaskGrid, placement: Placement) -> Result<Self> {
        let ids = number_subdomains(mask, placement.size, placement.offset)?;
        let subdomains = build_neighbor_graph(&ids);
        Ok(Self {
            placement,
            ids,
            subdomains,
        })
    }

    /// Tile size of the chosen placement
    pub const fn size(&self) -> TileSize {
        self.placement.size
    }

    /// Grid dimensions `(height, width)` the decomposition covers
    pub const fn grid_dimensions(&self) -> (usize, usize) {
        (self.ids.layout().height(), self.ids.layout().width())
    }

    /// Load-balance statistics, `None` if nothing was numbered
    pub fn load_summary(&self) -> Option<LoadSummary> {
        LoadSummary::from_counts(&self.placement.wet_counts, self.placement.size.area())
    }
}

/// Search, select and number the best placement for a request
///
/// # Errors
///
/// Returns an error if:
/// - The requested processor count is zero
/// - No placement in the searched sizes reaches the requested count
/// - The mask has no wet cells in minimal-count mode
pub fn decompose(
    mask: &MaskGrid,
    request: &DecompositionRequest,
    observer: &mut impl SearchObserver,
) -> Result<Decomposition> {
    let (candidates, requested) = match request {
        DecompositionRequest::MinimalCount { size } => {
            let mut groups = search_offsets(mask, *size)?;
            let candidates = groups
                .min_count()
                .filter(|&count| count > 0)
                .map(|count| groups.take_count(count))
                .unwrap_or_default();
            (candidates, None)
        }
        DecompositionRequest::ProcessorCount { processors, sizes } => {
            if *processors == 0 {
                return Err(invalid_parameter(
                    "ncpus",
                    processors,
                    &"processor count must be positive",
                ));
            }
            (
                search_sizes(mask, sizes, *processors, observer)?,
                Some(*processors),
            )
        }
    };

    let best = select_best(candidates).ok_or_else(|| DecompositionError::NoFeasiblePlacement {
        requested,
        attempted: request.describe(),
    })?;

    Decomposition::from_placement(mask, best)
}
