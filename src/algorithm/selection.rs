use crate::algorithm::search::Placement;

/// Order placements by their largest per-subdomain wet count, ascending
///
/// The maximum bounds the slowest worker of a parallel run. The sort is
/// stable, so placements with equal maxima keep their enumeration order.
pub fn rank_by_load(mut candidates: Vec<Placement>) -> Vec<Placement> {
    candidates.sort_by_key(Placement::max_load);
    candidates
}

/// Pick the best balanced placement, or `None` for an empty pool
///
/// Ties go to the placement enumerated first.
pub fn select_best(candidates: Vec<Placement>) -> Option<Placement> {
    rank_by_load(candidates).into_iter().next()
}
