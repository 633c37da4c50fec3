//! Tests for load-balance ranking and tie-breaking

#[cfg(test)]
mod tests {
    use subdiv::algorithm::search::Placement;
    use subdiv::algorithm::selection::{rank_by_load, select_best};
    use subdiv::spatial::tiles::{Offset, TileSize};

    fn placement(ioffset: i64, wet_counts: Vec<usize>) -> Placement {
        Placement {
            size: TileSize::new(4, 4).unwrap(),
            offset: Offset::new(ioffset, 0),
            wet_counts,
        }
    }

    // Tests ranking is ascending by maximum and stable on ties
    // Verified by using an unstable sort
    #[test]
    fn test_rank_by_load_is_stable() {
        let ranked = rank_by_load(vec![
            placement(-3, vec![3, 3]),
            placement(-2, vec![2, 4]),
            placement(-1, vec![4, 2]),
            placement(0, vec![3, 3]),
        ]);
        let order: Vec<i64> = ranked.iter().map(|p| p.offset.ioffset).collect();
        assert_eq!(order, vec![-3, 0, -2, -1]);
    }

    // Tests the first of equally balanced placements wins
    // Verified by picking the last minimum
    #[test]
    fn test_select_best_prefers_first_on_tie() {
        let best = select_best(vec![
            placement(-2, vec![5, 1]),
            placement(-1, vec![3, 3]),
            placement(0, vec![1, 3]),
        ])
        .unwrap();
        assert_eq!(best.offset.ioffset, -1);
    }

    // Tests only the maximum matters, not the spread
    // Verified by ranking on the sum of counts
    #[test]
    fn test_select_best_ignores_minimum() {
        let best = select_best(vec![placement(-1, vec![6, 6]), placement(0, vec![1, 7])]).unwrap();
        assert_eq!(best.offset.ioffset, -1);
    }

    // Tests an empty pool has no winner
    // Verified by returning a default placement
    #[test]
    fn test_select_best_empty() {
        assert!(select_best(Vec::new()).is_none());
    }
}
