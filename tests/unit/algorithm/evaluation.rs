//! Tests for per-tile wet counts of a single placement

#[cfg(test)]
mod tests {
    use subdiv::algorithm::evaluation::evaluate_tiling;
    use subdiv::io::mask::parse_mask;
    use subdiv::spatial::tiles::{Offset, TileSize};

    // Tests aligned tiling of an all-wet grid
    // Verified by counting cells instead of wet cells
    #[test]
    fn test_all_wet_aligned() {
        let mask = parse_mask("1111\n1111\n1111\n1111\n").unwrap();
        let counts =
            evaluate_tiling(&mask, TileSize::new(2, 2).unwrap(), Offset::new(0, 0)).unwrap();
        assert_eq!(counts, vec![4, 4, 4, 4]);
    }

    // Tests clipped first column shrinks edge tiles
    // Verified by ignoring the clip at istart < 0
    #[test]
    fn test_clipped_offset_counts() {
        let mask = parse_mask("1111\n1111\n1111\n1111\n").unwrap();
        let counts =
            evaluate_tiling(&mask, TileSize::new(2, 2).unwrap(), Offset::new(-1, 0)).unwrap();
        assert_eq!(counts, vec![2, 4, 2, 2, 4, 2]);
    }

    // Tests dry tiles are dropped and a dry row reduces the tile count
    // Verified by keeping zero counts in the result
    #[test]
    fn test_dry_row_drops_tiles() {
        let wet = parse_mask("1111\n1111\n1111\n1111\n").unwrap();
        let dry_top = parse_mask("0000\n1111\n1111\n1111\n").unwrap();
        let size = TileSize::new(2, 2).unwrap();
        let offset = Offset::new(0, -1);

        let all_wet = evaluate_tiling(&wet, size, offset).unwrap();
        let with_dry_row = evaluate_tiling(&dry_top, size, offset).unwrap();

        assert_eq!(all_wet, vec![2, 2, 4, 4, 2, 2]);
        assert_eq!(with_dry_row, vec![4, 4, 2, 2]);
        assert!(with_dry_row.len() < all_wet.len());
    }

    // Tests counts always sum to the total wet cells
    // Verified by dropping the last tile column
    #[test]
    fn test_counts_sum_to_total() {
        let mask = parse_mask("01100\n11110\n00111\n10001\n01110\n").unwrap();
        let size = TileSize::new(2, 3).unwrap();
        for offset in size.offsets() {
            let counts = evaluate_tiling(&mask, size, offset).unwrap();
            assert_eq!(counts.iter().sum::<usize>(), mask.total_wet());
            assert!(counts.iter().all(|&count| count > 0));
        }
    }

    // Tests an all-dry mask has no subdomains
    // Verified by appending empty tiles
    #[test]
    fn test_all_dry_is_empty() {
        let mask = parse_mask("000\n000\n").unwrap();
        let counts =
            evaluate_tiling(&mask, TileSize::new(2, 2).unwrap(), Offset::new(-1, -1)).unwrap();
        assert!(counts.is_empty());
    }

    // Tests an offset outside the valid range is reported
    // Verified by skipping layout validation
    #[test]
    fn test_invalid_offset_rejected() {
        let mask = parse_mask("11\n11\n").unwrap();
        assert!(evaluate_tiling(&mask, TileSize::new(2, 2).unwrap(), Offset::new(1, 0)).is_err());
    }
}
