//! Tests for mask storage and rectangle wet counts

#[cfg(test)]
mod tests {
    use ndarray::array;
    use subdiv::DecompositionError;
    use subdiv::spatial::MaskGrid;

    fn checkerboard() -> MaskGrid {
        // 1 0 1
        // 0 1 0
        let cells = [true, false, true, false, true, false];
        MaskGrid::from_cells(2, 3, &cells).unwrap()
    }

    // Tests dimensions and total wet count
    // Verified by swapping height and width in from_cells
    #[test]
    fn test_dimensions_and_total() {
        let mask = checkerboard();
        assert_eq!(mask.height(), 2);
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.total_wet(), 3);
    }

    // Tests individual cell lookup is row-major
    // Verified by indexing bits column-major
    #[test]
    fn test_is_wet_row_major() {
        let mask = checkerboard();
        assert!(mask.is_wet(0, 0));
        assert!(!mask.is_wet(0, 1));
        assert!(mask.is_wet(0, 2));
        assert!(mask.is_wet(1, 1));
        assert!(!mask.is_wet(1, 2));
        assert!(!mask.is_wet(2, 0), "Rows past the grid are dry");
        assert!(!mask.is_wet(0, 3), "Columns past the grid are dry");
    }

    // Tests rectangle counts against the summed-area table
    // Verified by dropping the top-left correction term
    #[test]
    fn test_wet_count_rectangles() {
        let mask = checkerboard();
        assert_eq!(mask.wet_count(0..2, 0..3), 3);
        assert_eq!(mask.wet_count(0..1, 0..3), 2);
        assert_eq!(mask.wet_count(1..2, 1..3), 1);
        assert_eq!(mask.wet_count(0..2, 1..2), 1);
        assert_eq!(mask.wet_count(1..1, 0..3), 0);
    }

    // Tests ranges reaching past the grid are clipped
    // Verified by removing the min() clamps
    #[test]
    fn test_wet_count_clips_to_grid() {
        let mask = checkerboard();
        assert_eq!(mask.wet_count(0..10, 0..10), 3);
        assert_eq!(mask.wet_count(1..10, 2..10), 0);
        assert_eq!(mask.wet_count(5..10, 0..3), 0);
    }

    // Tests construction from an ndarray matches flat construction
    // Verified by transposing the array before collecting
    #[test]
    fn test_from_array_matches_cells() {
        let cells = array![[true, false, true], [false, true, false]];
        let from_array = MaskGrid::from_array(&cells);
        let from_cells = checkerboard();

        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(from_array.is_wet(row, col), from_cells.is_wet(row, col));
            }
        }
        assert_eq!(from_array.wet_count(0..2, 0..2), 2);
    }

    // Tests mismatched cell count is rejected
    // Verified by removing the length check
    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let result = MaskGrid::from_cells(2, 2, &[true, false, true]);
        assert!(matches!(
            result,
            Err(DecompositionError::InvalidParameter {
                parameter: "cells",
                ..
            })
        ));
    }
}
