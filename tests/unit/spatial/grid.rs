//! Tests for pixel grid parsing, transforms and text form

#[cfg(test)]
mod tests {
    use tileseam::TilingError;
    use tileseam::spatial::grid::Grid;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).expect("valid grid rows")
    }

    // Tests row parsing into set and unset pixels
    // Verified by swapping the pixel characters
    #[test]
    fn test_from_rows_reads_pixels() {
        let g = grid(&["#.", ".#", "##"]);
        assert_eq!((g.rows(), g.cols()), (3, 2));
        assert_eq!(g.get(0, 0), Some(true));
        assert_eq!(g.get(0, 1), Some(false));
        assert_eq!(g.get(2, 1), Some(true));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.count_set(), 4);
    }

    // Tests rejection of ragged rows with the offending line number
    // Verified by reporting 0-based line numbers
    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Grid::from_rows(&["##", "#", "##"]);
        assert!(matches!(result, Err(TilingError::Parse { line: 2, .. })));
    }

    // Tests rejection of unknown pixel characters
    #[test]
    fn test_from_rows_rejects_unknown_characters() {
        let result = Grid::from_rows(&["#.", "#x"]);
        assert!(matches!(result, Err(TilingError::Parse { line: 2, .. })));
    }

    // Tests clockwise quarter turn on a non-square grid
    // Verified by reversing rows instead of columns after the transpose
    #[test]
    fn test_rotate_90_clockwise() {
        let g = grid(&["#..", "..."]);
        let rotated = g.rotate_90();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 2));
        assert_eq!(rotated.to_string(), ".#\n..\n..");
    }

    // Tests that four quarter turns restore the grid
    #[test]
    fn test_four_rotations_are_identity() {
        let g = grid(&["##.", "#..", "..#"]);
        let back = g.rotate_90().rotate_90().rotate_90().rotate_90();
        assert_eq!(back, g);
    }

    // Tests horizontal mirroring reverses each row
    #[test]
    fn test_mirror_horizontal() {
        let g = grid(&["##.", "#.."]);
        assert_eq!(g.mirror_horizontal().to_string(), ".##\n..#");
        assert_eq!(g.mirror_horizontal().mirror_horizontal(), g);
    }

    // Tests interior cropping and degenerate inputs
    // Verified by cropping two pixels per side
    #[test]
    fn test_interior() {
        let g = grid(&["####", "#..#", "#.##", "####"]);
        assert_eq!(g.interior().to_string(), "..\n.#");
        assert_eq!(grid(&["#"]).interior().rows(), 0);
        assert_eq!(grid(&["##", "##"]).interior().count_set(), 0);
    }

    // Tests border bit iteration order
    #[test]
    fn test_row_and_column_bits() {
        let g = grid(&["#..", "#.#", "..#"]);
        assert_eq!(g.row_bits(0).collect::<Vec<_>>(), vec![true, false, false]);
        assert_eq!(g.column_bits(2).collect::<Vec<_>>(), vec![false, true, true]);
        assert_eq!(g.row_bits(5).count(), 0);
    }

    // Tests set positions in row-major order
    #[test]
    fn test_set_positions() {
        let g = grid(&[".#", "#."]);
        assert_eq!(g.set_positions(), vec![(0, 1), (1, 0)]);
        assert!(Grid::new(2, 2).set_positions().is_empty());
    }

    // Tests display without a trailing newline
    #[test]
    fn test_display_round_trips_rows() {
        let rows = ["#..#", ".##."];
        let g = grid(&rows);
        assert_eq!(g.to_string(), rows.join("\n"));
        assert!(!g.is_square());
    }
}
