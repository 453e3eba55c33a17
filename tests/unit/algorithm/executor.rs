//! Tests for the end-to-end pipeline and stage reporting

#[cfg(test)]
mod tests {
    use crate::fixtures::{PUZZLE_3X3_IMAGE, mutated_puzzle, puzzle_tiles};
    use tileseam::TilingError;
    use tileseam::algorithm::executor::{Stage, solve, solve_with_observer};
    use tileseam::algorithm::matcher::Mask;
    use tileseam::spatial::grid::Grid;
    use tileseam::spatial::orientation::Orientation;

    fn cup() -> Mask {
        Mask::from_text(&["#.#", "###"]).expect("mask has set cells")
    }

    // Tests every artifact of a successful run
    // Verified by reporting the first orientation with any match
    #[test]
    fn test_solve_puzzle() {
        let solution = solve(&puzzle_tiles(), &cup()).expect("puzzle solves");

        assert_eq!(solution.corner_product, 1_511_796_038_648);
        assert_eq!(
            solution.image,
            Grid::from_rows(&PUZZLE_3X3_IMAGE).expect("valid grid rows")
        );
        assert_eq!(solution.placement.side(), 3);
        assert_eq!(solution.report.orientation, Orientation::Rotate90);
        assert_eq!(solution.report.anchors, vec![(1, 8), (2, 6), (7, 1)]);
        assert_eq!(solution.report.occurrences, 3);
        assert_eq!(solution.report.total_set, 74);
        assert_eq!(solution.report.residual, 60);
    }

    // Tests stage notifications in pipeline order
    #[test]
    fn test_observer_sees_every_stage() {
        let mut stages = Vec::new();
        solve_with_observer(&puzzle_tiles(), &cup(), |stage| stages.push(stage))
            .expect("puzzle solves");
        assert_eq!(
            stages,
            vec![Stage::Index, Stage::Assemble, Stage::Compose, Stage::Match]
        );
    }

    // Tests that a failing stage stops the pipeline
    // Verified by composing a partial placement after a conflict
    #[test]
    fn test_failure_stops_pipeline() {
        let mut stages = Vec::new();
        let result = solve_with_observer(&mutated_puzzle(7, 4, 0), &cup(), |stage| {
            stages.push(stage);
        });
        assert!(matches!(result, Err(TilingError::AssemblyConflict { .. })));
        assert_eq!(stages, vec![Stage::Index, Stage::Assemble]);
    }

    // Tests that a missing pattern fails the whole run
    #[test]
    fn test_pattern_not_found_fails_run() {
        let result = solve(&puzzle_tiles(), &Mask::sea_monster());
        assert!(matches!(
            result,
            Err(TilingError::PatternNotFound {
                mask_dimensions: (3, 20),
                image_dimensions: (12, 12)
            })
        ));
    }

    // Tests stage labels
    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Index.label(), "indexing");
        assert_eq!(Stage::Match.label(), "matching");
        assert_ne!(Stage::Assemble.label(), Stage::Compose.label());
    }
}
