//! Tests for synthetic puzzle generation

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tileseam::TilingError;
    use tileseam::algorithm::assembler::assemble;
    use tileseam::algorithm::composer::compose;
    use tileseam::algorithm::matcher::Mask;
    use tileseam::io::configuration::{MAX_GENERATED_ID, MIN_GENERATED_ID};
    use tileseam::spatial::cutter::PuzzleCutter;
    use tileseam::spatial::grid::Grid;
    use tileseam::spatial::orientation::orientations;

    // Tests tile side validation
    #[test]
    fn test_new_rejects_bad_sides() {
        assert!(matches!(
            PuzzleCutter::new(2, 0),
            Err(TilingError::InvalidParameter { parameter: "tile_side", .. })
        ));
        assert!(PuzzleCutter::new(65, 0).is_err());
        let cutter = PuzzleCutter::new(10, 0).expect("valid side");
        assert_eq!(cutter.interior_side(), 8);
    }

    // Tests stamping of non-overlapping pattern copies on an empty background
    // Verified by letting stamped copies overlap
    #[test]
    fn test_picture_stamps_copies() {
        let mask = Mask::sea_monster();
        let mut cutter = PuzzleCutter::new(10, 7).expect("valid side");
        let picture = cutter.picture(24, 0.0, &mask, 3).expect("copies fit");
        assert_eq!((picture.rows(), picture.cols()), (24, 24));
        assert_eq!(picture.count_set(), 3 * mask.set_count());
    }

    // Tests parameter validation of picture generation
    #[test]
    fn test_picture_rejects_bad_parameters() {
        let mask = Mask::sea_monster();
        let mut cutter = PuzzleCutter::new(10, 7).expect("valid side");
        assert!(cutter.picture(24, 1.5, &mask, 0).is_err());
        assert!(cutter.picture(8, 0.0, &mask, 1).is_err());
        assert!(cutter.picture(24, 0.0, &mask, 50).is_err());
        assert_eq!(
            cutter.picture(16, 1.0, &mask, 0).expect("full picture").count_set(),
            256
        );
    }

    // Tests tile count, ids and sides of a cut picture
    // Verified by drawing ids with replacement
    #[test]
    fn test_cut_produces_valid_tiles() {
        let mut cutter = PuzzleCutter::new(8, 3).expect("valid side");
        let picture = cutter.picture(24, 0.5, &Mask::sea_monster(), 0).expect("picture");
        let tiles = cutter.cut(&picture).expect("cut succeeds");

        assert_eq!(tiles.len(), 16);
        let ids: HashSet<u64> = tiles.iter().map(|tile| tile.id()).collect();
        assert_eq!(ids.len(), 16);
        assert!(ids.iter().all(|id| (MIN_GENERATED_ID..=MAX_GENERATED_ID).contains(id)));
        assert!(tiles.iter().all(|tile| tile.side() == 8));
    }

    // Tests that a cut reassembles into an orientation of the picture
    // Verified by offsetting interior pixels by one in the lattice
    #[test]
    fn test_cut_reassembles_to_picture() {
        for seed in 0..4 {
            let mut cutter = PuzzleCutter::new(10, seed).expect("valid side");
            let picture = cutter.picture(24, 0.45, &Mask::sea_monster(), 0).expect("picture");
            let tiles = cutter.cut(&picture).expect("cut succeeds");

            let placement = assemble(&tiles).expect("generated puzzle assembles");
            assert!(placement.seams_consistent());
            let image = compose(&placement).expect("placement composes");
            assert!(
                orientations(&picture).iter().any(|(_, oriented)| *oriented == image),
                "seed {seed}: composed image is not an orientation of the picture"
            );
        }
    }

    // Tests that a single-tile picture is accepted
    #[test]
    fn test_cut_single_tile() {
        let mut cutter = PuzzleCutter::new(6, 11).expect("valid side");
        let picture = Grid::from_rows(&["#...", ".##.", "...#", "#..."]).expect("valid grid rows");
        let tiles = cutter.cut(&picture).expect("cut succeeds");
        assert_eq!(tiles.len(), 1);
        let image = compose(&assemble(&tiles).expect("assembles")).expect("composes");
        assert!(orientations(&picture).iter().any(|(_, oriented)| *oriented == image));
    }

    // Tests rejection of pictures that do not divide into tiles
    #[test]
    fn test_cut_rejects_misfit_picture() {
        let mut cutter = PuzzleCutter::new(10, 1).expect("valid side");
        assert!(cutter.cut(&Grid::new(20, 20)).is_err());
        assert!(cutter.cut(&Grid::new(16, 24)).is_err());
        assert!(cutter.cut(&Grid::new(0, 0)).is_err());
    }
}
