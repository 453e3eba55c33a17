//! Tests for the tile set and mask text formats

#[cfg(test)]
mod tests {
    use crate::fixtures::PUZZLE_3X3;
    use tileseam::TilingError;
    use tileseam::io::parser::{format_tiles, parse_mask, parse_tiles};
    use tileseam::spatial::orientation::Orientation;
    use tileseam::spatial::tile::Edge;

    // Tests parsing of the fixture puzzle
    #[test]
    fn test_parse_tiles() {
        let tiles = parse_tiles(PUZZLE_3X3).expect("fixture parses");
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[0].id(), 1003);
        assert_eq!(tiles[8].id(), 1101);
        assert!(tiles.iter().all(|tile| tile.side() == 6));
        assert!(tiles.iter().all(|tile| tile.orientation() == Orientation::Identity));
        // First row of tile 1003 is "#..##."
        assert_eq!(tiles[0].border(Edge::Top), 0b100_110);
    }

    // Tests tolerance of surrounding and repeated blank lines
    #[test]
    fn test_parse_tiles_blank_lines() {
        let text = "\n\nTile 1:\n#..\n.#.\n..#\n\n\n\nTile 2:\n###\n...\n###\n\n";
        let tiles = parse_tiles(text).expect("tiles parse");
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].id(), 2);
    }

    // Tests header validation with line numbers
    // Verified by accepting headers without the trailing colon
    #[test]
    fn test_parse_tiles_bad_header() {
        let missing_colon = "Tile 12\n###\n###\n###\n";
        assert!(matches!(
            parse_tiles(missing_colon),
            Err(TilingError::Parse { line: 1, .. })
        ));

        let second = "Tile 1:\n###\n###\n###\n\nTitle 2:\n###\n###\n###\n";
        assert!(matches!(
            parse_tiles(second),
            Err(TilingError::Parse { line: 6, .. })
        ));

        let not_numeric = "Tile abc:\n###\n###\n###\n";
        assert!(parse_tiles(not_numeric).is_err());
    }

    // Tests pixel errors report the line within the whole text
    #[test]
    fn test_parse_tiles_bad_pixels() {
        let text = "Tile 1:\n###\n#x#\n###\n";
        assert!(matches!(
            parse_tiles(text),
            Err(TilingError::Parse { line: 3, .. })
        ));
    }

    // Tests shape and identity checks across tiles
    #[test]
    fn test_parse_tiles_malformed() {
        let not_square = "Tile 1:\n###\n###\n";
        assert!(matches!(
            parse_tiles(not_square),
            Err(TilingError::MalformedTile { id: 1, .. })
        ));

        let mismatch = "Tile 1:\n###\n###\n###\n\nTile 2:\n####\n####\n####\n####\n";
        assert!(matches!(
            parse_tiles(mismatch),
            Err(TilingError::MalformedTile { id: 2, .. })
        ));

        let duplicate = "Tile 7:\n###\n###\n###\n\nTile 7:\n...\n...\n...\n";
        assert!(matches!(
            parse_tiles(duplicate),
            Err(TilingError::MalformedTile { id: 7, .. })
        ));
    }

    // Tests rejection of input without tiles
    #[test]
    fn test_parse_tiles_empty() {
        assert!(matches!(parse_tiles(""), Err(TilingError::Parse { .. })));
        assert!(matches!(parse_tiles("\n \n"), Err(TilingError::Parse { .. })));
    }

    // Tests that formatted tiles parse back to the same tiles
    // Verified by omitting the blank separator line
    #[test]
    fn test_format_tiles_reparses() {
        let tiles = parse_tiles(PUZZLE_3X3).expect("fixture parses");
        let text = format_tiles(&tiles);
        assert!(text.starts_with("Tile 1003:\n#..##.\n"));
        assert!(text.contains(".\n\nTile 1214:\n"));
        assert_eq!(parse_tiles(&text).expect("formatted text parses"), tiles);
    }

    // Tests mask parsing with blank margins and don't-care characters
    #[test]
    fn test_parse_mask() {
        let mask = parse_mask("\n\n # \n###\n\n").expect("mask parses");
        assert_eq!((mask.rows(), mask.cols()), (2, 3));
        assert_eq!(mask.set_count(), 4);

        assert!(parse_mask("\n...\n").is_err());
        assert!(parse_mask("").is_err());
    }
}
