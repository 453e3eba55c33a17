//! Assembly constants and runtime configuration defaults

// Tile shape limits
/// Smallest tile side that still has an interior after cropping
pub const MIN_TILE_SIDE: usize = 3;
/// Largest tile side whose edges fit in a 64-bit fingerprint
pub const MAX_TILE_SIDE: usize = 64;

/// Corner tile-orientations exposed by a well-posed puzzle
///
/// Four physical corner tiles, each in two diagonal-mirror orientations.
pub const CORNER_CANDIDATES: usize = 8;

/// Physical tiles at the corners of a grid larger than one tile
pub const CORNER_TILES: usize = 4;

/// Prefix of a tile header line (`Tile 2311:`)
pub const TILE_HEADER_PREFIX: &str = "Tile ";

/// The default search pattern, one text row per mask row
///
/// `#` cells must be set in the image; spaces are don't-care.
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Synthetic puzzle generation
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default tile side for generated puzzles
pub const DEFAULT_TILE_SIDE: usize = 10;
/// Default number of tiles along each side of a generated puzzle
pub const DEFAULT_GRID_SIDE: usize = 12;
/// Attempts to draw a unique border before giving up
pub const MAX_BORDER_ATTEMPTS: usize = 1_000;
/// Smallest generated tile id
pub const MIN_GENERATED_ID: u64 = 1_000;
/// Largest generated tile id
pub const MAX_GENERATED_ID: u64 = 9_999;
/// Empty rows and columns kept around planted patterns
pub const PATTERN_SPACING: usize = 2;

// Input and output files
/// Extension of tile files picked up from a directory
pub const INPUT_EXTENSION: &str = "txt";
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_image";

// Image export colours (RGBA)
/// Colour of set pixels outside any pattern match
pub const SET_COLOUR: [u8; 4] = [32, 96, 160, 255];
/// Colour of set pixels covered by a pattern match
pub const PATTERN_COLOUR: [u8; 4] = [230, 80, 40, 255];
/// Colour of unset pixels
pub const UNSET_COLOUR: [u8; 4] = [8, 16, 40, 255];
/// Character marking matched pixels in text renders
pub const PATTERN_PIXEL: char = 'O';

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Pipeline stages reported per file
pub const PIPELINE_STAGES: u64 = 5;
