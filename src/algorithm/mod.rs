/// Assembly from corner through borders to interior cells
pub mod assembler;
/// Fixed-capacity bitset over closure positions
pub mod bitset;
/// Interior cropping and stitching of placed tiles
pub mod composer;
/// Pipeline orchestration from tiles to match report
pub mod executor;
/// Fingerprint index over the orientation closure
pub mod index;
/// Mask search across image orientations
pub mod matcher;
