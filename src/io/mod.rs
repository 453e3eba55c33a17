/// Command-line interface and batch processing
pub mod cli;
/// Constants shared across the crate
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Text rendering and PNG export of match reports
pub mod image;
/// Tile set and mask text formats
pub mod parser;
/// Progress display for batch solves
pub mod progress;
