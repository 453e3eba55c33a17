//! PNG export and text rendering of the searched image

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::algorithm::matcher::{Mask, MatchReport};
use crate::io::configuration::{PATTERN_COLOUR, PATTERN_PIXEL, SET_COLOUR, UNSET_COLOUR};
use crate::io::error::{Result, TilingError, computation_error};
use crate::spatial::grid::{SET_PIXEL, UNSET_PIXEL};

/// Render the report image as text, matched pixels drawn as `O`
pub fn render_matches(report: &MatchReport, mask: &Mask) -> String {
    let coverage = report.coverage(mask);
    let mut text = String::with_capacity(report.image.rows() * (report.image.cols() + 1));
    for row in 0..report.image.rows() {
        for col in 0..report.image.cols() {
            let ch = match (report.image.get(row, col), coverage.get(row, col)) {
                (_, Some(true)) => PATTERN_PIXEL,
                (Some(true), _) => SET_PIXEL,
                _ => UNSET_PIXEL,
            };
            text.push(ch);
        }
        text.push('\n');
    }
    text
}

/// Export the report image as a PNG, matched pixels highlighted
///
/// # Errors
///
/// Returns an error if:
/// - The image is too large for PNG dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_matches_as_png(report: &MatchReport, mask: &Mask, output_path: &Path) -> Result<()> {
    let coverage = report.coverage(mask);
    let width =
        u32::try_from(report.image.cols()).map_err(|e| computation_error("png export", &e))?;
    let height =
        u32::try_from(report.image.rows()).map_err(|e| computation_error("png export", &e))?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let (row, col) = (y as usize, x as usize);
        let colour = match (report.image.get(row, col), coverage.get(row, col)) {
            (_, Some(true)) => PATTERN_COLOUR,
            (Some(true), _) => SET_COLOUR,
            _ => UNSET_COLOUR,
        };
        Rgba(colour)
    });

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| TilingError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
