//! Text formats for tile sets and search masks
//!
//! A tile set is a sequence of blocks separated by blank lines. Each block
//! is a `Tile <id>:` header followed by `S` rows of `#` (set) and `.`
//! (unset). Every tile in a set shares the same side `S` and a unique id.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::algorithm::matcher::Mask;
use crate::io::configuration::TILE_HEADER_PREFIX;
use crate::io::error::{Result, TilingError, malformed_tile};
use crate::spatial::grid::Grid;
use crate::spatial::tile::{Tile, TileId};

/// Parse a tile set
///
/// # Errors
///
/// Returns `Parse` for a missing or malformed header, bad pixel rows or an
/// empty input, and `MalformedTile` for non-square tiles, side mismatches
/// and duplicate ids
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles: Vec<Tile> = Vec::new();
    let mut seen: HashSet<TileId> = HashSet::new();
    let mut lines = text.lines().enumerate().peekable();

    loop {
        // Skip blank separators
        while lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
        let Some((header_index, header)) = lines.next() else {
            break;
        };
        let id = parse_header(header.trim(), header_index + 1)?;

        let mut rows: Vec<&str> = Vec::new();
        while let Some((_, line)) = lines.next_if(|(_, line)| !line.trim().is_empty()) {
            rows.push(line.trim());
        }

        let grid = Grid::from_rows(&rows).map_err(|error| match error {
            TilingError::Parse { line, reason } => TilingError::Parse {
                line: header_index + 1 + line,
                reason,
            },
            other => other,
        })?;
        let tile = Tile::new(id, grid)?;

        if let Some(first) = tiles.first()
            && first.side() != tile.side()
        {
            return Err(malformed_tile(
                id,
                &format!(
                    "side {} differs from the first tile's side {}",
                    tile.side(),
                    first.side()
                ),
            ));
        }
        if !seen.insert(id) {
            return Err(malformed_tile(id, &"duplicate tile id"));
        }
        tiles.push(tile);
    }

    if tiles.is_empty() {
        return Err(TilingError::Parse {
            line: 1,
            reason: "no tiles found".to_string(),
        });
    }
    log::debug!("Parsed {} tiles", tiles.len());
    Ok(tiles)
}

fn parse_header(header: &str, line: usize) -> Result<TileId> {
    header
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(':'))
        .and_then(|id| id.trim().parse::<TileId>().ok())
        .ok_or_else(|| TilingError::Parse {
            line,
            reason: format!("expected a header like '{TILE_HEADER_PREFIX}1234:', found '{header}'"),
        })
}

/// Write tiles in the format read by [`parse_tiles`]
pub fn format_tiles(tiles: &[Tile]) -> String {
    let mut text = String::new();
    for (index, tile) in tiles.iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        // Writing to a String cannot fail
        let _ = writeln!(text, "{tile}");
    }
    text
}

/// Parse a search mask: `#` marks a set cell, anything else is don't-care
///
/// Blank lines at the start and end are ignored; rows may be ragged.
///
/// # Errors
///
/// Returns `InvalidParameter` if the mask has no set cells
pub fn parse_mask(text: &str) -> Result<Mask> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |last| last + 1);
    Mask::from_text(lines.get(start..end).unwrap_or_default())
}
