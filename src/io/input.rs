//! Tile block text format
//!
//! Input is a sequence of blocks separated by blank lines. Each block starts
//! with a `Tile <id>:` header followed by the pixel rows of one square tile.

use crate::io::configuration::{BLANK_PIXEL, MARKER_PIXEL, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX};
use crate::io::error::{Result, WithContext, parse_error};
use crate::spatial::tile::{Tile, TileId};
use ndarray::Array2;
use std::path::Path;

/// Lines of one block with the 1-based line number of its header
struct Block<'a> {
    first_line: usize,
    lines: Vec<&'a str>,
}

fn split_blocks(input: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        current
            .get_or_insert_with(|| Block {
                first_line: index + 1,
                lines: Vec::new(),
            })
            .lines
            .push(line);
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

fn parse_header(line: &str, line_number: usize) -> Result<TileId> {
    let id_text = line
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(TILE_HEADER_SUFFIX))
        .ok_or_else(|| {
            parse_error(
                line_number,
                &format!("expected `{TILE_HEADER_PREFIX}<id>{TILE_HEADER_SUFFIX}` header, found `{line}`"),
            )
        })?;

    id_text.trim().parse::<TileId>().map_err(|err| {
        parse_error(
            line_number,
            &format!("invalid tile id `{id_text}`: {err}"),
        )
    })
}

fn parse_block(block: &Block<'_>) -> Result<Tile> {
    let (header, rows) = block
        .lines
        .split_first()
        .ok_or_else(|| parse_error(block.first_line, &"empty tile block"))?;
    let id = parse_header(header, block.first_line)?;

    let Some(width) = rows.first().map(|row| row.len()) else {
        return Err(parse_error(
            block.first_line,
            &format!("tile {id} has no pixel rows"),
        ));
    };

    let mut bytes = Vec::with_capacity(width * rows.len());
    for (offset, row) in rows.iter().enumerate() {
        let line_number = block.first_line + offset + 1;
        if row.len() != width {
            return Err(parse_error(
                line_number,
                &format!(
                    "tile {id} row has {} pixels, expected {width}",
                    row.len()
                ),
            ));
        }
        if let Some(bad) = row
            .bytes()
            .find(|&byte| byte != MARKER_PIXEL && byte != BLANK_PIXEL)
        {
            return Err(parse_error(
                line_number,
                &format!("tile {id} contains invalid pixel `{}`", char::from(bad)),
            ));
        }
        bytes.extend_from_slice(row.as_bytes());
    }

    if rows.len() != width {
        return Err(parse_error(
            block.first_line,
            &format!(
                "tile {id} has {} rows of {width} pixels, expected a square",
                rows.len()
            ),
        ));
    }

    let pixels = Array2::from_shape_vec((width, width), bytes)
        .map_err(|err| parse_error(block.first_line, &err))?;
    Tile::new(id, pixels)
}

/// Parse every tile block in the input, in input order
///
/// # Errors
///
/// Returns a parse error naming the offending line if any block lacks a
/// well-formed header, has rows of differing length, is not square or holds a
/// pixel other than `#` and `.`
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    let tiles = split_blocks(input)
        .iter()
        .map(parse_block)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("Parsed {} tiles", tiles.len());
    Ok(tiles)
}

/// Parse text holding exactly one tile block
///
/// # Errors
///
/// Returns a parse error if the text holds no block, more than one block or a
/// malformed block
pub fn parse_tile(input: &str) -> Result<Tile> {
    let blocks = split_blocks(input);
    match blocks.as_slice() {
        [block] => parse_block(block),
        [] => Err(parse_error(1, &"no tile block found")),
        [_, second, ..] => Err(parse_error(
            second.first_line,
            &"expected a single tile block",
        )),
    }
}

/// Read and parse a tile file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let input = std::fs::read_to_string(path).with_path(path, "read")?;
    parse_tiles(&input)
}
