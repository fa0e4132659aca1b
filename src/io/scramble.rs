//! Cutting a picture into shuffled, overlapping pieces
//!
//! Produces tile sets with the same irregular geometry the assembler
//! expects: the anchor is one cell, the rest of the first column is one
//! overlap taller, the rest of the first row one overlap wider.

use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::io::configuration::TEMPLATE_PLACEHOLDER;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::CanvasLayout;
use crate::spatial::RawTile;

/// One cut piece and the cell it came from
#[derive(Debug, Clone)]
pub struct Piece {
    /// Source column
    pub column: usize,
    /// Source row
    pub row: usize,
    /// Decoded piece
    pub tile: RawTile,
}

/// Cut `picture` into the cells of `layout`, in row-major order
///
/// # Errors
///
/// Returns `InvalidParameter` if the picture doesn't match the layout's
/// canvas size or the layout is empty
pub fn cut(picture: &RgbaImage, layout: &CanvasLayout) -> Result<Vec<Piece>> {
    if layout.columns == 0 || layout.rows == 0 {
        return Err(invalid_parameter(
            "layout",
            &format!("{}x{}", layout.columns, layout.rows),
            &"needs at least one cell",
        ));
    }

    let expected = layout.canvas_size();
    if picture.dimensions() != expected {
        return Err(invalid_parameter(
            "picture",
            &format!("{}x{}", picture.width(), picture.height()),
            &format!("expected {}x{}", expected.0, expected.1),
        ));
    }

    let mut pieces = Vec::with_capacity(layout.columns * layout.rows);
    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let (x, y, width, height) = layout.cell_rect(column, row);
            let cell = imageops::crop_imm(picture, x, y, width, height).to_image();
            pieces.push(Piece {
                column,
                row,
                tile: RawTile::from(cell),
            });
        }
    }

    Ok(pieces)
}

/// Cut `picture` and shuffle the pieces with a seeded generator
///
/// # Errors
///
/// Propagates errors from [`cut`]
pub fn scramble(picture: &RgbaImage, layout: &CanvasLayout, seed: u64) -> Result<Vec<Piece>> {
    let mut pieces = cut(picture, layout)?;
    let mut rng = StdRng::seed_from_u64(seed);
    pieces.shuffle(&mut rng);
    Ok(pieces)
}

/// Write pieces as numbered images named by `template`
///
/// # Errors
///
/// Returns an error if the directory can't be created or a piece can't be
/// encoded
pub fn write_pieces(pieces: &[Piece], directory: &Path, template: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(directory).map_err(|e| PuzzleError::OutputDirectory {
        path: directory.to_path_buf(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(pieces.len());
    for (index, piece) in pieces.iter().enumerate() {
        let path = directory.join(template.replace(TEMPLATE_PLACEHOLDER, &index.to_string()));
        image::save_buffer(
            &path,
            piece.tile.pixels(),
            piece.tile.width(),
            piece.tile.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| PuzzleError::ImageExport {
            path: path.clone(),
            source: e,
        })?;
        written.push(path);
    }

    log::info!("wrote {} pieces to {}", written.len(), directory.display());
    Ok(written)
}
