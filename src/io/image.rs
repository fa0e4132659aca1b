//! Canvas composition of placed tiles and image export

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::algorithm::executor::AssemblyConfig;
use crate::io::error::{PuzzleError, Result};
use crate::io::sink::PlacementSink;
use crate::spatial::Tile;

/// Pixel layout of the assembled picture
///
/// Cells are `cell_width x cell_height`; every cell after the first in a
/// row or column starts `overlap` pixels early, so neighbours share a pixel
/// line along their common border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    /// Grid width in tiles
    pub columns: usize,
    /// Grid height in tiles
    pub rows: usize,
    /// Nominal cell width (the anchor width)
    pub cell_width: u32,
    /// Nominal cell height (the anchor height)
    pub cell_height: u32,
    /// Pixels shared between neighbouring cells
    pub overlap: u32,
}

impl CanvasLayout {
    /// Layout derived from the role geometry of a run
    ///
    /// The overlap is the height difference between left-column tiles and
    /// the anchor.
    pub const fn from_config(config: &AssemblyConfig) -> Self {
        Self {
            columns: config.columns,
            rows: config.rows,
            cell_width: config.geometry.anchor_width,
            cell_height: config.geometry.anchor_height,
            overlap: config.geometry.overlap(),
        }
    }

    /// Canvas dimensions `(width, height)`, if they fit in `u32`
    pub fn checked_canvas_size(&self) -> Option<(u32, u32)> {
        let columns = u32::try_from(self.columns).ok()?;
        let rows = u32::try_from(self.rows).ok()?;
        Some((
            columns.checked_mul(self.cell_width)?,
            rows.checked_mul(self.cell_height)?,
        ))
    }

    /// Canvas dimensions `(width, height)`
    ///
    /// Saturates at `u32::MAX`; validated configurations never get there.
    pub fn canvas_size(&self) -> (u32, u32) {
        let clamp = |count: usize| u32::try_from(count).unwrap_or(u32::MAX);
        (
            clamp(self.columns).saturating_mul(self.cell_width),
            clamp(self.rows).saturating_mul(self.cell_height),
        )
    }

    /// Pixel rectangle `(x, y, width, height)` covered by a cell
    pub const fn cell_rect(&self, column: usize, row: usize) -> (u32, u32, u32, u32) {
        let (x, width) = span(column as u32, self.cell_width, self.overlap);
        let (y, height) = span(row as u32, self.cell_height, self.overlap);
        (x, y, width, height)
    }
}

const fn span(index: u32, cell: u32, overlap: u32) -> (u32, u32) {
    if index == 0 {
        (0, cell)
    } else {
        let start = index.saturating_mul(cell).saturating_sub(overlap);
        let end = index.saturating_add(1).saturating_mul(cell);
        (start, end.saturating_sub(start))
    }
}

/// Sink that paints each placed tile onto an RGBA canvas
pub struct CanvasSink {
    layout: CanvasLayout,
    canvas: RgbaImage,
    placed: usize,
}

impl CanvasSink {
    /// Create a transparent canvas sized for `layout`
    pub fn new(layout: CanvasLayout) -> Self {
        let (width, height) = layout.canvas_size();
        Self {
            layout,
            canvas: RgbaImage::new(width, height),
            placed: 0,
        }
    }

    /// Layout in use
    pub const fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Current canvas
    pub const fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Number of tiles painted so far
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Consume the sink and return the canvas
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Write the canvas to `output_path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The image cannot be encoded or saved to the specified path
    pub fn save(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PuzzleError::OutputDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        self.canvas
            .save(output_path)
            .map_err(|e| PuzzleError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!("wrote {}", output_path.display());
        Ok(())
    }
}

impl PlacementSink for CanvasSink {
    fn place(&mut self, tile: &Tile, column: usize, row: usize) {
        let (x, y, _, _) = self.layout.cell_rect(column, row);
        let Some(piece) = RgbaImage::from_raw(tile.width(), tile.height(), tile.pixels().to_vec())
        else {
            log::warn!("tile #{} has a malformed buffer, not painted", tile.id());
            return;
        };

        // Pixels past the canvas edge are clipped
        imageops::replace(&mut self.canvas, &piece, i64::from(x), i64::from(y));
        self.placed += 1;
    }
}
