//! Tile records built from decoded pixel buffers
//!
//! A `RawTile` is whatever a loader produced; a `Tile` is the immutable
//! record used by assembly, carrying its border signatures and structural
//! role alongside the original pixels.

use crate::analysis::classification::{Role, RoleGeometry};
use crate::io::error::{Result, invalid_tile};
use crate::spatial::edges::{EdgeSignatures, SampleMode, Side, Signature};

/// Decoded tile input: dimensions plus a row-major RGBA buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTile {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RawTile {
    /// Wrap a decoded buffer after checking it covers `width * height` pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileData` if either dimension is zero or the buffer
    /// length isn't `width * height * 4`
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_tile(&format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(invalid_tile(&format!(
                "expected {expected} RGBA bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pixel width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl From<image::RgbaImage> for RawTile {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }
}

/// An input tile with its border signatures and structural role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: usize,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    edges: EdgeSignatures,
    role: Role,
}

impl Tile {
    /// Build a tile, extracting signatures and assigning its role
    ///
    /// `id` is the tile's position in the input set and is what the grid
    /// stores; nothing about the tile changes after this call.
    pub fn new(id: usize, raw: RawTile, mode: SampleMode, geometry: &RoleGeometry) -> Self {
        let edges = EdgeSignatures::extract(
            &raw.pixels,
            raw.width as usize,
            raw.height as usize,
            mode,
        );
        let role = geometry.role_of(raw.width, raw.height);

        Self {
            id,
            width: raw.width,
            height: raw.height,
            pixels: raw.pixels,
            edges,
            role,
        }
    }

    /// Position of the tile in the input set
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Pixel width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// All four border signatures
    pub const fn edges(&self) -> &EdgeSignatures {
        &self.edges
    }

    /// Signature along one side
    pub const fn edge(&self, side: Side) -> &Signature {
        self.edges.get(side)
    }

    /// Structural role assigned at construction
    pub const fn role(&self) -> Role {
        self.role
    }
}
