//! Border signature extraction from raw RGBA tile buffers
//!
//! Each tile is reduced to four ordered pixel sequences sampled along its
//! outermost rows and columns. Samples are either colour triples or a single
//! luminance value, chosen once for the whole run.

use std::fmt;

/// One side of a rectangular tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First pixel row
    Top,
    /// Last pixel column
    Right,
    /// Last pixel row
    Bottom,
    /// First pixel column
    Left,
}

impl Side {
    /// All four sides, clockwise from the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side that touches this one when two tiles are adjacent
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// How a border pixel is reduced to a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Keep the red, green and blue channels
    Color,
    /// Average the three channels into one value
    #[default]
    Luminance,
}

/// Ordered samples along one border
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// `[r, g, b]` per pixel, alpha dropped
    Color(Vec<[u8; 3]>),
    /// `floor((r + g + b) / 3)` per pixel
    Luminance(Vec<u8>),
}

impl Signature {
    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            Self::Color(samples) => samples.len(),
            Self::Luminance(samples) => samples.len(),
        }
    }

    /// Whether the signature has no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sampling mode the signature was built with
    pub const fn mode(&self) -> SampleMode {
        match self {
            Self::Color(_) => SampleMode::Color,
            Self::Luminance(_) => SampleMode::Luminance,
        }
    }
}

/// Integer luminance of an RGB triple
pub fn luminance(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb;
    // Sum of three u8 values fits in u16 and the mean fits back in u8
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

/// The four border signatures of a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSignatures {
    top: Signature,
    right: Signature,
    bottom: Signature,
    left: Signature,
}

impl EdgeSignatures {
    /// Extract all four borders from a row-major RGBA buffer
    ///
    /// The caller guarantees `pixels.len() == width * height * 4` and
    /// non-zero dimensions; out-of-range reads fall back to black.
    pub fn extract(pixels: &[u8], width: usize, height: usize, mode: SampleMode) -> Self {
        let last_col = width.saturating_sub(1);
        let last_row = height.saturating_sub(1);

        Self {
            top: sample_line(pixels, width, (0..width).map(|x| (x, 0)), mode),
            right: sample_line(pixels, width, (0..height).map(|y| (last_col, y)), mode),
            bottom: sample_line(pixels, width, (0..width).map(|x| (x, last_row)), mode),
            left: sample_line(pixels, width, (0..height).map(|y| (0, y)), mode),
        }
    }

    /// Signature along the given side
    pub const fn get(&self, side: Side) -> &Signature {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

fn sample_line(
    pixels: &[u8],
    width: usize,
    coordinates: impl Iterator<Item = (usize, usize)>,
    mode: SampleMode,
) -> Signature {
    let colors = coordinates.map(|(x, y)| read_rgb(pixels, width, x, y));
    match mode {
        SampleMode::Color => Signature::Color(colors.collect()),
        SampleMode::Luminance => Signature::Luminance(colors.map(luminance).collect()),
    }
}

fn read_rgb(pixels: &[u8], width: usize, x: usize, y: usize) -> [u8; 3] {
    let index = (y * width + x) * 4;
    pixels
        .get(index..index + 3)
        .and_then(|rgb| <[u8; 3]>::try_from(rgb).ok())
        .unwrap_or([0, 0, 0])
}
