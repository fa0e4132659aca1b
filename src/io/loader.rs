//! Tile loading and parallel tile construction
//!
//! Loaders turn identifiers into decoded RGBA buffers. Construction of the
//! full tile set fans out across the rayon pool and joins before anything
//! is classified, so assembly always sees the complete set in input order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::algorithm::executor::AssemblyConfig;
use crate::io::configuration::{TEMPLATE_PLACEHOLDER, TILE_EXTENSIONS};
use crate::io::error::{ErrorContext, PuzzleError, Result, WithContext};
use crate::spatial::{RawTile, Tile};

/// Source of decoded tile inputs
pub trait TileLoader {
    /// Handle naming one tile input
    type Id: Send + Sync;

    /// Every tile input, in input order
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs can't be enumerated
    fn identifiers(&self) -> Result<Vec<Self::Id>>;

    /// Decode one tile input
    ///
    /// # Errors
    ///
    /// Returns a load error if the input can't be read or decoded
    fn load(&self, id: &Self::Id) -> Result<RawTile>;
}

#[derive(Debug, Clone)]
enum Naming {
    Scan,
    Template { template: String, count: usize },
}

/// Loads tile images from a directory
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    directory: PathBuf,
    naming: Naming,
}

impl DirectoryLoader {
    /// Use every `png`/`jpg`/`jpeg` file in `directory`, sorted by path
    pub fn from_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            naming: Naming::Scan,
        }
    }

    /// Use `template` with `{}` replaced by `0..count`, e.g. `peace-{}.jpg`
    pub fn from_template(
        directory: impl Into<PathBuf>,
        template: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            directory: directory.into(),
            naming: Naming::Template {
                template: template.into(),
                count,
            },
        }
    }

    /// Directory the tiles are read from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn scan(&self) -> Result<Vec<PathBuf>> {
        let context = || ErrorContext {
            path: Some(self.directory.clone()),
            operation: Some("read directory"),
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.directory).with_context(context())? {
            let path = entry.with_context(context())?.path();
            if path.is_file() && has_tile_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

impl TileLoader for DirectoryLoader {
    type Id = PathBuf;

    fn identifiers(&self) -> Result<Vec<PathBuf>> {
        match &self.naming {
            Naming::Scan => self.scan(),
            Naming::Template { template, count } => Ok((0..*count)
                .map(|index| {
                    self.directory
                        .join(template.replace(TEMPLATE_PLACEHOLDER, &index.to_string()))
                })
                .collect()),
        }
    }

    fn load(&self, id: &PathBuf) -> Result<RawTile> {
        let img = image::open(id).with_path(id.as_path())?;
        Ok(RawTile::from(img.to_rgba8()))
    }
}

/// Serves tiles that are already decoded
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    tiles: Vec<RawTile>,
}

impl MemoryLoader {
    /// Wrap decoded tiles; their order is the input order
    pub const fn new(tiles: Vec<RawTile>) -> Self {
        Self { tiles }
    }
}

impl TileLoader for MemoryLoader {
    type Id = usize;

    fn identifiers(&self) -> Result<Vec<usize>> {
        Ok((0..self.tiles.len()).collect())
    }

    fn load(&self, id: &usize) -> Result<RawTile> {
        self.tiles
            .get(*id)
            .cloned()
            .ok_or(PuzzleError::InvalidTileIndex {
                index: *id,
                max_tiles: self.tiles.len(),
            })
    }
}

/// Load and construct the complete tile set in parallel
///
/// `on_loaded` runs once per finished tile from whichever worker built it.
/// Tile ids follow input order.
///
/// # Errors
///
/// Returns `TileCount` if the loader doesn't supply exactly one input per
/// grid slot, or the first load error encountered
pub fn load_tiles<L, F>(loader: &L, config: &AssemblyConfig, on_loaded: F) -> Result<Vec<Tile>>
where
    L: TileLoader + Sync,
    F: Fn() + Sync,
{
    let ids = loader.identifiers()?;
    if ids.len() != config.tile_count() {
        return Err(PuzzleError::TileCount {
            expected: config.tile_count(),
            found: ids.len(),
        });
    }

    log::info!("loading {} tiles", ids.len());

    let tiles = ids
        .par_iter()
        .enumerate()
        .map(|(index, id)| {
            let raw = loader.load(id)?;
            let tile = Tile::new(index, raw, config.sample_mode, &config.geometry);
            on_loaded();
            Ok(tile)
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("constructed {} tiles", tiles.len());
    Ok(tiles)
}

/// Construct tiles from decoded buffers in parallel, ids in input order
pub fn construct_tiles(raws: Vec<RawTile>, config: &AssemblyConfig) -> Vec<Tile> {
    raws.into_par_iter()
        .enumerate()
        .map(|(index, raw)| Tile::new(index, raw, config.sample_mode, &config.geometry))
        .collect()
}
