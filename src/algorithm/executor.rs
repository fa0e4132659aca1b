use crate::{
    algorithm::matching::{MatchPolicy, Score},
    algorithm::pool::TilePool,
    algorithm::selection::select_candidate,
    analysis::classification::{ClassifiedTiles, Role, RoleGeometry},
    io::configuration::{GRID_COLUMNS, GRID_ROWS},
    io::error::{PuzzleError, Result, invalid_parameter},
    io::image::CanvasLayout,
    io::sink::PlacementSink,
    spatial::edges::{SampleMode, Side},
    spatial::{Grid, Tile},
};

/// Grid size, role geometry and matching behaviour for one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Grid width in tiles
    pub columns: usize,
    /// Grid height in tiles
    pub rows: usize,
    /// Expected pixel dimensions per role
    pub geometry: RoleGeometry,
    /// How border pixels are sampled
    pub sample_mode: SampleMode,
    /// How candidates are compared
    pub policy: MatchPolicy,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            geometry: RoleGeometry::default(),
            sample_mode: SampleMode::Luminance,
            policy: MatchPolicy::Scored,
        }
    }
}

impl AssemblyConfig {
    /// Reference setup using colour samples and the tolerance policy
    pub fn tolerance_color() -> Self {
        Self {
            sample_mode: SampleMode::Color,
            policy: MatchPolicy::tolerance(),
            ..Self::default()
        }
    }

    /// Number of tiles needed to fill the grid
    pub const fn tile_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Check grid size and geometry
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid has no slots, the role
    /// geometry can't distinguish the roles, or the canvas size overflows
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &self.columns,
                &"grid needs at least one column",
            ));
        }
        if self.rows == 0 {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &"grid needs at least one row",
            ));
        }
        self.geometry.validate()?;

        if self.columns.checked_mul(self.rows).is_none() {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("{} x {} slots overflow", self.columns, self.rows),
            ));
        }

        if CanvasLayout::from_config(self).checked_canvas_size().is_none() {
            return Err(invalid_parameter(
                "columns",
                &self.columns,
                &format!(
                    "a {}x{} grid of {}x{} cells exceeds the addressable canvas",
                    self.columns, self.rows, self.geometry.anchor_width, self.geometry.anchor_height
                ),
            ));
        }

        Ok(())
    }
}

/// One placement made during assembly
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementRecord {
    /// Id of the placed tile
    pub tile_id: usize,
    /// Grid column
    pub column: usize,
    /// Grid row
    pub row: usize,
    /// Score against the previous tile (`None` for the anchor)
    pub score: Option<Score>,
}

/// Finished arrangement
#[derive(Debug, Clone)]
pub struct Assembly {
    tiles: Vec<Tile>,
    grid: Grid,
    records: Vec<PlacementRecord>,
}

impl Assembly {
    /// Every input tile, placed or not
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Grid of tile indices
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placements in the order they were made
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    /// Tile placed at a position
    pub fn tile_at(&self, column: usize, row: usize) -> Option<&Tile> {
        self.grid
            .get(column, row)
            .and_then(|index| self.tiles.get(index))
    }

    /// Sum of all placement scores
    pub fn total_score(&self) -> u64 {
        self.records
            .iter()
            .filter_map(|record| record.score)
            .map(Score::value)
            .fold(0, u64::saturating_add)
    }

    /// Number of placements with a perfect score
    pub fn perfect_matches(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.score.is_some_and(Score::is_perfect))
            .count()
    }

    /// Consume the assembly and return all its components
    pub fn into_parts(self) -> (Vec<Tile>, Grid, Vec<PlacementRecord>) {
        (self.tiles, self.grid, self.records)
    }
}

/// Greedy grid reconstruction
///
/// Places the anchor at `(0, 0)`, fills column 0 top to bottom from the
/// left-column pool, then fills each row left to right from the general
/// pool. Each choice depends only on the tile placed just before it and is
/// never revisited.
pub struct GridAssembler {
    config: AssemblyConfig,
}

impl GridAssembler {
    /// Create an assembler for a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: AssemblyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub const fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Build the full arrangement, reporting each placement to `sink`
    ///
    /// # Errors
    ///
    /// Returns `NoCandidate` when a pool has no placeable tile for a slot
    /// that still needs filling. Placements already reported stay reported
    /// and no further sink calls are made.
    pub fn assemble<S>(&self, classified: ClassifiedTiles, sink: &mut S) -> Result<Assembly>
    where
        S: PlacementSink + ?Sized,
    {
        let (tiles, anchor, left_column, general) = classified.into_parts();
        let mut left_pool = TilePool::new(Role::LeftColumnMember, left_column);
        let mut general_pool = TilePool::new(Role::GeneralMember, general);

        log::info!(
            "assembling {}x{} grid with {} policy",
            self.config.columns,
            self.config.rows,
            self.config.policy
        );

        let mut run = AssemblyRun {
            tiles: &tiles,
            grid: Grid::new(self.config.columns, self.config.rows),
            records: Vec::with_capacity(self.config.tile_count()),
        };

        run.place(anchor, 0, 0, None, sink)?;

        let mut first_column = Vec::with_capacity(self.config.rows);
        first_column.push(anchor);

        let mut above = anchor;
        for row in 1..self.config.rows {
            above = run.extend(
                &mut left_pool,
                above,
                Side::Bottom,
                (0, row),
                &self.config.policy,
                sink,
            )?;
            first_column.push(above);
        }

        for (row, &row_start) in first_column.iter().enumerate() {
            let mut neighbour = row_start;
            for column in 1..self.config.columns {
                neighbour = run.extend(
                    &mut general_pool,
                    neighbour,
                    Side::Right,
                    (column, row),
                    &self.config.policy,
                    sink,
                )?;
            }
        }

        for pool in [&left_pool, &general_pool] {
            if !pool.is_exhausted() {
                log::warn!("{pool} after assembly: {:?} unused", pool.leftover());
            }
        }

        let AssemblyRun { grid, records, .. } = run;
        let assembly = Assembly {
            tiles,
            grid,
            records,
        };
        log::info!(
            "assembly complete: {} placements, total score {}, {} perfect",
            assembly.records.len(),
            assembly.total_score(),
            assembly.perfect_matches()
        );

        Ok(assembly)
    }
}

/// Mutable state of a single assembly pass
struct AssemblyRun<'a> {
    tiles: &'a [Tile],
    grid: Grid,
    records: Vec<PlacementRecord>,
}

impl<'a> AssemblyRun<'a> {
    fn tile(&self, index: usize) -> Result<&'a Tile> {
        self.tiles.get(index).ok_or(PuzzleError::InvalidTileIndex {
            index,
            max_tiles: self.tiles.len(),
        })
    }

    /// Choose the best neighbour of `previous` from `pool` and place it
    fn extend<S>(
        &mut self,
        pool: &mut TilePool,
        previous: usize,
        side: Side,
        (column, row): (usize, usize),
        policy: &MatchPolicy,
        sink: &mut S,
    ) -> Result<usize>
    where
        S: PlacementSink + ?Sized,
    {
        let source = self.tile(previous)?;
        let candidate = select_candidate(pool, self.tiles, source, side, policy).ok_or(
            PuzzleError::NoCandidate {
                role: pool.role(),
                column,
                row,
            },
        )?;

        let tile = pool.take(candidate.slot).ok_or(PuzzleError::NoCandidate {
            role: pool.role(),
            column,
            row,
        })?;

        self.place(tile, column, row, Some(candidate.score), sink)?;
        Ok(tile)
    }

    fn place<S>(
        &mut self,
        index: usize,
        column: usize,
        row: usize,
        score: Option<Score>,
        sink: &mut S,
    ) -> Result<()>
    where
        S: PlacementSink + ?Sized,
    {
        let tile = self.tile(index)?;
        self.grid.fill(column, row, index)?;

        match score {
            Some(value) => log::debug!(
                "placed tile #{} at ({column}, {row}) with score {value}",
                tile.id()
            ),
            None => log::debug!("placed anchor tile #{} at ({column}, {row})", tile.id()),
        }

        self.records.push(PlacementRecord {
            tile_id: tile.id(),
            column,
            row,
            score,
        });
        sink.place(tile, column, row);
        Ok(())
    }
}
