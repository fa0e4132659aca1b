//! Command-line interface for assembling and scrambling puzzles

use crate::algorithm::executor::{Assembly, AssemblyConfig, GridAssembler};
use crate::algorithm::matching::MatchPolicy;
use crate::analysis::classification::{ClassifiedTiles, RoleGeometry};
use crate::io::configuration::{
    ANCHOR_HEIGHT, ANCHOR_WIDTH, COLOR_TOLERANCE, DEFAULT_OUTPUT, DEFAULT_SEED, GRID_COLUMNS,
    GRID_ROWS, SCRAMBLE_TEMPLATE, STANDARD_HEIGHT,
};
use crate::io::error::{Result, WithContext, io_error};
use crate::io::image::{CanvasLayout, CanvasSink};
use crate::io::loader::{DirectoryLoader, load_tiles};
use crate::io::progress::ProgressManager;
use crate::io::scramble::{scramble, write_pieces};
use crate::io::sink::PlacementSink;
use crate::spatial::Tile;
use crate::spatial::edges::SampleMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "puzzlestitch")]
#[command(
    author,
    version,
    about = "Reassemble a shuffled grid of image tiles by matching their borders"
)]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and all logging below errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Reassemble a directory of tiles into one picture
    Assemble(AssembleArgs),
    /// Cut a picture into shuffled tiles
    Scramble(ScrambleArgs),
}

/// Grid and tile geometry shared by both operations
#[derive(Args, Clone, Copy)]
pub struct GeometryArgs {
    /// Grid width in tiles
    #[arg(long, default_value_t = GRID_COLUMNS)]
    pub columns: usize,

    /// Grid height in tiles
    #[arg(long, default_value_t = GRID_ROWS)]
    pub rows: usize,

    /// Pixel width of the top-left tile
    #[arg(long, default_value_t = ANCHOR_WIDTH)]
    pub anchor_width: u32,

    /// Pixel height of the top-left tile
    #[arg(long, default_value_t = ANCHOR_HEIGHT)]
    pub anchor_height: u32,

    /// Pixel height of the other first-column tiles
    #[arg(long, default_value_t = STANDARD_HEIGHT)]
    pub standard_height: u32,
}

impl GeometryArgs {
    /// Role geometry described by the flags
    pub const fn role_geometry(&self) -> RoleGeometry {
        RoleGeometry {
            anchor_width: self.anchor_width,
            anchor_height: self.anchor_height,
            standard_height: self.standard_height,
        }
    }
}

/// Matching policy selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    /// Lowest summed border difference wins
    Scored,
    /// First candidate within the per-channel tolerance wins
    Tolerance,
}

/// Border sampling selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplesArg {
    /// Red, green and blue per border pixel
    Color,
    /// Channel average per border pixel
    Luminance,
}

/// Arguments of the `assemble` operation
#[derive(Args)]
pub struct AssembleArgs {
    /// Directory containing the tile images
    #[arg(value_name = "DIRECTORY")]
    pub target: PathBuf,

    /// File name template with `{}` for the tile index (e.g. `peace-{}.jpg`);
    /// every image in the directory is used when omitted
    #[arg(short, long)]
    pub template: Option<String>,

    /// Where to write the assembled picture
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Candidate matching policy
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Scored)]
    pub policy: PolicyArg,

    /// Per-channel limit for the tolerance policy
    #[arg(long, default_value_t = COLOR_TOLERANCE)]
    pub tolerance: u8,

    /// How border pixels are sampled
    #[arg(short, long, value_enum, default_value_t = SamplesArg::Luminance)]
    pub samples: SamplesArg,

    /// Grid and tile geometry
    #[command(flatten)]
    pub geometry: GeometryArgs,
}

impl AssembleArgs {
    /// Assembly configuration described by the flags
    pub const fn config(&self) -> AssemblyConfig {
        AssemblyConfig {
            columns: self.geometry.columns,
            rows: self.geometry.rows,
            geometry: self.geometry.role_geometry(),
            sample_mode: match self.samples {
                SamplesArg::Color => SampleMode::Color,
                SamplesArg::Luminance => SampleMode::Luminance,
            },
            policy: match self.policy {
                PolicyArg::Scored => MatchPolicy::Scored,
                PolicyArg::Tolerance => MatchPolicy::Tolerance {
                    tolerance: self.tolerance,
                },
            },
        }
    }
}

/// Arguments of the `scramble` operation
#[derive(Args)]
pub struct ScrambleArgs {
    /// Picture to cut
    #[arg(value_name = "PICTURE")]
    pub picture: PathBuf,

    /// Directory to write the pieces into
    #[arg(value_name = "DIRECTORY")]
    pub output: PathBuf,

    /// Random seed for the shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// File name template with `{}` for the piece index
    #[arg(short, long, default_value = SCRAMBLE_TEMPLATE)]
    pub template: String,

    /// Grid and tile geometry
    #[command(flatten)]
    pub geometry: GeometryArgs,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Install the terminal logger on stderr
///
/// A logger that is already installed is left in place.
pub fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Runs the selected operation with progress tracking
pub struct PuzzleProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected operation
    ///
    /// # Errors
    ///
    /// Returns an error if loading, classification, assembly or writing
    /// the output fails
    pub fn process(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Assemble(args) => self.assemble(args),
            Command::Scramble(args) => Self::scramble(args),
        }
    }

    /// Progress bars of this run, absent in quiet mode
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn assemble(&self, args: &AssembleArgs) -> Result<()> {
        let start_time = Instant::now();
        let config = args.config();
        let assembler = GridAssembler::new(config)?;

        if !args.target.is_dir() {
            return Err(io_error("Target must be a directory of tile images"));
        }

        let loader = match &args.template {
            Some(template) => {
                DirectoryLoader::from_template(&args.target, template, config.tile_count())
            }
            None => DirectoryLoader::from_directory(&args.target),
        };

        let progress = self.progress_manager.as_ref();
        if let Some(pm) = progress {
            pm.initialize(config.tile_count());
        }

        let outcome = Self::load_and_assemble(&assembler, &loader, progress);
        if let Some(pm) = progress {
            pm.finish();
        }
        let (canvas, assembly) = outcome?;

        canvas.save(&args.output)?;

        log::info!(
            "placed {} tiles ({} perfect, total score {}) in {:.2?}",
            assembly.records().len(),
            assembly.perfect_matches(),
            assembly.total_score(),
            start_time.elapsed()
        );

        Ok(())
    }

    fn load_and_assemble(
        assembler: &GridAssembler,
        loader: &DirectoryLoader,
        progress: Option<&ProgressManager>,
    ) -> Result<(CanvasSink, Assembly)> {
        let config = assembler.config();
        let tiles = load_tiles(loader, config, || {
            if let Some(pm) = progress {
                pm.tile_loaded();
            }
        })?;
        let classified = ClassifiedTiles::partition(tiles)?;

        let mut canvas = CanvasSink::new(CanvasLayout::from_config(config));
        let assembly = {
            let mut sink = |tile: &Tile, column: usize, row: usize| {
                canvas.place(tile, column, row);
                if let Some(pm) = progress {
                    pm.tile_placed(column, row);
                }
            };
            assembler.assemble(classified, &mut sink)?
        };
        Ok((canvas, assembly))
    }

    fn scramble(args: &ScrambleArgs) -> Result<()> {
        let picture = image::open(&args.picture)
            .with_path(args.picture.as_path())?
            .to_rgba8();

        let config = AssemblyConfig {
            columns: args.geometry.columns,
            rows: args.geometry.rows,
            geometry: args.geometry.role_geometry(),
            ..AssemblyConfig::default()
        };
        config.validate()?;

        let pieces = scramble(&picture, &CanvasLayout::from_config(&config), args.seed)?;
        write_pieces(&pieces, &args.output, &args.template)?;
        Ok(())
    }
}
