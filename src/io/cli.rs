//! Command-line interface for solving tile files and generating puzzles

use crate::algorithm::executor::{Solution, solve_with_observer};
use crate::algorithm::matcher::Mask;
use crate::io::configuration::{
    DEFAULT_GRID_SIDE, DEFAULT_SEED, DEFAULT_TILE_SIDE, INPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, TilingError, WithContext, invalid_parameter};
use crate::io::image::{export_matches_as_png, render_matches};
use crate::io::parser::{format_tiles, parse_mask, parse_tiles};
use crate::io::progress::ProgressManager;
use crate::spatial::cutter::PuzzleCutter;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line arguments for the tile assembler
#[derive(Parser, Debug)]
#[command(name = "tileseam")]
#[command(
    author,
    version,
    about = "Reassemble square pixel tiles and search the image for a pattern"
)]
pub struct Cli {
    /// Raise log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Operation to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble tile files and count pattern occurrences
    Solve(SolveArgs),

    /// Write a synthetic, well-posed tile file
    Generate(GenerateArgs),
}

/// Arguments of the `solve` command
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Tile file or directory of tile files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pattern file (`#` set, anything else don't-care); defaults to the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Print the oriented image with matched pixels marked
    #[arg(short, long)]
    pub render: bool,

    /// Export the oriented image as `<stem>_image.png` next to each input
    #[arg(long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SolveArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments of the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// File to write the tile set to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Tiles along each side of the puzzle
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIDE)]
    pub grid: usize,

    /// Side of each tile in pixels, borders included
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIDE)]
    pub tile_side: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of sea monsters to plant in the picture
    #[arg(short, long, default_value_t = 0)]
    pub monsters: usize,

    /// Probability of a background pixel being set
    #[arg(short, long, default_value_t = 0.0)]
    pub density: f64,
}

/// Solve outcome for one input file
#[derive(Debug)]
pub struct FileOutcome {
    /// Input file
    pub path: PathBuf,
    /// Solution, or the error that stopped the pipeline
    pub result: Result<Solution>,
}

/// One-line summary of a solved file
pub fn format_summary(path: &Path, solution: &Solution) -> String {
    format!(
        "{}: corners {}, patterns {}, residual {}",
        path.display(),
        solution.corner_product,
        solution.report.occurrences,
        solution.report.residual
    )
}

/// Orchestrates batch solving of tile files with progress tracking
pub struct FileProcessor {
    args: SolveArgs,
    mask: Mask,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor, loading the pattern file if one was given
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern file cannot be read or holds no set cells
    pub fn new(args: SolveArgs) -> Result<Self> {
        let mask = match &args.pattern {
            Some(path) => {
                let text = std::fs::read_to_string(path).with_path(path, "read pattern")?;
                parse_mask(&text)?
            }
            None => Mask::sea_monster(),
        };
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            args,
            mask,
            progress_manager,
        })
    }

    /// Search pattern in use
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Solve every target file
    ///
    /// Each file is an independent run: a failing file is reported in its
    /// outcome and does not stop the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a tile file nor a directory
    pub fn process(&mut self) -> Result<Vec<FileOutcome>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            log::warn!("No .{INPUT_EXTENSION} files found in {}", self.args.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outcomes = Vec::with_capacity(files.len());
        for (index, file) in files.into_iter().enumerate() {
            let result = self.process_file(&file, index);
            if let Err(ref error) = result {
                log::error!("{}: {error}", file.display());
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(index, result.is_ok());
            }
            outcomes.push(FileOutcome { path: file, result });
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(outcomes)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "list directory")? {
                let path = entry.with_path(target, "list directory")?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a tile file or a directory",
            ))
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<Solution> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let text = std::fs::read_to_string(input_path).with_path(input_path, "read tiles")?;
        let tiles = parse_tiles(&text)?;

        let progress = &mut self.progress_manager;
        let solution = solve_with_observer(&tiles, &self.mask, |stage| {
            if let Some(pm) = progress.as_mut() {
                pm.update_stage(index, stage);
            }
        })?;

        if self.args.png {
            let output_path = Self::get_output_path(input_path);
            export_matches_as_png(&solution.report, &self.mask, &output_path)?;
            log::info!("Wrote {}", output_path.display());
        }

        Ok(solution)
    }

    /// Path of the PNG exported for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Run the `solve` command, printing one summary line per file
///
/// # Errors
///
/// Returns the first file's error after every file has been attempted
// Printing results is the purpose of this command
#[allow(clippy::print_stdout)]
pub fn run_solve(args: SolveArgs) -> Result<()> {
    let render = args.render;
    let mut processor = FileProcessor::new(args)?;
    let outcomes = processor.process()?;

    let mut first_error: Option<TilingError> = None;
    for outcome in outcomes {
        match outcome.result {
            Ok(solution) => {
                println!("{}", format_summary(&outcome.path, &solution));
                if render {
                    print!("{}", render_matches(&solution.report, processor.mask()));
                }
            }
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }

    first_error.map_or(Ok(()), Err)
}

/// Run the `generate` command
///
/// # Errors
///
/// Returns an error if the parameters cannot produce a well-posed puzzle or
/// the output cannot be written
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    if args.grid == 0 {
        return Err(invalid_parameter("grid", &args.grid, &"must be positive"));
    }
    let mut cutter = PuzzleCutter::new(args.tile_side, args.seed)?;
    let side = args.grid * cutter.interior_side();
    let picture = cutter.picture(side, args.density, &Mask::sea_monster(), args.monsters)?;
    let tiles = cutter.cut(&picture)?;

    std::fs::write(&args.output, format_tiles(&tiles)).with_path(&args.output, "write tiles")?;
    log::info!(
        "Wrote {} tiles of side {} to {}",
        tiles.len(),
        args.tile_side,
        args.output.display()
    );
    Ok(())
}

/// Dispatch a parsed command line
///
/// # Errors
///
/// Propagates the error of the selected command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Solve(args) => run_solve(args),
        Commands::Generate(args) => run_generate(&args),
    }
}
