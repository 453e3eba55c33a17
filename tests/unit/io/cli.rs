//! Tests for command-line parsing, batch solving and puzzle generation

#[cfg(test)]
mod tests {
    use crate::fixtures::PUZZLE_3X3;
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tileseam::TilingError;
    use tileseam::io::cli::{
        Cli, Commands, FileProcessor, GenerateArgs, SolveArgs, format_summary, run, run_generate,
    };
    use tileseam::io::configuration::{DEFAULT_GRID_SIDE, DEFAULT_SEED, DEFAULT_TILE_SIDE};
    use tileseam::io::parser::parse_tiles;

    fn solve_args(target: &Path) -> SolveArgs {
        SolveArgs {
            target: target.to_path_buf(),
            pattern: None,
            render: false,
            png: false,
            quiet: true,
        }
    }

    fn generate_args(output: PathBuf, monsters: usize) -> GenerateArgs {
        GenerateArgs {
            output,
            grid: 3,
            tile_side: 10,
            seed: 5,
            monsters,
            density: 0.0,
        }
    }

    // Tests solve argument parsing
    #[test]
    fn test_parse_solve_command() {
        let cli = Cli::try_parse_from([
            "tileseam", "-vv", "solve", "tiles.txt", "--pattern", "p.txt", "--png", "-q",
        ])
        .expect("arguments parse");
        assert_eq!(cli.verbose, 2);
        let Commands::Solve(args) = cli.command else {
            unreachable!("Expected solve command");
        };
        assert_eq!(args.target, PathBuf::from("tiles.txt"));
        assert_eq!(args.pattern, Some(PathBuf::from("p.txt")));
        assert!(args.png);
        assert!(!args.render);
        assert!(!args.should_show_progress());
    }

    // Tests generate defaults
    // Verified by changing the default seed
    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["tileseam", "generate", "out.txt"]).expect("arguments parse");
        assert_eq!(cli.verbose, 0);
        let Commands::Generate(args) = cli.command else {
            unreachable!("Expected generate command");
        };
        assert_eq!(args.grid, DEFAULT_GRID_SIDE);
        assert_eq!(args.tile_side, DEFAULT_TILE_SIDE);
        assert_eq!(args.seed, DEFAULT_SEED);
        assert_eq!(args.monsters, 0);
        assert!(Cli::try_parse_from(["tileseam"]).is_err());
    }

    // Tests PNG output naming next to the input
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("dir/tiles.txt")),
            PathBuf::from("dir/tiles_image.png")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("tiles.txt")),
            PathBuf::from("tiles_image.png")
        );
    }

    // Tests batch solving of a directory with a good and a bad file
    // Verified by stopping the batch at the first failing file
    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("a_good.txt"), PUZZLE_3X3).expect("write tiles");
        std::fs::write(temp_dir.path().join("b_bad.txt"), "Tile 1:\n###\n").expect("write tiles");
        std::fs::write(temp_dir.path().join("pattern.dat"), "#.#\n###\n").expect("write pattern");
        std::fs::write(temp_dir.path().join("notes.md"), "ignored").expect("write notes");

        let mut args = solve_args(temp_dir.path());
        args.pattern = Some(temp_dir.path().join("pattern.dat"));
        let mut processor = FileProcessor::new(args).expect("pattern loads");
        assert_eq!(processor.mask().set_count(), 5);

        let outcomes = processor.process().expect("directory is readable");
        assert_eq!(outcomes.len(), 2);

        let good = outcomes[0].result.as_ref().expect("fixture solves");
        assert_eq!(
            format_summary(&outcomes[0].path, good),
            format!(
                "{}: corners 1511796038648, patterns 3, residual 60",
                outcomes[0].path.display()
            )
        );
        assert!(matches!(
            outcomes[1].result,
            Err(TilingError::MalformedTile { id: 1, .. })
        ));
    }

    // Tests PNG export alongside the input file
    #[test]
    fn test_process_file_with_png() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("puzzle.txt");
        std::fs::write(&input, PUZZLE_3X3).expect("write tiles");
        let pattern = temp_dir.path().join("cup.txt");
        std::fs::write(&pattern, "#.#\n###\n").expect("write pattern");

        let mut args = solve_args(&input);
        args.pattern = Some(pattern);
        args.png = true;
        let outcomes = FileProcessor::new(args)
            .expect("pattern loads")
            .process()
            .expect("file is readable");

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_ok());
        assert!(temp_dir.path().join("puzzle_image.png").exists());
    }

    // Tests errors for missing targets and pattern files
    #[test]
    fn test_missing_inputs() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.txt");

        let mut processor = FileProcessor::new(solve_args(&missing)).expect("default pattern");
        assert!(matches!(
            processor.process(),
            Err(TilingError::InvalidParameter { parameter: "target", .. })
        ));

        let mut args = solve_args(temp_dir.path());
        args.pattern = Some(missing.clone());
        assert!(matches!(
            FileProcessor::new(args),
            Err(TilingError::FileSystem { ref path, .. }) if *path == missing
        ));
    }

    // Tests that generated puzzles parse and solve to the planted monsters
    // Verified by planting one monster fewer than requested
    #[test]
    fn test_generate_then_solve() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("generated.txt");
        run_generate(&generate_args(output.clone(), 2)).expect("generation succeeds");

        let text = std::fs::read_to_string(&output).expect("generated file exists");
        let tiles = parse_tiles(&text).expect("generated file parses");
        assert_eq!(tiles.len(), 9);

        let outcomes = FileProcessor::new(solve_args(&output))
            .expect("default pattern")
            .process()
            .expect("file is readable");
        let solution = outcomes[0].result.as_ref().expect("generated puzzle solves");
        assert_eq!(solution.report.occurrences, 2);
        assert_eq!(solution.report.residual, 0);
    }

    // Tests generate parameter validation through the dispatcher
    #[test]
    fn test_run_generate_rejects_empty_grid() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut args = generate_args(temp_dir.path().join("never.txt"), 0);
        args.grid = 0;
        let cli = Cli {
            verbose: 0,
            command: Commands::Generate(args),
        };
        assert!(matches!(
            run(cli),
            Err(TilingError::InvalidParameter { parameter: "grid", .. })
        ));
        assert!(!temp_dir.path().join("never.txt").exists());
    }
}
