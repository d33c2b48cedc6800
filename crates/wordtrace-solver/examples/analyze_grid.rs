//! Analyzes puzzle files against a dictionary.
//!
//! Each input is either a puzzle definition (`.json`) or a plain grid (any
//! other extension, one row per line, `.` for blanks). Puzzle definitions are
//! validated first; every input is then searched for all traceable words and
//! summarized.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example analyze_grid -- --dictionary words.txt puzzle.json
//! ```
//!
//! Several files are analyzed in parallel:
//!
//! ```sh
//! cargo run --example analyze_grid -- -d words.txt --min-length 3 a.json b.txt c.txt
//! ```
//!
//! List every discovered word with its paths:
//!
//! ```sh
//! cargo run --example analyze_grid -- -d words.txt --words grid.txt
//! ```
//!
//! Set `RUST_LOG=debug` to see loader and search logs.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use rayon::prelude::*;
use wordtrace_core::Grid;
use wordtrace_game::{Puzzle, PuzzleDefinition, PuzzleValidator, ValidationReport};
use wordtrace_lexicon::Lexicon;
use wordtrace_solver::{Discovery, DiscoveryMetrics, WordFinder};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Newline-delimited dictionary file.
    #[arg(short, long, value_name = "PATH")]
    dictionary: PathBuf,

    /// Minimum word length for plain grids (puzzle files carry their own).
    #[arg(long, value_name = "LEN", default_value_t = Puzzle::DEFAULT_MINIMUM_WORD_LENGTH)]
    min_length: usize,

    /// Print every discovered word and its paths.
    #[arg(long)]
    words: bool,

    /// Puzzle definitions (`.json`) or grid text files.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

struct Analysis {
    grid: Grid,
    validation: Option<ValidationReport>,
    discovery: Discovery,
    metrics: DiscoveryMetrics,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let lexicon = match Lexicon::load(&args.dictionary) {
        Ok(lexicon) => lexicon,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let results = args
        .files
        .par_iter()
        .map(|path| analyze(path, &lexicon, args.min_length))
        .collect::<Vec<_>>();

    let mut failed = false;
    for (path, result) in args.files.iter().zip(results) {
        println!("{}:", path.display());
        match result {
            Ok(analysis) => {
                failed |= analysis
                    .validation
                    .as_ref()
                    .is_some_and(|report| !report.is_valid());
                print_analysis(&analysis, args.words);
            }
            Err(message) => {
                failed = true;
                println!("  error: {message}");
            }
        }
        println!();
    }

    if failed {
        process::exit(1);
    }
}

fn analyze(path: &Path, lexicon: &Lexicon, min_length: usize) -> Result<Analysis, String> {
    let text = fs::read_to_string(path).map_err(|err| err.to_string())?;

    let (grid, minimum, validation) = if path.extension().is_some_and(|ext| ext == "json") {
        let definition: PuzzleDefinition =
            serde_json::from_str(&text).map_err(|err| err.to_string())?;
        let puzzle = Puzzle::try_from(definition).map_err(|err| err.to_string())?;
        let report = PuzzleValidator::new(lexicon).validate(&puzzle);
        let minimum = puzzle.minimum_word_length();
        (puzzle.grid().clone(), minimum, Some(report))
    } else {
        let grid = text.parse::<Grid>().map_err(|err| err.to_string())?;
        (grid, min_length, None)
    };

    let discovery = WordFinder::new(lexicon)
        .with_minimum_word_length(minimum)
        .find_all(&grid);
    let metrics = DiscoveryMetrics::new(&grid, &discovery);
    Ok(Analysis {
        grid,
        validation,
        discovery,
        metrics,
    })
}

fn print_analysis(analysis: &Analysis, list_words: bool) {
    let Analysis {
        grid,
        validation,
        discovery,
        metrics,
    } = analysis;

    println!("  Grid:");
    for row in grid.to_string().lines() {
        println!("    {row}");
    }

    if let Some(report) = validation {
        if report.is_valid() {
            println!("  Validation: ok");
        } else {
            println!("  Validation: {} problem(s)", report.len());
            for violation in report.violations() {
                println!("    - {violation}");
            }
        }
    }

    println!("  Discovery:");
    println!("    distinct words: {}", metrics.distinct_word_count);
    println!("    paths: {}", metrics.path_count);
    for (length, count) in &metrics.count_by_length {
        println!("    length {length}: {count}");
    }
    println!("    average length: {:.2}", metrics.average_length);
    if let Some(longest) = &metrics.longest_word {
        println!("    longest word: {longest}");
    }
    println!("    utilization: {:.1}%", metrics.utilization() * 100.0);
    if !metrics.uncovered_cells.is_empty() {
        let cells = metrics
            .uncovered_cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        println!("    uncovered cells: {}", cells.join(", "));
    }
    println!("    uncommon letters: {}", metrics.uncommon_letter_count);
    println!("    difficulty: {}", metrics.difficulty());

    if list_words {
        println!("  Words:");
        for word in discovery.distinct_words() {
            let paths = discovery
                .paths_for(word.as_str())
                .map(|path| {
                    path.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>();
            println!("    {word}: {}", paths.join(" | "));
        }
    }
}
