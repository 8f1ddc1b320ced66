//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver crossing <pups> <wolves> [--json]
//!   puzzle-solver strings <start> <finish> [--alphabet AZ] [--json]
//!   puzzle-solver slide <puzzle.txt> [--json]
//!   puzzle-solver play <puzzle.txt>
//!
//! Options:
//!   -v, --verbose               Log search progress to stderr
//!   --progress-interval <n>     Expansions between progress lines (default: 10000)

use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use puzzle_solver::{
    Alphabet, Configuration, Console, CrossingConfig, SlideConfig, Solver, SolverConfig,
    StringsConfig,
};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first solver for crossing, string ladder and sliding tile puzzles")]
#[command(version)]
struct Cli {
    /// Log search progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Expansions between progress lines, 0 to disable
    #[arg(long, global = true, default_value = "10000")]
    progress_interval: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ferry pups and wolves from the left bank to the right
    Crossing {
        pups: u32,
        wolves: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Turn one string into another one character step at a time
    Strings {
        start: String,
        finish: String,

        /// First and last symbol of the cyclic alphabet
        #[arg(long, default_value = "AZ")]
        alphabet: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve a sliding tile puzzle file
    Slide {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a sliding tile puzzle in the console
    Play {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// How path steps are laid out in text output
#[derive(Clone, Copy)]
enum StepLayout {
    Inline,
    Block,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SolverConfig {
        progress_interval: cli.progress_interval,
    };

    let solved = match cli.command {
        Commands::Crossing { pups, wolves, json } => {
            if !json {
                println!("Pups: {pups}, Wolves: {wolves}");
            }
            solve_and_print(CrossingConfig::new(pups, wolves), config, json, StepLayout::Inline)?
        }
        Commands::Strings {
            start,
            finish,
            alphabet,
            json,
        } => {
            let alphabet = parse_alphabet(&alphabet)?;
            let ladder = StringsConfig::with_alphabet(&start, &finish, alphabet)?;
            if !json {
                println!("Start: {start}, Finish: {finish}");
            }
            solve_and_print(ladder, config, json, StepLayout::Inline)?
        }
        Commands::Slide { file, json } => {
            let board = SlideConfig::load(&file)
                .with_context(|| format!("Error reading the puzzle file {}", file.display()))?;
            if !json {
                println!("File: {}", file.display());
                print!("{board}");
            }
            solve_and_print(board, config, json, StepLayout::Block)?
        }
        Commands::Play { file } => {
            let stdin = io::stdin();
            let mut console = Console::open(&file, stdin.lock(), io::stdout())
                .with_context(|| format!("Error loading the puzzle file {}", file.display()))?;
            console.run()?;
            true
        }
    };

    Ok(if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_alphabet(spec: &str) -> anyhow::Result<Alphabet> {
    let chars: Vec<char> = spec.chars().collect();
    let &[first, last] = chars.as_slice() else {
        bail!("alphabet must be given as two symbols, e.g. AZ; got {spec:?}");
    };
    Ok(Alphabet::new(first, last)?)
}

fn solve_and_print<C: Configuration + Display>(
    start: C,
    config: SolverConfig,
    json: bool,
    layout: StepLayout,
) -> anyhow::Result<bool> {
    let mut solver = Solver::with_config(start, config);
    let solved = solver.solve();
    let report = solver.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(solved);
    }

    println!("Total configs: {}", report.total_configs);
    println!("Unique configs: {}", report.unique_configs);
    if !solved {
        println!("No solution found.");
        return Ok(false);
    }
    for (i, step) in report.steps.iter().enumerate() {
        match layout {
            StepLayout::Inline => println!("Step {i}: {step}"),
            StepLayout::Block => print!("Step {i}:\n{step}"),
        }
    }
    Ok(true)
}
