//! Word Ladder - CLI
//!
//! Finds the shortest single-letter-substitution path between two words.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{Level, warn};
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_graph, list_neighbors, run_benchmark,
        run_interactive, solve_ladder,
    },
    core::{Alphabet, DEFAULT_WORD_LENGTH, LadderConfig},
    dictionary::{CandidateSet, DictionarySource, load_words},
    graph::{Graph, GraphBuilder},
    output::{
        print_benchmark_result, print_graph_stats, print_neighbors_result, print_solve_result,
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words, one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The source word
    #[arg(short = 's', long = "source_word")]
    source_word: Option<String>,

    /// The target word
    #[arg(short = 't', long = "target_word")]
    target_word: Option<String>,

    /// The word length (4 is the default, 5 is another common choice)
    #[arg(short = 'l', long = "word_length", global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Path to a dictionary file, one word per line (default: built-in corpus)
    #[arg(short = 'p', long = "dictionary_path", global = true)]
    dictionary_path: Option<PathBuf>,

    /// Letters tried at each position
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value = "abcdefghijklmnopqrstuvwxyz"
    )]
    alphabet: Alphabet,

    /// Abandon a search after this many milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Build the graph on one thread
    #[arg(long, global = true)]
    single_threaded: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Show statistics about the word graph
    Stats,

    /// Solve ladders between random word pairs
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Answer repeated queries against one graph
    Interactive,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LadderConfig::with_alphabet(cli.word_length, cli.alphabet.clone())
        .context("Invalid configuration")?;
    let source = cli
        .dictionary_path
        .clone()
        .map_or(DictionarySource::BuiltIn, DictionarySource::File);
    let candidates = load_words(&config, &source)
        .with_context(|| format!("Could not load dictionary from {source}"))?;

    if candidates.is_empty() {
        warn!(
            word_length = config.word_length(),
            %source,
            "dictionary has no words of this length"
        );
    }

    let deadline = cli.timeout_ms.map(Duration::from_millis);

    match &cli.command {
        None => run_solve_command(&cli, &candidates, deadline),
        Some(Commands::Neighbors { word }) => run_neighbors_command(word, &candidates),
        Some(Commands::Stats) => {
            let graph = build_graph(&cli, &candidates);
            print_graph_stats(&analyze_graph(&graph));
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Benchmark { count, seed }) => {
            let graph = build_graph(&cli, &candidates);
            run_benchmark_command(&graph, *count, *seed, deadline);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Interactive) => {
            let graph = build_graph(&cli, &candidates);
            run_interactive(&graph, deadline).context("Interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Install the stderr log subscriber
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_graph(cli: &Cli, candidates: &CandidateSet) -> Graph {
    GraphBuilder::new()
        .parallel(!cli.single_threaded)
        .build(candidates)
}

fn run_solve_command(
    cli: &Cli,
    candidates: &CandidateSet,
    deadline: Option<Duration>,
) -> Result<ExitCode> {
    let (Some(source_word), Some(target_word)) = (&cli.source_word, &cli.target_word) else {
        bail!(
            "Both --source_word and --target_word are required (or pick a subcommand, see --help)"
        );
    };

    let graph = build_graph(cli, candidates);
    let config = SolveConfig::new(source_word, target_word).with_deadline(deadline);

    match solve_ladder(&config, &graph) {
        Ok(result) => {
            print_solve_result(&result, cli.verbose > 0);
            Ok(if result.is_found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(e) => {
            eprintln!("{} {e}", "❌".red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_neighbors_command(word: &str, candidates: &CandidateSet) -> Result<ExitCode> {
    match list_neighbors(word, candidates) {
        Ok(result) => {
            print_neighbors_result(&result);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {e}", "❌".red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_benchmark_command(
    graph: &Graph,
    count: usize,
    seed: Option<u64>,
    deadline: Option<Duration>,
) {
    if let Some(seed) = seed {
        println!("Running benchmark on {count} random pairs (seed {seed})...");
    } else {
        println!("Running benchmark on {count} random pairs...");
    }

    let config = BenchmarkConfig {
        seed,
        deadline,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(graph, &config);
    print_benchmark_result(&result);
}
