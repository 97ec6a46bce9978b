//! Hangman - CLI
//!
//! Terminal hangman with a line-based console mode, a TUI mode, and solver
//! commands for playing and benchmarking words automatically.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_benchmark, run_simple, solve_word},
    core::Word,
    game::{Session, seeded_rng},
    output::{print_benchmark_result, print_solve_result},
    solver::Solver,
    wordlists::{self, DEFAULT_PATH},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a newline-delimited file, or 'builtin'
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_PATH)]
    wordlist: String,

    /// Seed for word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple console mode (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Let the solver play a specific word
    Solve {
        /// The word to solve
        word: String,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver over the word list
    Benchmark {
        /// Number of words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());
    let cli = Cli::parse();

    let words = wordlists::load(&cli.wordlist)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;

    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple_command(&words, cli.seed),
        Commands::Play => run_play_command(&words, cli.seed),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &words),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, &words);
            Ok(())
        }
    }
}

fn run_simple_command(words: &[Word], seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(words, seeded_rng(seed))?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_play_command(words: &[Word], seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let session = Session::new(words, seeded_rng(seed))?;
    run_tui(App::new(session))
}

fn run_solve_command(word: &str, verbose: bool, words: &[Word]) -> Result<()> {
    let solver = Solver::new(words);
    let result = solve_word(word, &solver).with_context(|| format!("cannot solve '{word}'"))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: Option<usize>, words: &[Word]) {
    let targets = &words[..count.unwrap_or(words.len()).min(words.len())];
    println!("Running benchmark on {} words...", targets.len());

    let solver = Solver::new(words);
    let result = run_benchmark(&solver, targets, true);
    print_benchmark_result(&result);
}
