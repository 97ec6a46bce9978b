//! Display functions for the console game and command results

use super::formatters::{create_progress_bar, incorrect_letters};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::GuessError;
use crate::game::{MAX_MISSES, Resolution, Round, RoundStatus, Stats, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the game title
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, " {}", "HANGMAN".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        "Guess the word one letter at a time. {} wrong guesses and you're out.",
        MAX_MISSES + 1
    )
}

/// Print the reveal mask, the wrong letters and the guess prompt
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", round.mask().to_string().bright_white().bold())?;
    writeln!(
        out,
        "Wrong Letters: {}",
        incorrect_letters(round.incorrect()).red()
    )?;
    writeln!(out, "Misses left: {}", round.misses_remaining())?;
    writeln!(out)?;
    write!(out, "Guess a letter: ")?;
    out.flush()
}

/// Report rejected input
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_guess_error<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("*** {error}").yellow())
}

/// Report the effect of an accepted guess, and the secret word if the round ended
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_turn<W: Write>(out: &mut W, turn: &Turn, round: &Round) -> io::Result<()> {
    if turn.resolution == Resolution::Miss {
        writeln!(out)?;
        writeln!(out, "{}", "*** Incorrect!".red())?;
    }

    match turn.status {
        RoundStatus::Won => {
            writeln!(out)?;
            writeln!(out, "{}", "You won!".green().bold())?;
            writeln!(out, "The word was: {}", round.word().text().bright_yellow())
        }
        RoundStatus::Lost => {
            writeln!(out)?;
            writeln!(out, "{}", "Sorry, you lost!".red().bold())?;
            writeln!(out, "The word was: {}", round.word().text().bright_yellow())
        }
        RoundStatus::InProgress => Ok(()),
    }
}

/// Print lifetime counters and ask whether to play again
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_round_over<W: Write>(out: &mut W, stats: Stats) -> io::Result<()> {
    writeln!(out, "Wins: {}\tLosses: {}", stats.wins, stats.losses)?;
    write!(out, "Play again? (Y/N) ")?;
    out.flush()
}

/// Print the closing message, which depends on the overall record
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_farewell<W: Write>(out: &mut W, stats: Stats) -> io::Result<()> {
    writeln!(out)?;
    if stats.is_losing() {
        writeln!(out, "Better luck next time. Thanks for playing!")
    } else {
        writeln!(out, "Well played. Thanks for playing!")
    }
}

/// Print the result of the solver playing one word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let marker = match step.resolution {
            Resolution::Hit { .. } => "✓".green(),
            Resolution::Miss => "✗".red(),
        };
        println!("\nTurn {}: {} {marker}  {}", i + 1, step.letter, step.mask);

        if verbose {
            println!(
                "  Candidates: {} ({:.0}% contain '{}')",
                step.candidates, step.hit_chance, step.letter
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved with {} wrong guesses!", result.misses)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} wrong guesses", result.misses)
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    for misses in 0..=MAX_MISSES + 1 {
        let count = result.distribution.get(&misses).copied().unwrap_or(0);
        let pct = if result.total_words > 0 {
            count as f64 / result.total_words as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if misses > MAX_MISSES {
            format!("{misses}").red()
        } else {
            format!("{misses}").green()
        };
        println!("   {label}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Lost words:".bright_cyan().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   {word}");
        }
        if result.lost_words.len() > 10 {
            println!("   ...and {} more", result.lost_words.len() - 10);
        }
    }
}
