//! Benchmark command
//!
//! Runs the solver against many words and summarizes how often it survives.

use super::solve::play_round;
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_misses: f64,
    /// Number of rounds ending with each miss count
    pub distribution: HashMap<usize, usize>,
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Run the solver on every target word in parallel
pub fn run_benchmark(
    solver: &Solver<'_>,
    target_words: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<(String, bool, usize)> = target_words
        .par_iter()
        .map(|word| {
            let result = play_round(word, solver);
            pb.inc(1);
            (result.target, result.success, result.misses)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut lost_words = Vec::new();
    let mut wins = 0;
    let mut total_misses = 0;

    for (target, success, misses) in outcomes {
        *distribution.entry(misses).or_insert(0) += 1;
        total_misses += misses;
        if success {
            wins += 1;
        } else {
            lost_words.push(target);
        }
    }

    let total_words = target_words.len();
    let average_misses = if total_words == 0 {
        0.0
    } else {
        total_misses as f64 / total_words as f64
    };
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        total_words as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        average_misses,
        distribution,
        lost_words,
        duration,
        words_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_MISSES;
    use crate::wordlists::BUILTIN;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(BUILTIN);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words, false);

        assert_eq!(result.total_words, words.len());
        assert_eq!(result.wins + result.losses, result.total_words);
        assert_eq!(result.lost_words.len(), result.losses);
        assert!(result.average_misses <= (MAX_MISSES + 1) as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = words_from_slice(BUILTIN);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        for &misses in result.distribution.keys() {
            assert!(misses <= MAX_MISSES + 1);
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let words = words_from_slice(&["cat"]);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &[], false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_distinct_words_all_won() {
        let words = words_from_slice(&["cat", "banana", "umbrella"]);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words, false);

        assert_eq!(result.wins, 3);
        assert!((result.win_rate() - 100.0).abs() < f64::EPSILON);
        assert!(result.lost_words.is_empty());
    }
}
