//! Game state and rules
//!
//! `Round` resolves guesses against one secret word and decides win/loss.
//! `Session` owns the random generator and the lifetime counters across rounds.

mod round;
mod session;

pub use round::{MAX_MISSES, Resolution, Round, RoundStatus};
pub use session::{Session, Stats, Turn, seeded_rng};
