//! Session state spanning several rounds

use super::round::{Resolution, Round, RoundStatus};
use crate::core::{GuessError, Letter, Word};
use crate::wordlists::WordListError;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lifetime win/loss counters for one process run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// True when the player has lost more rounds than they won
    #[must_use]
    pub const fn is_losing(&self) -> bool {
        self.losses > self.wins
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games()) * 100.0
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub letter: Letter,
    pub resolution: Resolution,
    pub status: RoundStatus,
}

/// Build the single random generator used for the whole session
///
/// A fixed seed gives reproducible word selection; otherwise the generator is
/// seeded once from the operating system.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        debug!("seeding word selection with {seed}");
        StdRng::seed_from_u64(seed)
    } else {
        debug!("seeding word selection from the OS");
        StdRng::from_os_rng()
    }
}

/// A play session: the word list, one random generator, the current round and
/// the lifetime counters
pub struct Session<'a> {
    words: &'a [Word],
    rng: StdRng,
    round: Round,
    stats: Stats,
}

impl<'a> Session<'a> {
    /// Create a session and start its first round on a random word
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: &'a [Word], mut rng: StdRng) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let index = rng.random_range(0..words.len());
        let round = Round::new(index, words[index].clone());
        debug!("round started on word #{index}");

        Ok(Self {
            words,
            rng,
            round,
            stats: Stats::default(),
        })
    }

    /// Pick a new random word and reset the round
    pub fn start_round(&mut self) {
        let index = self.rng.random_range(0..self.words.len());
        self.begin(index);
    }

    /// Reset the round onto a specific word
    ///
    /// Returns `None` (and leaves the current round alone) if `index` is out of range.
    pub fn start_round_at(&mut self, index: usize) -> Option<&Round> {
        if index >= self.words.len() {
            return None;
        }
        self.begin(index);
        Some(&self.round)
    }

    fn begin(&mut self, index: usize) {
        self.round = Round::new(index, self.words[index].clone());
        debug!("round started on word #{index}");
    }

    /// Parse a raw input line and play it as a guess
    ///
    /// # Errors
    ///
    /// Returns `GuessError` for invalid or repeated input; the session is unchanged.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        let letter = Letter::parse(input)?;
        self.guess(letter)
    }

    /// Play a validated letter, updating the counters if the round ends
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the letter was already missed or the round is over.
    pub fn guess(&mut self, letter: Letter) -> Result<Turn, GuessError> {
        let resolution = self.round.guess(letter)?;
        let status = self.round.status();

        match status {
            RoundStatus::Won => {
                self.stats.wins += 1;
                info!("round won: {}", self.round.word());
            }
            RoundStatus::Lost => {
                self.stats.losses += 1;
                info!("round lost: {}", self.round.word());
            }
            RoundStatus::InProgress => {}
        }

        Ok(Turn {
            letter,
            resolution,
            status,
        })
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn words(&self) -> &'a [Word] {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn cat_session(words: &[Word]) -> Session<'_> {
        let mut session = Session::new(words, seeded_rng(Some(7))).unwrap();
        session.start_round_at(0).unwrap();
        session
    }

    #[test]
    fn empty_word_list_rejected() {
        let words: Vec<Word> = Vec::new();
        assert!(matches!(
            Session::new(&words, seeded_rng(Some(1))),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn mask_length_matches_selected_word() {
        let words = words_from_slice(&["cat", "banana", "umbrella"]);
        let mut session = Session::new(&words, seeded_rng(Some(3))).unwrap();
        for _ in 0..20 {
            session.start_round();
            let round = session.round();
            assert_eq!(round.mask().len(), round.word().len());
            assert_eq!(round.word(), &words[round.word_index()]);
        }
    }

    #[test]
    fn same_seed_same_words() {
        let words = words_from_slice(&["cat", "dog", "emu", "fox", "gnu"]);
        let mut a = Session::new(&words, seeded_rng(Some(42))).unwrap();
        let mut b = Session::new(&words, seeded_rng(Some(42))).unwrap();
        for _ in 0..10 {
            assert_eq!(a.round().word_index(), b.round().word_index());
            a.start_round();
            b.start_round();
        }
    }

    #[test]
    fn selection_reaches_every_word() {
        let words = words_from_slice(&["cat", "dog", "emu"]);
        let mut session = Session::new(&words, seeded_rng(Some(9))).unwrap();
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[session.round().word_index()] = true;
            session.start_round();
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn start_round_at_out_of_range() {
        let words = words_from_slice(&["cat", "dog"]);
        let mut session = cat_session(&words);
        assert!(session.start_round_at(2).is_none());
        assert_eq!(session.round().word().text(), "cat");
    }

    #[test]
    fn win_scenario_increments_wins() {
        let words = words_from_slice(&["cat", "dog"]);
        let mut session = cat_session(&words);

        for input in ["z", "q", "x"] {
            let turn = session.submit(input).unwrap();
            assert_eq!(turn.resolution, Resolution::Miss);
        }
        assert_eq!(session.round().incorrect().len(), 3);
        assert_eq!(session.round().mask().to_string(), "___");

        session.submit("c").unwrap();
        assert_eq!(session.round().mask().to_string(), "c__");
        session.submit("a").unwrap();
        assert_eq!(session.round().mask().to_string(), "ca_");
        let turn = session.submit("t").unwrap();
        assert_eq!(session.round().mask().to_string(), "cat");
        assert_eq!(turn.status, RoundStatus::Won);
        assert_eq!(session.stats(), Stats { wins: 1, losses: 0 });
    }

    #[test]
    fn loss_scenario_increments_losses() {
        let words = words_from_slice(&["cat", "dog"]);
        let mut session = cat_session(&words);

        for input in ["z", "q", "x", "b", "f"] {
            let turn = session.submit(input).unwrap();
            assert_eq!(turn.status, RoundStatus::InProgress);
        }
        let turn = session.submit("g").unwrap();
        assert_eq!(turn.status, RoundStatus::Lost);
        assert_eq!(session.stats(), Stats { wins: 0, losses: 1 });
    }

    #[test]
    fn invalid_input_leaves_state_unchanged() {
        let words = words_from_slice(&["cat", "dog"]);
        let mut session = cat_session(&words);
        session.submit("z").unwrap();

        for input in ["1", "", "\n", "Z", "zz"] {
            assert!(session.submit(input).is_err());
        }
        assert_eq!(session.round().incorrect().len(), 1);
        assert_eq!(session.round().mask().to_string(), "___");
        assert_eq!(session.stats(), Stats::default());
    }

    #[test]
    fn counters_accumulate_across_rounds() {
        let words = words_from_slice(&["cat", "dog"]);
        let mut session = cat_session(&words);
        for input in ["c", "a", "t"] {
            session.submit(input).unwrap();
        }

        session.start_round_at(1).unwrap();
        assert_eq!(session.round().status(), RoundStatus::InProgress);
        assert!(session.round().incorrect().is_empty());
        for input in ["a", "b", "c", "e", "f", "h"] {
            session.submit(input).unwrap();
        }

        session.start_round_at(0).unwrap();
        for input in ["c", "a", "t"] {
            session.submit(input).unwrap();
        }
        assert_eq!(session.stats(), Stats { wins: 2, losses: 1 });
        assert!(!session.stats().is_losing());
    }

    #[test]
    fn no_double_counting_after_round_over() {
        let words = words_from_slice(&["cat"]);
        let mut session = cat_session(&words);
        for input in ["c", "a", "t"] {
            session.submit(input).unwrap();
        }
        assert_eq!(session.submit("t"), Err(GuessError::RoundOver));
        assert_eq!(session.stats().wins, 1);
    }

    #[test]
    fn stats_helpers() {
        let stats = Stats { wins: 1, losses: 3 };
        assert_eq!(stats.games(), 4);
        assert!(stats.is_losing());
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert!((Stats::default().win_rate()).abs() < f64::EPSILON);
    }
}
