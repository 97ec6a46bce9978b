//! Simple console mode
//!
//! Line-oriented game loop: one prompt, one line of input.

use crate::game::{Session, Stats};
use crate::output::{
    print_banner, print_board, print_farewell, print_guess_error, print_round_over, print_turn,
};
use log::info;
use std::io::{self, BufRead, Write};

/// Where the console loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingGuess,
    RoundOver,
    Replaying,
    Terminated,
}

/// Run the console game until the player declines a replay or input ends
///
/// Returns the final lifetime counters.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<Stats> {
    print_banner(out)?;
    let mut phase = Phase::AwaitingGuess;

    loop {
        phase = match phase {
            Phase::AwaitingGuess => {
                print_board(out, session.round())?;
                match read_line(&mut input)? {
                    None => Phase::Terminated,
                    Some(line) => match session.submit(&line) {
                        Ok(turn) => {
                            print_turn(out, &turn, session.round())?;
                            if turn.status.is_over() {
                                Phase::RoundOver
                            } else {
                                Phase::AwaitingGuess
                            }
                        }
                        Err(e) => {
                            print_guess_error(out, &e)?;
                            Phase::AwaitingGuess
                        }
                    },
                }
            }
            Phase::RoundOver => {
                print_round_over(out, session.stats())?;
                Phase::Replaying
            }
            Phase::Replaying => match read_line(&mut input)? {
                Some(line) if wants_replay(&line) => {
                    session.start_round();
                    Phase::AwaitingGuess
                }
                _ => Phase::Terminated,
            },
            Phase::Terminated => {
                let stats = session.stats();
                print_farewell(out, stats)?;
                info!("session over: {} wins, {} losses", stats.wins, stats.losses);
                return Ok(stats);
            }
        };
    }
}

/// Affirmative when the first character is `y` or `Y`
fn wants_replay(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y' | 'Y'))
}

/// Read one line, `None` at end of input
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so they
/// reach validation as ordinary bad input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
