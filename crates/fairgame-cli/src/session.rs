//! Single-round interactive game session.
//!
//! The session is built completely before any input is solicited: the
//! computer's move, the secret key, and the commitment digest all exist by
//! the time the menu is printed. That ordering is the whole fairness
//! argument, so [`Session::start`] owns it rather than the caller.

use fairgame_core::{
    resolve, Commitment, CommitmentKey, KeyError, MoveGenerator, MoveSet, PayoffTable,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Errors from running a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid input {input:?}: enter a move number between 1 and {max}, \"0\" to exit, or \"?\" for help")]
    InvalidInput { input: String, max: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How the single accepted interaction ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// A move was played and the key revealed
    Resolved,
    /// The payoff table was printed instead of playing
    HelpShown,
    /// The player asked to leave (or closed the input stream)
    Exited,
}

/// One round of the game: fixed move set, hidden computer move, commitment.
pub struct Session {
    moves: MoveSet,
    computer: usize,
    key: CommitmentKey,
    commitment: Commitment,
}

impl Session {
    /// Start a session: pick the computer's move and commit to it.
    pub fn start(moves: MoveSet) -> Result<Self, KeyError> {
        let computer = MoveGenerator::pick(&moves);
        Self::with_computer_move(moves, computer)
    }

    /// Start a session with a known computer move.
    ///
    /// `computer` must be a valid index into `moves`. This exists so tests
    /// can exercise deterministic rounds; `start` is the production path.
    pub fn with_computer_move(moves: MoveSet, computer: usize) -> Result<Self, KeyError> {
        let key = CommitmentKey::generate()?;
        let commitment = Commitment::new(&key, moves.name(computer).as_bytes());
        debug!(moves = moves.len(), "session ready");
        Ok(Self {
            moves,
            computer,
            key,
            commitment,
        })
    }

    /// The published digest
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The move set this session plays over
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Run the round: print the commitment and menu, accept exactly one line
    /// of input, and either resolve the round, print the help table, or exit.
    ///
    /// The key is written to `out` only on the resolved path, after the
    /// outcome. Invalid input is an error for the caller to report; nothing
    /// is re-prompted.
    pub fn run<R, W>(self, mut input: R, mut out: W) -> Result<SessionEnd, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "HMAC: {}", self.commitment)?;
        writeln!(out, "Available moves:")?;
        for (i, name) in self.moves.names().iter().enumerate() {
            writeln!(out, "{} - {}", i + 1, name)?;
        }
        writeln!(out, "0 - exit")?;
        writeln!(out, "? - help")?;
        write!(out, "Enter your move: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // closed input stream, same as asking to exit
            return Ok(SessionEnd::Exited);
        }
        let choice = line.trim();

        match choice {
            "?" => {
                writeln!(out, "{}", PayoffTable::build(&self.moves))?;
                Ok(SessionEnd::HelpShown)
            }
            "0" => Ok(SessionEnd::Exited),
            _ => {
                let selected = choice
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=self.moves.len()).contains(n))
                    .ok_or_else(|| SessionError::InvalidInput {
                        input: choice.to_string(),
                        max: self.moves.len(),
                    })?;
                let player = selected - 1;

                writeln!(out, "Your move: {}", self.moves.name(player))?;
                writeln!(out, "Computer move: {}", self.moves.name(self.computer))?;
                writeln!(out, "{}", resolve(&self.moves, player, self.computer))?;
                writeln!(out, "HMAC key: {}", self.key)?;
                debug!(player, computer = self.computer, "round resolved");
                Ok(SessionEnd::Resolved)
            }
        }
    }
}
