use crate::cli::help::{render_help_table, render_menu};
use crate::commitment::{CommitmentEngine, KEY_SIZE};
use crate::console::Console;
use crate::error::{FairplayError, Result};
use crate::moves::{MoveIndex, MoveSet};
use crate::rules::Outcome;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

/// Printed when the move list is rejected
pub const USAGE: &str =
    "Usage: fairplay [move1] [move2] [move3] ... (odd number of non-repeating strings)";

pub const PROMPT: &str = "Enter your move: ";

pub const INVALID_MOVE: &str = "Invalid move. Please enter a valid move.";

/// Exit status for a rejected move list
pub const EXIT_USAGE: u8 = 1;

/// Exit status for entropy, MAC or I/O failures
pub const EXIT_FATAL: u8 = 2;

/// What the player typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Help,
    Exit,
    Move(MoveIndex),
}

/// Interpret one input line: `?`, `0`, or a menu number in `1..=n`
pub fn parse_choice(input: &str, moves: &MoveSet) -> Result<Choice> {
    match input {
        "?" => Ok(Choice::Help),
        "0" => Ok(Choice::Exit),
        _ if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) => input
            .parse::<usize>()
            .ok()
            .and_then(|n| moves.from_menu_number(n))
            .map(Choice::Move)
            .ok_or_else(|| FairplayError::InvalidMove(input.to_string())),
        _ => Err(FairplayError::InvalidMove(input.to_string())),
    }
}

/// A scored round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub player: MoveIndex,
    pub computer: MoveIndex,
    /// From the player's side
    pub outcome: Outcome,
    pub key: [u8; KEY_SIZE],
}

/// Terminal state of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Move list failed validation; usage was printed
    Rejected,
    /// Help table shown, key kept secret
    Help,
    /// `0` entered or input closed
    ExitRequested,
    /// Unrecognized selection, key kept secret
    InvalidMove,
    Completed(RoundResult),
}

impl SessionEnd {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionEnd::Rejected => EXIT_USAGE,
            SessionEnd::Help
            | SessionEnd::ExitRequested
            | SessionEnd::InvalidMove
            | SessionEnd::Completed(_) => 0,
        }
    }
}

/// One game round over a validated move set
pub struct Session<R> {
    moves: MoveSet,
    engine: CommitmentEngine<R>,
}

impl<R: RngCore + CryptoRng> Session<R> {
    pub fn new(moves: MoveSet, engine: CommitmentEngine<R>) -> Self {
        Self { moves, engine }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Commit, prompt, then reveal and score.
    ///
    /// The HMAC line is written before the player's input is read; the key
    /// is only written after a valid move was accepted.
    pub fn run<C: Console>(mut self, console: &mut C) -> Result<SessionEnd> {
        let key = self.engine.generate_key()?;
        let computer = self.engine.choose_move(self.moves.len())?;
        let commitment = self.engine.commit(&key, self.moves.name(computer))?;
        debug!(moves = self.moves.len(), "commitment ready");

        console.write_line(&format!("HMAC: {}", commitment))?;
        for line in render_menu(&self.moves).lines() {
            console.write_line(line)?;
        }
        console.write(PROMPT)?;

        let input = match console.read_line()? {
            Some(line) => line,
            None => {
                debug!("input closed before a move was entered");
                return Ok(SessionEnd::ExitRequested);
            }
        };

        let player = match parse_choice(&input, &self.moves) {
            Ok(Choice::Help) => {
                for line in render_help_table(&self.moves).lines() {
                    console.write_line(line)?;
                }
                return Ok(SessionEnd::Help);
            }
            Ok(Choice::Exit) => return Ok(SessionEnd::ExitRequested),
            Ok(Choice::Move(index)) => index,
            Err(FairplayError::InvalidMove(raw)) => {
                debug!(input = %raw, "rejected selection");
                console.write_line(INVALID_MOVE)?;
                return Ok(SessionEnd::InvalidMove);
            }
            Err(e) => return Err(e),
        };

        let outcome = self.moves.judge(player, computer);
        let key = self.engine.reveal(key);

        console.write_line(&format!("Your move: {}", self.moves.name(player)))?;
        console.write_line(&format!("Computer move: {}", self.moves.name(computer)))?;
        console.write_line(&format!("HMAC key: {}", hex::encode(key)))?;
        console.write_line(outcome.verdict())?;
        info!(?outcome, "round complete");

        Ok(SessionEnd::Completed(RoundResult {
            player,
            computer,
            outcome,
            key,
        }))
    }
}

/// Validate `names` and play one round, printing usage on rejection
pub fn play<I, S, R, C>(names: I, engine: CommitmentEngine<R>, console: &mut C) -> Result<SessionEnd>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: RngCore + CryptoRng,
    C: Console,
{
    let moves = match MoveSet::new(names) {
        Ok(moves) => moves,
        Err(FairplayError::Usage(reason)) => {
            debug!(%reason, "move list rejected");
            console.write_line(USAGE)?;
            return Ok(SessionEnd::Rejected);
        }
        Err(e) => return Err(e),
    };

    Session::new(moves, engine).run(console)
}
