//! Fairplay - provably-fair rock-paper-scissors for any odd number of moves
//!
//! The computer picks its move first and publishes a commitment to it. Only
//! after the player has answered is the key revealed, so the player can check
//! that the computer's move was fixed all along.
//!
//! ## Protocol
//!
//! ```text
//! key ← 32 random bytes → move ← uniform [0, n) → HMAC-SHA256(key, move) → print HMAC
//!     → read player move → print move names + key → verdict
//! ```
//!
//! ## Rules
//!
//! Moves sit on a cycle in the order given. A move beats the `n / 2` moves
//! before it and loses to the `n / 2` moves after it, so with
//! `rock paper scissors` paper beats rock, scissors beats paper and rock
//! beats scissors.
//!
//! ## Example
//!
//! ```
//! use fairplay::cli::{play, SessionEnd};
//! use fairplay::commitment::CommitmentEngine;
//! use fairplay::console::ScriptedConsole;
//!
//! let mut console = ScriptedConsole::new(["?"]);
//! let end = play(
//!     ["rock", "paper", "scissors"],
//!     CommitmentEngine::system(),
//!     &mut console,
//! )
//! .unwrap();
//!
//! assert_eq!(end, SessionEnd::Help);
//! assert!(console.output().starts_with("HMAC: "));
//! ```

pub mod cli;
pub mod commitment;
pub mod console;
pub mod error;
pub mod moves;
pub mod rules;

pub use commitment::{verify_reveal, Commitment, CommitmentEngine, SecretKey, VerificationReport};
pub use error::{FairplayError, Result};
pub use moves::{MoveIndex, MoveSet};
pub use rules::{outcome_table, winner, Outcome};
