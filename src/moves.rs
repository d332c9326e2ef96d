use crate::error::{FairplayError, Result};
use std::collections::HashSet;
use std::fmt;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Position of a move within a [`MoveSet`], always in `[0, len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveIndex(usize);

impl MoveIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// 1-based number shown in the menu
    pub fn menu_number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, cyclic list of move names.
///
/// The order is significant: each move beats the `len / 2` moves that come
/// before it on the cycle and loses to the `len / 2` moves after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate a candidate move list.
    ///
    /// The list must hold an odd number of at least three moves, every name
    /// non-empty and distinct (case-sensitive).
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES {
            return Err(FairplayError::Usage(format!(
                "need at least {} moves, got {}",
                MIN_MOVES,
                names.len()
            )));
        }
        if names.len() % 2 == 0 {
            return Err(FairplayError::Usage(format!(
                "need an odd number of moves, got {}",
                names.len()
            )));
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(FairplayError::Usage("move names must not be empty".into()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(FairplayError::Usage(format!("duplicate move {:?}", name)));
            }
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: a validated set holds at least three moves
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: MoveIndex) -> &str {
        &self.names[index.0]
    }

    /// Resolve a 1-based menu number
    pub fn from_menu_number(&self, number: usize) -> Option<MoveIndex> {
        if (1..=self.len()).contains(&number) {
            Some(MoveIndex(number - 1))
        } else {
            None
        }
    }

    pub fn indices(&self) -> impl Iterator<Item = MoveIndex> + '_ {
        (0..self.names.len()).map(MoveIndex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveIndex(i), name.as_str()))
    }
}
