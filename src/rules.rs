use crate::moves::{MoveIndex, MoveSet};
use std::fmt;

/// Result of one move against another, from the first move's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Draw,
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// Swap the perspective
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Draw => Outcome::Draw,
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
        }
    }

    /// Verdict line when the human holds the first move and the computer the second
    pub fn verdict(self) -> &'static str {
        match self {
            Outcome::Draw => "Draw!",
            Outcome::FirstWins => "You win!",
            Outcome::SecondWins => "PC wins!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verdict())
    }
}

/// Judge move `a` against move `b` on a cycle of `move_count` moves.
///
/// `a` wins when it sits at most `move_count / 2` steps ahead of `b` going
/// forward around the cycle, and loses otherwise. `move_count` must be odd.
pub fn winner(move_count: usize, a: MoveIndex, b: MoveIndex) -> Outcome {
    debug_assert!(move_count % 2 == 1, "move count must be odd");
    debug_assert!(a.get() < move_count && b.get() < move_count);

    let half = move_count / 2;
    let distance = (a.get() + move_count - b.get()) % move_count;

    if distance == 0 {
        Outcome::Draw
    } else if distance <= half {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

impl MoveSet {
    /// Judge two moves of this set
    pub fn judge(&self, a: MoveIndex, b: MoveIndex) -> Outcome {
        winner(self.len(), a, b)
    }
}

/// Every pairing of the set.
///
/// Row `i` is the computer's move, column `j` the human's, and each cell is
/// `winner(n, j, i)`: the outcome seen from the human's side.
pub fn outcome_table(moves: &MoveSet) -> Vec<Vec<Outcome>> {
    moves
        .indices()
        .map(|computer| {
            moves
                .indices()
                .map(|human| moves.judge(human, computer))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn idx(i: usize) -> MoveIndex {
        MoveIndex::new(i)
    }

    #[test]
    fn test_classic_rps() {
        // rock=0, paper=1, scissors=2
        assert_eq!(winner(3, idx(1), idx(0)), Outcome::FirstWins);
        assert_eq!(winner(3, idx(2), idx(1)), Outcome::FirstWins);
        assert_eq!(winner(3, idx(0), idx(2)), Outcome::FirstWins);
        assert_eq!(winner(3, idx(0), idx(1)), Outcome::SecondWins);
        assert_eq!(winner(3, idx(0), idx(0)), Outcome::Draw);
    }

    #[test]
    fn test_each_move_beats_half() {
        for n in [3usize, 5, 7, 9, 101] {
            for a in 0..n {
                let wins = (0..n)
                    .filter(|&b| winner(n, idx(a), idx(b)) == Outcome::FirstWins)
                    .count();
                let losses = (0..n)
                    .filter(|&b| winner(n, idx(a), idx(b)) == Outcome::SecondWins)
                    .count();
                assert_eq!(wins, n / 2, "n={} a={}", n, a);
                assert_eq!(losses, n / 2, "n={} a={}", n, a);
            }
        }
    }

    #[test]
    fn test_outcome_table_shape() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let table = outcome_table(&moves);
        assert_eq!(table.len(), 3);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(row.len(), 3);
            assert_eq!(row[i], Outcome::Draw);
        }
        // computer rock, human paper
        assert_eq!(table[0][1], Outcome::FirstWins);
        // computer paper, human rock
        assert_eq!(table[1][0], Outcome::SecondWins);
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(Outcome::Draw.to_string(), "Draw!");
        assert_eq!(Outcome::FirstWins.to_string(), "You win!");
        assert_eq!(Outcome::SecondWins.to_string(), "PC wins!");
        assert_eq!(Outcome::FirstWins.reversed(), Outcome::SecondWins);
    }

    fn odd_count_and_pair() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..60).prop_flat_map(|k| {
            let n = 2 * k + 1;
            (Just(n), 0..n, 0..n)
        })
    }

    proptest! {
        #[test]
        fn prop_self_is_draw((n, a, _b) in odd_count_and_pair()) {
            prop_assert_eq!(winner(n, idx(a), idx(a)), Outcome::Draw);
        }

        #[test]
        fn prop_antisymmetric((n, a, b) in odd_count_and_pair()) {
            prop_assume!(a != b);
            let forward = winner(n, idx(a), idx(b));
            let backward = winner(n, idx(b), idx(a));
            prop_assert_ne!(forward, Outcome::Draw);
            prop_assert_eq!(forward, backward.reversed());
        }

        #[test]
        fn prop_table_antisymmetric(k in 1usize..8) {
            let n = 2 * k + 1;
            let moves = MoveSet::new((0..n).map(|i| format!("m{}", i))).unwrap();
            let table = outcome_table(&moves);
            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(table[i][j], table[j][i].reversed());
                }
            }
        }
    }
}
