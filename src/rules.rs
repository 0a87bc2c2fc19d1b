//! Move generation and validity rules for the block puzzle.

use crate::puzzle::{BlockState, Color, Move, Pile, PuzzleConfig};

/// Every legal move out of each pile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PossibleMoves {
    pub from_pile1: Vec<Move>,
    pub from_pile2: Vec<Move>,
}

impl PossibleMoves {
    pub fn for_pile(&self, pile: Pile) -> &[Move] {
        match pile {
            Pile::Pile1 => &self.from_pile1,
            Pile::Pile2 => &self.from_pile2,
        }
    }

    pub fn len(&self) -> usize {
        self.from_pile1.len() + self.from_pile2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Moves that could be made out of `from`, largest red loads first and,
/// within those, largest blue loads first. The empty move is skipped.
pub fn moves_from(state: &BlockState, from: Pile, hand_capacity: i32) -> Vec<Move> {
    let source = state.pile(from);
    let mut moves = Vec::new();

    let max_red = hand_capacity.min(source.red);
    for red in (0..=max_red).rev() {
        let max_blue = (hand_capacity - red).min(source.blue);
        for blue in (0..=max_blue).rev() {
            if red == 0 && blue == 0 {
                continue;
            }
            moves.push(Move::new(from, red, blue));
        }
    }

    moves
}

/// Compute the moves available from both piles.
///
/// Whether a move leaves either pile unsafe is not considered here; that
/// is up to [`is_valid`] on the resulting state.
pub fn compute_possible_moves(state: &BlockState, hand_capacity: i32) -> PossibleMoves {
    PossibleMoves {
        from_pile1: moves_from(state, Pile::Pile1, hand_capacity),
        from_pile2: moves_from(state, Pile::Pile2, hand_capacity),
    }
}

/// Check a state against the puzzle rules.
///
/// `history` holds the states visited before this one on the same branch.
/// A state is valid when the configuration is well formed, the piles add
/// up to the configured totals, no count is negative, both piles are safe
/// under the configured [`SafetyRule`](crate::puzzle::SafetyRule), and the state has not been seen on
/// the branch before.
pub fn is_valid(state: &BlockState, history: &[BlockState], config: &PuzzleConfig) -> bool {
    if !config.is_well_formed() {
        return false;
    }

    if state.total(Color::Red) != i64::from(config.red_total)
        || state.total(Color::Blue) != i64::from(config.blue_total)
    {
        return false;
    }

    if !state.pile1.is_non_negative() || !state.pile2.is_non_negative() {
        return false;
    }

    if !state.pile1.is_safe(config.safety) || !state.pile2.is_safe(config.safety) {
        return false;
    }

    !history.contains(state)
}
