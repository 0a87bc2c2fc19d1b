//! Text diagrams of puzzle states.
//!
//! Each state is one line, the two piles in brackets with the hands
//! between them:
//!
//! ```text
//! [RR  | BB ]    OOO [R   | B  ]
//! ```
//!
//! Red and blue columns are padded to the color's total so that lines of
//! the same puzzle line up. Columns and hands are drawn at most
//! [`MAX_DRAWN`] wide.

use std::iter;

use crate::puzzle::{BlockState, Color, Pile, PileCounts, PuzzleConfig};

/// Widest column or pair of hands drawn for any count
pub const MAX_DRAWN: usize = 64;

fn drawn(count: i32) -> usize {
    (count.max(0) as usize).min(MAX_DRAWN)
}

fn column(symbol: char, count: i32, width: i32) -> String {
    let count = drawn(count);
    let width = drawn(width);
    let mut out: String = iter::repeat(symbol).take(count).collect();
    while out.len() < width {
        out.push(' ');
    }
    out
}

fn render_pile(pile: &PileCounts, config: &PuzzleConfig) -> String {
    format!(
        "[{} | {}]",
        column('R', pile.red, config.total(Color::Red)),
        column('B', pile.blue, config.total(Color::Blue)),
    )
}

fn render_hands(hands: Pile, capacity: i32) -> String {
    let capacity = drawn(capacity);
    let held = "O".repeat(capacity);
    let gap = " ".repeat(capacity + 1);
    match hands {
        Pile::Pile1 => format!(" {held}{gap}"),
        Pile::Pile2 => format!("{gap}{held} "),
    }
}

/// One line for a single state.
pub fn render_state(state: &BlockState, config: &PuzzleConfig) -> String {
    format!(
        "{}{}{}",
        render_pile(&state.pile1, config),
        render_hands(state.hands, config.hand_capacity),
        render_pile(&state.pile2, config),
    )
}

/// One line per state, oldest first.
pub fn render_path(path: &[BlockState], config: &PuzzleConfig) -> String {
    path.iter()
        .map(|state| render_state(state, config))
        .collect::<Vec<_>>()
        .join("\n")
}
