//! Depth-first and breadth-first state-space search.
//!
//! The search driver in [`search`] works on anything implementing
//! [`node::Node`]. The crate also ships one such state space: a block
//! sorting puzzle where red and blue blocks are carried between two piles
//! without ever letting red outnumber blue in a pile.
//!
//! ## Modules
//! - `node`: the traits a searchable state implements.
//! - `search`: frontier, iterative driver, result reporters and budgets.
//! - `puzzle`: piles, block counts, states, moves and puzzle configuration.
//! - `rules`: move generation and the validity predicate.
//! - `blocks`: the block puzzle node.
//! - `render`: text diagrams of states and paths.
//! - `input`: JSON puzzle files.

pub mod blocks;
pub mod input;
pub mod node;
pub mod puzzle;
pub mod render;
pub mod rules;
pub mod search;

// Re-export main types
pub use blocks::{BlockNode, Path};
pub use input::{InputError, PuzzleFile};
pub use node::{Node, Traced};
pub use puzzle::{BlockState, Color, Move, Pile, PileCounts, PuzzleConfig, SafetyRule};
pub use render::{render_path, render_state};
pub use rules::{compute_possible_moves, is_valid, PossibleMoves};
pub use search::{
    breadth_first, depth_first, run, search, FinalNode, Reporter, SearchConfig, SearchRun,
    SearchStats, SolutionPath, Solvable, Termination, Traversal,
};
