//! The block puzzle as a searchable node.

use std::fmt;

use smallvec::SmallVec;

use crate::node::{Node, Traced};
use crate::puzzle::{BlockState, PuzzleConfig};
use crate::render::render_path;
use crate::rules::{is_valid, moves_from};

/// States on one branch, start first. Most solutions are short enough to
/// stay inline.
pub type Path = SmallVec<[BlockState; 16]>;

/// One configuration of the puzzle together with the branch that led to it
#[derive(Debug, Clone)]
pub struct BlockNode {
    config: PuzzleConfig,
    path: Path,
    valid: bool,
}

impl BlockNode {
    /// Start node whose totals are read from `state` itself.
    pub fn new(state: BlockState, hand_capacity: i32) -> Self {
        Self::with_config(state, PuzzleConfig::from_state(&state, hand_capacity))
    }

    /// Start node with explicit totals. If the piles don't add up to them
    /// the node is invalid and has no children.
    pub fn with_config(state: BlockState, config: PuzzleConfig) -> Self {
        let mut path = Path::new();
        path.push(state);
        Self::from_path(config, path)
    }

    fn from_path(config: PuzzleConfig, path: Path) -> Self {
        let valid = match path.split_last() {
            Some((state, earlier)) => is_valid(state, earlier, &config),
            None => false,
        };
        Self {
            config,
            path,
            valid,
        }
    }

    fn child(&self, state: BlockState) -> Self {
        let mut path = self.path.clone();
        path.push(state);
        Self::from_path(self.config, path)
    }

    pub fn state(&self) -> &BlockState {
        // never empty: every constructor pushes a state
        &self.path[self.path.len() - 1]
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn path(&self) -> &[BlockState] {
        &self.path
    }

    /// Moves made so far
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// Validity as checked when the node was built
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Node for BlockNode {
    type Goal = BlockState;

    fn generate_children(&self) -> Vec<Self> {
        if !self.valid {
            return Vec::new();
        }

        let state = *self.state();
        moves_from(&state, state.hands, self.config.hand_capacity)
            .iter()
            .filter_map(|mv| state.apply(mv))
            .map(|next| self.child(next))
            .filter(BlockNode::is_valid)
            .collect()
    }

    /// An invalid node never counts as a goal, even if its piles match.
    fn satisfies_goal(&self, goal: &BlockState) -> bool {
        self.valid && self.state() == goal
    }
}

impl Traced for BlockNode {
    type State = BlockState;

    fn history(&self) -> &[BlockState] {
        &self.path
    }
}

impl fmt::Display for BlockNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_path(&self.path, &self.config))
    }
}
