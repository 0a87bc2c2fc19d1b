//! Puzzle files.
//!
//! A puzzle file is JSON:
//!
//! ```json
//! {
//!   "config": { "redTotal": 3, "blueTotal": 3, "handCapacity": 2 },
//!   "start": { "pile1": { "red": 3, "blue": 3 }, "pile2": { "red": 0, "blue": 0 }, "hands": "pile1" },
//!   "goal":  { "pile1": { "red": 0, "blue": 0 }, "pile2": { "red": 3, "blue": 3 }, "hands": "pile2" }
//! }
//! ```
//!
//! `config` may be left out, in which case the totals are read from
//! `start` and two hands are assumed.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::blocks::BlockNode;
use crate::puzzle::{BlockState, PuzzleConfig};

/// Hands assumed when a file gives no configuration
pub const DEFAULT_HAND_CAPACITY: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("invalid puzzle JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A start state, a goal, and optionally the configuration to search under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PuzzleConfig>,
    pub start: BlockState,
    pub goal: BlockState,
}

impl PuzzleFile {
    /// The classic layout for a configuration: everything moves from pile1
    /// to pile2.
    pub fn classic(config: PuzzleConfig) -> Self {
        Self {
            start: config.classic_start(),
            goal: config.classic_goal(),
            config: Some(config),
        }
    }

    pub fn config(&self) -> PuzzleConfig {
        self.config
            .unwrap_or_else(|| PuzzleConfig::from_state(&self.start, DEFAULT_HAND_CAPACITY))
    }

    pub fn start_node(&self) -> BlockNode {
        BlockNode::with_config(self.start, self.config())
    }
}

pub fn parse_puzzle(json: &str) -> Result<PuzzleFile, InputError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_puzzle_file(path: &Path) -> Result<PuzzleFile, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&content)
}

pub fn read_puzzle_stdin() -> Result<PuzzleFile, InputError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_puzzle(&buffer)
}
