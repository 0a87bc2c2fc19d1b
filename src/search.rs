//! Iterative depth-first and breadth-first search.
//!
//! The driver keeps an explicit frontier instead of recursing, so deep
//! problem spaces never grow the call stack. Expansion order is the only
//! difference between the two traversals:
//!
//! ```text
//! depth-first:   pending := expand(current) + pending
//! breadth-first: pending := pending + expand(current)
//! ```
//!
//! What a finished search hands back to the caller is decided by a
//! [`Reporter`], so the same driver answers "is there a solution" as well
//! as "what is the solution".
//!
//! Without a budget the driver does not terminate on an infinite space
//! that holds no goal. [`SearchConfig`] lets a caller cap the number of
//! expansions or the wall-clock time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::node::{Node, Traced};

/// Frontier discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Stack: the newest children are explored first
    DepthFirst,
    /// Queue: states are explored in the order they were discovered
    BreadthFirst,
}

/// Nodes waiting to be examined.
#[derive(Debug, Clone)]
pub struct Frontier<N> {
    traversal: Traversal,
    pending: VecDeque<N>,
    high_water: usize,
}

impl<N> Frontier<N> {
    pub fn new(traversal: Traversal) -> Self {
        Self {
            traversal,
            pending: VecDeque::new(),
            high_water: 0,
        }
    }

    /// Add freshly generated children. Depth-first keeps the children in
    /// generation order ahead of everything already pending.
    pub fn merge(&mut self, children: Vec<N>) {
        match self.traversal {
            Traversal::DepthFirst => {
                for child in children.into_iter().rev() {
                    self.pending.push_front(child);
                }
            }
            Traversal::BreadthFirst => self.pending.extend(children),
        }
        self.high_water = self.high_water.max(self.pending.len());
    }

    /// Take the next node to examine.
    pub fn pop(&mut self) -> Option<N> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Largest size the frontier reached
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Configuration for a single search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub traversal: Traversal,
    /// Stop after expanding this many nodes
    pub max_expansions: Option<usize>,
    /// Stop once this much time has passed
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    /// No limits: runs until the goal is found or the frontier empties.
    pub fn unbounded(traversal: Traversal) -> Self {
        Self {
            traversal,
            max_expansions: None,
            timeout: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::unbounded(Traversal::BreadthFirst)
    }
}

/// Why a search run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    GoalReached,
    FrontierExhausted,
    ExpansionLimit,
    TimedOut,
}

impl Termination {
    pub fn is_success(self) -> bool {
        self == Termination::GoalReached
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Nodes checked against the goal
    pub nodes_examined: usize,
    /// Nodes whose children were generated
    pub nodes_expanded: usize,
    pub max_frontier: usize,
    pub time_elapsed_ms: u64,
}

/// Outcome of [`run`]
#[derive(Debug, Clone)]
pub struct SearchRun<N> {
    /// The goal node on success, otherwise the last node examined
    pub last: N,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl<N> SearchRun<N> {
    pub fn solved(&self) -> bool {
        self.termination.is_success()
    }

    /// Hand the final node to a reporter.
    pub fn report<R: Reporter<N>>(self, reporter: &R) -> R::Output {
        let success = self.solved();
        reporter.report(self.last, success)
    }
}

/// Turns the final node of a search into a result.
pub trait Reporter<N> {
    type Output;

    fn report(&self, last: N, success: bool) -> Self::Output;
}

/// Reports only whether a solution exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solvable;

impl<N> Reporter<N> for Solvable {
    type Output = bool;

    fn report(&self, _last: N, success: bool) -> bool {
        success
    }
}

/// Reports the goal node itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalNode;

impl<N> Reporter<N> for FinalNode {
    type Output = Option<N>;

    fn report(&self, last: N, success: bool) -> Option<N> {
        if success {
            Some(last)
        } else {
            None
        }
    }
}

/// Reports the states from the start to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionPath;

impl<N: Traced> Reporter<N> for SolutionPath {
    type Output = Option<Vec<N::State>>;

    fn report(&self, last: N, success: bool) -> Self::Output {
        if success {
            Some(last.history().to_vec())
        } else {
            None
        }
    }
}

/// Run the search driver.
///
/// Examines `start`, then keeps taking nodes from the frontier until one
/// satisfies `goal`, the frontier runs dry, or a budget in `config` runs
/// out. Budgets are checked after the goal test, so a goal node is never
/// missed because a limit was hit on that same step.
pub fn run<N: Node>(start: N, goal: &N::Goal, config: &SearchConfig) -> SearchRun<N> {
    let start_time = Instant::now();
    let deadline = config.timeout.map(|timeout| start_time + timeout);

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("search", traversal = ?config.traversal).entered();

    let mut frontier = Frontier::new(config.traversal);
    let mut stats = SearchStats::default();
    let mut current = start;

    let termination = loop {
        stats.nodes_examined += 1;
        if current.satisfies_goal(goal) {
            break Termination::GoalReached;
        }

        if config
            .max_expansions
            .is_some_and(|limit| stats.nodes_expanded >= limit)
        {
            break Termination::ExpansionLimit;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            break Termination::TimedOut;
        }

        frontier.merge(current.generate_children());
        stats.nodes_expanded += 1;

        match frontier.pop() {
            Some(next) => current = next,
            None => break Termination::FrontierExhausted,
        }
    };

    stats.max_frontier = frontier.high_water();
    stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        ?termination,
        examined = stats.nodes_examined,
        expanded = stats.nodes_expanded,
        max_frontier = stats.max_frontier,
        "search finished"
    );

    SearchRun {
        last: current,
        termination,
        stats,
    }
}

/// Unbounded search in the given order.
pub fn search<N, R>(start: N, goal: &N::Goal, traversal: Traversal, reporter: &R) -> R::Output
where
    N: Node,
    R: Reporter<N>,
{
    run(start, goal, &SearchConfig::unbounded(traversal)).report(reporter)
}

pub fn depth_first<N, R>(start: N, goal: &N::Goal, reporter: &R) -> R::Output
where
    N: Node,
    R: Reporter<N>,
{
    search(start, goal, Traversal::DepthFirst, reporter)
}

pub fn breadth_first<N, R>(start: N, goal: &N::Goal, reporter: &R) -> R::Output
where
    N: Node,
    R: Reporter<N>,
{
    search(start, goal, Traversal::BreadthFirst, reporter)
}
