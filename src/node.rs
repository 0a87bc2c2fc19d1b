//! The capability set a state must expose to be searched.
//!
//! The search driver only ever talks to these traits, so it knows nothing
//! about what a state looks like or how its successors are produced.

/// A searchable state.
pub trait Node: Sized {
    /// Whatever the caller compares states against. It does not have to be
    /// the node type itself; the block puzzle uses a bare state snapshot
    /// so history never takes part in the comparison.
    type Goal: ?Sized;

    /// All states reachable from this one in a single step.
    ///
    /// Must be empty when there is nothing worth exploring from here,
    /// including when this node is itself invalid.
    fn generate_children(&self) -> Vec<Self>;

    /// Check whether this node meets the goal.
    fn satisfies_goal(&self, goal: &Self::Goal) -> bool;
}

/// A node that remembers the states visited on its way from the start.
pub trait Traced {
    type State: Clone;

    /// States from the start node up to and including this one.
    fn history(&self) -> &[Self::State];
}
