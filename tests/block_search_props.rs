//! Property tests for move generation, the validity rules and the search
//! driver running over the block puzzle.
//!
//! Invariants covered:
//! - Every reachable state keeps the configured totals.
//! - Every generated child is safe, non-negative and new on its branch.
//! - Generated moves are never empty, never exceed the hands, never take
//!   more than the source pile holds, and come out in the same order twice.
//! - Solution paths start at the start state, end at the goal, repeat no
//!   state and step by legal moves.
//! - Depth-first and breadth-first agree on solvability.

use std::collections::{HashSet, VecDeque};

use block_search::{
    breadth_first, compute_possible_moves, depth_first, run, BlockNode, BlockState, Color, Node,
    Pile, PileCounts, PuzzleConfig, SafetyRule, SearchConfig, Solvable, Termination, Traversal,
};
use proptest::prelude::*;

const EXPANSION_BUDGET: usize = 20_000;

fn safety_strategy() -> impl Strategy<Value = SafetyRule> {
    prop_oneof![Just(SafetyRule::Strict), Just(SafetyRule::BlueGuarded)]
}

fn config_strategy() -> impl Strategy<Value = PuzzleConfig> {
    (0..=3i32, 0..=3i32, 1..=3i32, safety_strategy())
        .prop_map(|(red, blue, hands, safety)| PuzzleConfig::new(red, blue, hands).with_safety(safety))
}

fn is_safe(pile: &PileCounts, rule: SafetyRule) -> bool {
    match rule {
        SafetyRule::Strict => pile.red <= pile.blue,
        SafetyRule::BlueGuarded => pile.blue == 0 || pile.red <= pile.blue,
    }
}

/// Every distinct state reachable from the classic start, each visited once.
fn reachable(config: PuzzleConfig) -> Vec<BlockNode> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([BlockNode::with_config(config.classic_start(), config)]);
    let mut out = Vec::new();

    while let Some(node) = queue.pop_front() {
        if !seen.insert(*node.state()) {
            continue;
        }
        queue.extend(node.generate_children());
        out.push(node);
    }
    out
}

fn assert_legal_step(prev: &BlockState, next: &BlockState, config: &PuzzleConfig) {
    assert_eq!(next.hands, prev.hands.other());

    let source = prev.hands;
    let red = prev.pile(source).red - next.pile(source).red;
    let blue = prev.pile(source).blue - next.pile(source).blue;
    assert!(red >= 0 && blue >= 0);
    assert!(red + blue >= 1);
    assert!(red + blue <= config.hand_capacity);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reachable_states_conserve_blocks_and_stay_safe(config in config_strategy()) {
        for node in reachable(config) {
            let state = node.state();
            prop_assert_eq!(state.total(Color::Red), i64::from(config.red_total));
            prop_assert_eq!(state.total(Color::Blue), i64::from(config.blue_total));

            for child in node.generate_children() {
                let next = child.state();
                prop_assert!(child.is_valid());
                prop_assert!(next.pile1.is_non_negative() && next.pile2.is_non_negative());
                prop_assert!(is_safe(&next.pile1, config.safety));
                prop_assert!(is_safe(&next.pile2, config.safety));
                prop_assert!(!node.path().contains(next));
                prop_assert_eq!(child.path().len(), node.path().len() + 1);
                assert_legal_step(state, next, &config);
            }
        }
    }

    #[test]
    fn moves_respect_capacity_and_source(
        pile1_red in 0..=5i32,
        pile1_blue in 0..=5i32,
        pile2_red in 0..=5i32,
        pile2_blue in 0..=5i32,
        capacity in 0..=4i32,
    ) {
        let state = BlockState::new(
            PileCounts::new(pile1_red, pile1_blue),
            PileCounts::new(pile2_red, pile2_blue),
            Pile::Pile1,
        );
        let moves = compute_possible_moves(&state, capacity);
        prop_assert_eq!(&moves, &compute_possible_moves(&state, capacity));

        for from in [Pile::Pile1, Pile::Pile2] {
            let source = state.pile(from);
            let listed = moves.for_pile(from);

            let mut expected = 0;
            for red in 0..=source.red {
                for blue in 0..=source.blue {
                    if red + blue >= 1 && red + blue <= capacity {
                        expected += 1;
                    }
                }
            }
            prop_assert_eq!(listed.len(), expected);

            for mv in listed {
                prop_assert_eq!(mv.from, from);
                prop_assert!(mv.size() >= 1);
                prop_assert!(mv.size() <= capacity);
                prop_assert!(mv.red <= source.red && mv.blue <= source.blue);
                prop_assert_eq!(mv.deltas(Color::Red).0, -mv.deltas(Color::Red).1);
            }
        }
    }

    #[test]
    fn solutions_are_legal_cycle_free_paths(
        config in config_strategy(),
        depth_first_order in any::<bool>(),
    ) {
        let traversal = if depth_first_order {
            Traversal::DepthFirst
        } else {
            Traversal::BreadthFirst
        };
        let search = SearchConfig {
            traversal,
            max_expansions: Some(EXPANSION_BUDGET),
            timeout: None,
        };
        let start = config.classic_start();
        let goal = config.classic_goal();
        let result = run(BlockNode::with_config(start, config), &goal, &search);

        if result.solved() {
            let path = result.last.path();
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&goal));

            let distinct: HashSet<&BlockState> = path.iter().collect();
            prop_assert_eq!(distinct.len(), path.len());

            for step in path.windows(2) {
                assert_legal_step(&step[0], &step[1], &config);
            }
        }
    }

    #[test]
    fn traversals_agree_on_solvability(config in config_strategy()) {
        let start = config.classic_start();
        let goal = config.classic_goal();
        let outcome = |traversal| {
            let search = SearchConfig {
                traversal,
                max_expansions: Some(EXPANSION_BUDGET),
                timeout: None,
            };
            run(BlockNode::with_config(start, config), &goal, &search).termination
        };

        let dfs = outcome(Traversal::DepthFirst);
        let bfs = outcome(Traversal::BreadthFirst);
        if dfs != Termination::ExpansionLimit && bfs != Termination::ExpansionLimit {
            prop_assert_eq!(dfs, bfs);
        }
    }
}

#[test]
fn single_block_each_moves_one_at_a_time() {
    let start = BlockState::from_colors((1, 0), (1, 0), Pile::Pile1);
    let moves = compute_possible_moves(&start, 1);

    let loads: Vec<(i32, i32)> = moves.from_pile1.iter().map(|m| (m.red, m.blue)).collect();
    assert_eq!(loads, vec![(1, 0), (0, 1)]);
}

#[test]
fn lone_reds_exhaust_the_frontier() {
    let start = BlockState::from_colors((2, 0), (0, 0), Pile::Pile1);
    let goal = BlockState::from_colors((0, 2), (0, 0), Pile::Pile2);

    assert!(!depth_first(BlockNode::new(start, 1), &goal, &Solvable));
    assert!(!breadth_first(BlockNode::new(start, 1), &goal, &Solvable));

    // still fails, after a few steps, when red-only piles are allowed
    let guarded = PuzzleConfig::new(2, 0, 1).with_safety(SafetyRule::BlueGuarded);
    let result = run(
        BlockNode::with_config(start, guarded),
        &goal,
        &SearchConfig::unbounded(Traversal::DepthFirst),
    );
    assert_eq!(result.termination, Termination::FrontierExhausted);
    assert!(result.stats.nodes_examined > 1);
}

#[test]
fn crowded_start_is_invalid() {
    let start = BlockNode::new(BlockState::from_colors((3, 0), (2, 1), Pile::Pile1), 2);
    assert!(!start.is_valid());
    assert!(start.generate_children().is_empty());
}
