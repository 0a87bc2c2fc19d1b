//! Block puzzle representation types.
//!
//! Two piles hold red and blue blocks. A pair of hands carries a bounded
//! number of blocks from the pile it stands at to the other pile. No pile
//! may ever hold more red blocks than blue ones; [`SafetyRule::BlueGuarded`]
//! relaxes this for piles that hold no blue at all.
//!
//! Counts are signed so that malformed configurations can be described
//! and then rejected by the validity rules instead of failing to parse.

use serde::{Deserialize, Serialize};

/// One of the two piles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pile {
    Pile1,
    Pile2,
}

impl Pile {
    pub fn other(self) -> Pile {
        match self {
            Pile::Pile1 => Pile::Pile2,
            Pile::Pile2 => Pile::Pile1,
        }
    }
}

/// Block color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

/// When a pile counts as safe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyRule {
    /// Red may never outnumber blue
    #[default]
    Strict,
    /// Red may not outnumber blue in a pile that holds any blue blocks.
    /// A pile of only red blocks is safe.
    BlueGuarded,
}

/// Blocks of each color in one pile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileCounts {
    pub red: i32,
    pub blue: i32,
}

impl PileCounts {
    pub fn new(red: i32, blue: i32) -> Self {
        Self { red, blue }
    }

    pub fn get(&self, color: Color) -> i32 {
        match color {
            Color::Red => self.red,
            Color::Blue => self.blue,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        self.red >= 0 && self.blue >= 0
    }

    pub fn is_safe(&self, rule: SafetyRule) -> bool {
        match rule {
            SafetyRule::Strict => self.red <= self.blue,
            SafetyRule::BlueGuarded => self.blue == 0 || self.red <= self.blue,
        }
    }
}

/// A snapshot of the puzzle: pile contents plus where the hands are.
///
/// Snapshots carry no history, so two states compare equal whenever the
/// piles and hands match. Goals are expressed as a `BlockState` too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    pub pile1: PileCounts,
    pub pile2: PileCounts,
    pub hands: Pile,
}

impl BlockState {
    pub fn new(pile1: PileCounts, pile2: PileCounts, hands: Pile) -> Self {
        Self {
            pile1,
            pile2,
            hands,
        }
    }

    /// Build a state from per-color splits: `red` is (pile1, pile2) and so
    /// is `blue`.
    pub fn from_colors(red: (i32, i32), blue: (i32, i32), hands: Pile) -> Self {
        Self {
            pile1: PileCounts::new(red.0, blue.0),
            pile2: PileCounts::new(red.1, blue.1),
            hands,
        }
    }

    pub fn pile(&self, pile: Pile) -> &PileCounts {
        match pile {
            Pile::Pile1 => &self.pile1,
            Pile::Pile2 => &self.pile2,
        }
    }

    fn pile_mut(&mut self, pile: Pile) -> &mut PileCounts {
        match pile {
            Pile::Pile1 => &mut self.pile1,
            Pile::Pile2 => &mut self.pile2,
        }
    }

    /// Total blocks of a color across both piles. Widened so that two
    /// in-range pile counts can never overflow.
    pub fn total(&self, color: Color) -> i64 {
        i64::from(self.pile1.get(color)) + i64::from(self.pile2.get(color))
    }

    /// Carry blocks across and leave the hands at the destination.
    ///
    /// Only transfers counts, so totals are unchanged by construction.
    /// Returns `None` if a count would leave the `i32` range.
    pub fn apply(&self, mv: &Move) -> Option<BlockState> {
        let mut next = *self;
        let to = mv.from.other();
        {
            let source = next.pile_mut(mv.from);
            source.red = source.red.checked_sub(mv.red)?;
            source.blue = source.blue.checked_sub(mv.blue)?;
        }
        {
            let dest = next.pile_mut(to);
            dest.red = dest.red.checked_add(mv.red)?;
            dest.blue = dest.blue.checked_add(mv.blue)?;
        }
        next.hands = to;
        Some(next)
    }
}

/// Blocks carried from one pile to the other in a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pile,
    pub red: i32,
    pub blue: i32,
}

impl Move {
    pub fn new(from: Pile, red: i32, blue: i32) -> Self {
        Self { from, red, blue }
    }

    pub fn carried(&self, color: Color) -> i32 {
        match color {
            Color::Red => self.red,
            Color::Blue => self.blue,
        }
    }

    /// Change in (pile1, pile2) for one color. The two always cancel out.
    pub fn deltas(&self, color: Color) -> (i32, i32) {
        let n = self.carried(color);
        match self.from {
            Pile::Pile1 => (-n, n),
            Pile::Pile2 => (n, -n),
        }
    }

    pub fn size(&self) -> i32 {
        self.red + self.blue
    }
}

/// Fixed parameters of one puzzle, shared by every state of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    pub red_total: i32,
    pub blue_total: i32,
    /// Blocks that can be carried at once
    pub hand_capacity: i32,
    #[serde(default)]
    pub safety: SafetyRule,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(3, 3, 2)
    }
}

fn clamp_total(total: i64) -> i32 {
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl PuzzleConfig {
    pub fn new(red_total: i32, blue_total: i32, hand_capacity: i32) -> Self {
        Self {
            red_total,
            blue_total,
            hand_capacity,
            safety: SafetyRule::Strict,
        }
    }

    /// Totals taken from an existing state. A total outside the `i32`
    /// range is clamped, which leaves it unequal to the state's real total
    /// so the state is rejected as malformed.
    pub fn from_state(state: &BlockState, hand_capacity: i32) -> Self {
        Self::new(
            clamp_total(state.total(Color::Red)),
            clamp_total(state.total(Color::Blue)),
            hand_capacity,
        )
    }

    pub fn with_safety(mut self, safety: SafetyRule) -> Self {
        self.safety = safety;
        self
    }

    pub fn total(&self, color: Color) -> i32 {
        match color {
            Color::Red => self.red_total,
            Color::Blue => self.blue_total,
        }
    }

    /// Non-negative totals and room for at least one block
    pub fn is_well_formed(&self) -> bool {
        self.red_total >= 0 && self.blue_total >= 0 && self.hand_capacity >= 1
    }

    /// Everything in pile1, hands at pile1
    pub fn classic_start(&self) -> BlockState {
        BlockState::new(
            PileCounts::new(self.red_total, self.blue_total),
            PileCounts::default(),
            Pile::Pile1,
        )
    }

    /// Everything in pile2, hands at pile2
    pub fn classic_goal(&self) -> BlockState {
        BlockState::new(
            PileCounts::default(),
            PileCounts::new(self.red_total, self.blue_total),
            Pile::Pile2,
        )
    }
}
