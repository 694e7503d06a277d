use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::PuzzleState;

/// Boat occupancy for one crossing: at most two aboard, never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub missionaries: i32,
    pub cannibals: i32,
}

/// The fixed legal move set, in expansion order. Successor generation walks
/// this list front to back; which equal-cost path is found first depends on
/// it, so the order is part of the determinism contract.
pub const MOVES: [Move; 5] = [
    Move { missionaries: 1, cannibals: 0 },
    Move { missionaries: 2, cannibals: 0 },
    Move { missionaries: 0, cannibals: 1 },
    Move { missionaries: 0, cannibals: 2 },
    Move { missionaries: 1, cannibals: 1 },
];

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} M and {} C", self.missionaries, self.cannibals)
    }
}

/// One crossing on a returned path, with the A* bookkeeping that ranked it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "move")]
    pub move_: Move,
    pub from: PuzzleState,
    pub to: PuzzleState,
    pub f: i64,
    pub g: i64,
    pub h: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Option<Vec<Step>>,
    pub reason: Option<String>,
    pub expanded: u64,
}
