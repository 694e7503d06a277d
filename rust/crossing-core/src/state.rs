use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::models::{Move, MOVES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatSide {
    Left,
    Right,
}

impl BoatSide {
    pub fn opposite(self) -> Self {
        match self {
            BoatSide::Left => BoatSide::Right,
            BoatSide::Right => BoatSide::Left,
        }
    }
}

impl fmt::Display for BoatSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoatSide::Left => f.write_str("left"),
            BoatSide::Right => f.write_str("right"),
        }
    }
}

/// One configuration of the puzzle. Right-bank counts are derived from the
/// totals, so state identity is carried entirely by the left bank and the
/// boat side.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PuzzleState {
    pub m_left: i32,
    pub c_left: i32,
    pub boat: BoatSide,
    pub total_m: i32,
    pub total_c: i32,
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        (self.m_left, self.c_left, self.boat) == (other.m_left, other.c_left, other.boat)
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.m_left, self.c_left, self.boat).hash(state);
    }
}

impl PuzzleState {
    /// The canonical start: everyone on the left bank, boat on the left.
    pub fn start(total_m: i32, total_c: i32) -> Self {
        Self {
            m_left: total_m,
            c_left: total_c,
            boat: BoatSide::Left,
            total_m,
            total_c,
        }
    }

    pub fn m_right(&self) -> i32 {
        self.total_m - self.m_left
    }

    pub fn c_right(&self) -> i32 {
        self.total_c - self.c_left
    }

    /// Counts within bounds and no bank where missionaries are present but
    /// outnumbered. A bank with zero missionaries is safe regardless of its
    /// cannibal count; that exemption is puzzle logic, not an oversight.
    pub fn is_valid(&self) -> bool {
        if self.m_left < 0
            || self.m_left > self.total_m
            || self.c_left < 0
            || self.c_left > self.total_c
        {
            return false;
        }
        // Right-bank bounds follow from the derived counts.
        (self.m_left == 0 || self.m_left >= self.c_left)
            && (self.m_right() == 0 || self.m_right() >= self.c_right())
    }

    pub fn is_goal(&self) -> bool {
        self.m_left == 0 && self.c_left == 0 && self.boat == BoatSide::Right
    }

    /// Minimum boat trips to clear the left bank at two per crossing,
    /// ignoring return trips. Used as the A* guide.
    pub fn heuristic(&self) -> i64 {
        ((self.m_left + self.c_left + 1) / 2) as i64
    }

    fn apply(&self, mv: Move) -> Self {
        let (dm, dc) = match self.boat {
            BoatSide::Left => (-mv.missionaries, -mv.cannibals),
            BoatSide::Right => (mv.missionaries, mv.cannibals),
        };
        Self {
            m_left: self.m_left + dm,
            c_left: self.c_left + dc,
            boat: self.boat.opposite(),
            ..*self
        }
    }

    /// Valid transitions out of this state, in move-set order.
    pub fn successors(&self) -> Vec<(PuzzleState, Move)> {
        MOVES
            .iter()
            .filter_map(|&mv| {
                let next = self.apply(mv);
                next.is_valid().then_some((next, mv))
            })
            .collect()
    }
}
