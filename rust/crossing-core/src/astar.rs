use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;

use tracing::debug;

use crate::models::{SearchResult, Step};
use crate::options::SearchOptions;
use crate::state::PuzzleState;

/// Persistent path link. Frontier entries share their common prefix
/// structurally; pushing a successor appends one record without copying.
struct PathLink {
    step: Step,
    prev: Option<Rc<PathLink>>,
}

struct QueueNode {
    state: PuzzleState,
    f: i64,
    g: i64,
    h: i64,
    seq: u64,
    path: Option<Rc<PathLink>>,
}

impl PartialEq for QueueNode {
    fn eq(&self, other: &Self) -> bool {
        (self.f, self.g, self.seq) == (other.f, other.g, other.seq)
    }
}
impl Eq for QueueNode {}
impl PartialOrd for QueueNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert the (f, g, seq) key for min-heap
        // behavior. seq is unique per push, so the order is total.
        (other.f, other.g, other.seq).cmp(&(self.f, self.g, self.seq))
    }
}

/// Best-first driver over puzzle states. All mutable search state lives
/// inside `solve`, so a searcher can be reused and invocations never share
/// tie-break counters.
pub struct Searcher {
    start: PuzzleState,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(total_m: i32, total_c: i32) -> Self {
        Self::with_options(total_m, total_c, SearchOptions::default())
    }

    pub fn with_options(total_m: i32, total_c: i32, options: SearchOptions) -> Self {
        Self {
            start: PuzzleState::start(total_m, total_c),
            options,
        }
    }

    pub fn start_state(&self) -> PuzzleState {
        self.start
    }

    pub fn solve(&self) -> SearchResult {
        let mut open = BinaryHeap::new();
        let mut visited: HashSet<PuzzleState> = HashSet::new();
        let mut expanded: u64 = 0;
        let mut seq: u64 = 0;

        let h0 = self.start.heuristic();
        open.push(QueueNode {
            state: self.start,
            f: h0,
            g: 0,
            h: h0,
            seq,
            path: None,
        });

        while let Some(qn) = open.pop() {
            if qn.state.is_goal() {
                debug!(expanded, moves = qn.g, "goal reached");
                return SearchResult {
                    path: Some(collect_path(qn.path)),
                    reason: None,
                    expanded,
                };
            }
            // Lazy deletion: entries for an already-finalized state may
            // linger in the heap with worse keys; skip them here.
            if visited.contains(&qn.state) {
                continue;
            }
            visited.insert(qn.state);
            expanded += 1;
            if expanded > self.options.max_expansions {
                return SearchResult {
                    path: None,
                    reason: Some("expansion-limit".into()),
                    expanded,
                };
            }

            for (next, mv) in qn.state.successors() {
                if visited.contains(&next) {
                    continue;
                }
                let g = qn.g + 1;
                let h = next.heuristic();
                let f = g + h;
                let step = Step {
                    move_: mv,
                    from: qn.state,
                    to: next,
                    f,
                    g,
                    h,
                };
                seq += 1;
                open.push(QueueNode {
                    state: next,
                    f,
                    g,
                    h,
                    seq,
                    path: Some(Rc::new(PathLink {
                        step,
                        prev: qn.path.clone(),
                    })),
                });
            }
        }

        debug!(expanded, "frontier exhausted");
        SearchResult {
            path: None,
            reason: Some("no-path".into()),
            expanded,
        }
    }
}

fn collect_path(tail: Option<Rc<PathLink>>) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut cur = tail;
    while let Some(link) = cur {
        steps.push(link.step.clone());
        cur = link.prev.clone();
    }
    steps.reverse();
    steps
}
