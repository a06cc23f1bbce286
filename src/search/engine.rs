//! Recursive depth-first solver.

use crate::core::{Jug, JugPair, Solution, Step};
use crate::ops::{Action, OperationError, Transition};
use crate::search::error::SearchError;
use crate::search::visited::VisitedSet;
use crate::validation::validate_input;
use serde::{Deserialize, Serialize};

/// Result of exploring one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Goal reached; steps run from the goal back to the explored state
    Found(Vec<Step>),

    /// State was already visited; backtrack
    DeadEnd,

    /// Every action from this state led nowhere
    Exhausted,
}

/// Counters gathered during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States marked visited and expanded
    pub expanded: usize,
    /// Longest path explored from the initial state (which is depth 0)
    pub max_depth: usize,
}

/// A solution together with the statistics of the search that found it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub solution: Solution,
    pub stats: SearchStats,
}

/// Explore from `pair` until some jug holds `target`.
///
/// `visited` is shared across the whole search and grown as states are
/// expanded. Action failures abort immediately; dead ends and exhausted
/// branches are reported as outcomes so the caller can backtrack.
///
/// # Example
///
/// ```rust
/// use jugsolve::core::JugPair;
/// use jugsolve::search::{search, SearchOutcome, VisitedSet};
///
/// let mut visited = VisitedSet::new();
/// let outcome = search(JugPair::new(3, 5), 4, &mut visited).unwrap();
///
/// match outcome {
///     SearchOutcome::Found(steps) => assert_eq!(steps[0].y_value, 4),
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub fn search(
    pair: JugPair,
    target: i64,
    visited: &mut VisitedSet,
) -> Result<SearchOutcome, OperationError> {
    let mut stats = SearchStats::default();
    explore(pair, target, visited, &mut stats)
}

// One node on the explicit depth-first stack. `taken` is the step that
// led to the node directly above it.
struct Frame {
    pair: JugPair,
    index: usize,
    action: usize,
    taken: Option<Step>,
}

impl Frame {
    fn new(pair: JugPair) -> Self {
        Self {
            pair,
            index: 0,
            action: 0,
            taken: None,
        }
    }

    /// Next `(action, source, other)` to try: jug 0 before jug 1, and per
    /// jug the actions in `Action::ALL` order.
    fn next_move(&mut self) -> Option<(Action, Jug, Jug)> {
        while self.index < 2 {
            if let Some(&action) = Action::ALL.get(self.action) {
                self.action += 1;
                let source = *self.pair.jug(self.index);
                let other = *self.pair.other(self.index);
                return Some((action, source, other));
            }
            self.index += 1;
            self.action = 0;
        }
        None
    }
}

// Depth-first over an explicit stack so deep searches never exhaust the
// thread stack. Dead ends and exhausted frames fall through to the next
// move of the frame below.
fn explore(
    pair: JugPair,
    target: i64,
    visited: &mut VisitedSet,
    stats: &mut SearchStats,
) -> Result<SearchOutcome, OperationError> {
    if !visited.insert(pair.key()) {
        return Ok(SearchOutcome::DeadEnd);
    }
    stats.expanded += 1;

    if pair.holds(target) {
        return Ok(SearchOutcome::Found(Vec::new()));
    }

    let mut stack = vec![Frame::new(pair)];
    while let Some(frame) = stack.last_mut() {
        let Some((action, source, other)) = frame.next_move() else {
            stack.pop();
            continue;
        };
        let Transition::Applied(next) = action.apply(&source, &other)? else {
            continue;
        };
        if !visited.insert(next.key()) {
            continue;
        }

        let description = action.describe(&source, &other);
        frame.taken = Some(Step::new(action, description, next.key()));
        stats.expanded += 1;
        stats.max_depth = stats.max_depth.max(stack.len());

        if next.holds(target) {
            let steps = stack
                .iter_mut()
                .rev()
                .filter_map(|frame| frame.taken.take())
                .collect();
            return Ok(SearchOutcome::Found(steps));
        }
        stack.push(Frame::new(next));
    }

    Ok(SearchOutcome::Exhausted)
}

/// Context for one top-level search: the starting pair, the target and the
/// visited set that lives exactly as long as the solver.
pub struct Solver {
    initial: JugPair,
    target: i64,
    visited: VisitedSet,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver with a fresh visited set.
    pub fn new(initial: JugPair, target: i64) -> Self {
        Self {
            initial,
            target,
            visited: VisitedSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Run the search, consuming the solver.
    pub fn run(mut self) -> Result<Report, SearchError> {
        let outcome = explore(
            self.initial,
            self.target,
            &mut self.visited,
            &mut self.stats,
        )?;

        match outcome {
            SearchOutcome::Found(steps) => Ok(Report {
                solution: Solution::from_unwound(steps),
                stats: self.stats,
            }),
            SearchOutcome::DeadEnd | SearchOutcome::Exhausted => Err(SearchError::NoSolution),
        }
    }
}

/// Validate the input, then search from two empty jugs.
///
/// Steps are returned in initial-to-final order.
///
/// # Example
///
/// ```rust
/// use jugsolve::core::StateKey;
/// use jugsolve::search::{solve, SearchError};
///
/// let solution = solve(3, 5, 4).unwrap();
/// assert_eq!(solution.final_state(), StateKey::new(3, 4));
///
/// assert_eq!(solve(2, 6, 5), Err(SearchError::NoSolution));
/// ```
pub fn solve(capacity_x: i64, capacity_y: i64, target: i64) -> Result<Solution, SearchError> {
    validate_input(capacity_x, capacity_y, target)?;
    let report = Solver::new(JugPair::new(capacity_x, capacity_y), target).run()?;
    Ok(report.solution)
}
