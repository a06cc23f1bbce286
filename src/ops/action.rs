//! The closed set of jug actions.

use super::error::OperationError;
use crate::core::{Jug, JugPair};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of applying an action to a jug pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Action produced a new pair, ordered `[source, other]`
    Applied(JugPair),

    /// Action has no effect here and must not be explored
    NotApplicable,
}

/// One of the three jug actions.
///
/// Variants are listed in the order the search tries them.
///
/// # Example
///
/// ```rust
/// use jugsolve::core::{Jug, JugLabel, StateKey};
/// use jugsolve::ops::{Action, Transition};
///
/// let x = Jug::new(JugLabel::X, 3);
/// let y = Jug::new(JugLabel::Y, 5);
///
/// match Action::Fill.apply(&x, &y).unwrap() {
///     Transition::Applied(pair) => assert_eq!(pair.key(), StateKey::new(3, 0)),
///     Transition::NotApplicable => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Fill,
    Transfer,
    Empty,
}

impl Action {
    /// All actions in search order.
    pub const ALL: [Action; 3] = [Action::Fill, Action::Transfer, Action::Empty];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fill => "Fill",
            Self::Transfer => "Transfer",
            Self::Empty => "Empty",
        }
    }

    /// Apply this action with `source` as the acted-on jug.
    ///
    /// Inputs are never modified. The returned pair puts the new source
    /// first, so positions may differ from the caller's pair.
    pub fn apply(&self, source: &Jug, other: &Jug) -> Result<Transition, OperationError> {
        match self {
            Self::Fill => fill(source, other),
            Self::Transfer => transfer(source, other),
            Self::Empty => Ok(empty(source, other)),
        }
    }

    /// Description of this action taken from `source` (into `other`).
    pub fn describe(&self, source: &Jug, other: &Jug) -> String {
        match self {
            Self::Fill => format!("Fill {}", source.label()),
            Self::Transfer => format!("Transfer from {} to {}", source.label(), other.label()),
            Self::Empty => format!("Empty {}", source.label()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Applies even when the jug is already full; the visited set drops the
// repeated state.
fn fill(source: &Jug, other: &Jug) -> Result<Transition, OperationError> {
    if source.volume() < 1 {
        return Err(OperationError::InvalidVolume {
            jug: source.label(),
            volume: source.volume(),
        });
    }
    let filled = source.set(source.volume());
    Ok(Transition::Applied(JugPair::from_jugs(filled, *other)))
}

fn empty(source: &Jug, other: &Jug) -> Transition {
    Transition::Applied(JugPair::from_jugs(source.set(0), *other))
}

fn transfer(source: &Jug, other: &Jug) -> Result<Transition, OperationError> {
    let dif = other.remaining();
    if source.value() == 0 || dif == 0 {
        return Ok(Transition::NotApplicable);
    }
    if dif < 0 {
        return Err(OperationError::InvalidState {
            jug: other.label(),
            value: other.value(),
            volume: other.volume(),
        });
    }

    let (poured, received) = if source.value() >= dif {
        (source.set(source.value() - dif), other.set(other.volume()))
    } else {
        (source.set(0), other.set(other.value() + source.value()))
    };
    Ok(Transition::Applied(JugPair::from_jugs(poured, received)))
}
