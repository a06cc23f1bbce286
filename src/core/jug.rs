//! Jugs and their stable identity labels.
//!
//! A jug's position inside a [`JugPair`](super::JugPair) changes as actions
//! reorder the pair, so identity is carried by a [`JugLabel`] instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a jug, independent of its position in a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JugLabel {
    X,
    Y,
}

impl JugLabel {
    /// Display name used in step descriptions and table headers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "Jug X",
            Self::Y => "Jug Y",
        }
    }
}

impl fmt::Display for JugLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A container with a fixed capacity and a current fill level.
///
/// Jugs are plain values. Actions take them by reference and hand back
/// new jugs, so every search node owns its own snapshot.
///
/// # Example
///
/// ```rust
/// use jugsolve::core::{Jug, JugLabel};
///
/// let jug = Jug::new(JugLabel::X, 3);
/// assert_eq!(jug.value(), 0);
/// assert_eq!(jug.remaining(), 3);
/// assert!(jug.is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jug {
    label: JugLabel,
    volume: i64,
    value: i64,
}

impl Jug {
    /// Create an empty jug with the given capacity.
    pub fn new(label: JugLabel, volume: i64) -> Self {
        Self {
            label,
            volume,
            value: 0,
        }
    }

    /// Create a jug holding `value`. No bounds are enforced here; the
    /// transfer action reports over-full jugs as an invalid state.
    pub fn with_value(label: JugLabel, volume: i64, value: i64) -> Self {
        Self {
            label,
            volume,
            value,
        }
    }

    pub fn label(&self) -> JugLabel {
        self.label
    }

    pub fn volume(&self) -> i64 {
        self.volume
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Capacity left before the jug is full.
    pub fn remaining(&self) -> i64 {
        self.volume - self.value
    }

    pub fn is_full(&self) -> bool {
        self.value == self.volume
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Same jug with a different fill level.
    pub(crate) fn set(self, value: i64) -> Self {
        Self { value, ..self }
    }
}
