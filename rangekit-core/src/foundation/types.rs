//! Core type definitions for rangekit.

use core::fmt;
use core::str::FromStr;

use crate::foundation::error::Error;

/// Traversal direction of a reversible view.
///
/// The default is [`Direction::Backward`], so a view built without an
/// explicit direction walks the container from its last element to its
/// first. A plain `bool` converts with `true` meaning backward, which lets a
/// runtime flag pick the direction of a single loop body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Natural order, first element to last.
    Forward,
    /// Reverse order, last element to first.
    #[default]
    Backward,
}

impl Direction {
    /// Creates a direction from a "iterate backward" flag.
    #[inline]
    pub const fn from_backward_flag(backward: bool) -> Self {
        if backward {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    /// Returns whether this is [`Direction::Backward`].
    #[inline]
    pub const fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }

    /// Returns whether this is [`Direction::Forward`].
    #[inline]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Returns the canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl From<bool> for Direction {
    fn from(backward: bool) -> Self {
        Self::from_backward_flag(backward)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "forwards" | "fwd" => Ok(Self::Forward),
            "backward" | "backwards" | "bwd" | "reverse" | "rev" => Ok(Self::Backward),
            _ => Err(Error::Parse {
                value: s.to_string(),
                expected: "forward or backward",
            }),
        }
    }
}
