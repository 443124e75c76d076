//! Error handling for rangekit.
//!
//! Adapter construction and iteration are infallible; every structural rule
//! (borrowed vs. owned, read-only vs. mutable) is checked by the compiler.
//! The errors here cover the few runtime entry points: parsing a
//! [`Direction`](crate::foundation::types::Direction) from text and the
//! checked lockstep view that insists on equal-length containers.

/// The main error type for rangekit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value could not be parsed.
    #[error("Cannot parse '{value}': expected {expected}")]
    Parse {
        /// The rejected input.
        value: String,
        /// What the parser accepts.
        expected: &'static str,
    },

    /// Containers in a checked lockstep view differ in length.
    #[error("Length mismatch: shortest container has {shortest} elements, longest has {longest}")]
    LengthMismatch {
        /// Length of the shortest container.
        shortest: usize,
        /// Length of the longest container.
        longest: usize,
    },

    /// A container cannot report its exact length up front.
    #[error("Container at position {index} cannot report an exact length")]
    UnknownLength {
        /// Position of the container in the order it was supplied.
        index: usize,
    },
}

/// A specialized Result type for rangekit operations.
pub type Result<T> = core::result::Result<T, Error>;
