//! # rangekit Core
//!
//! Iteration adapters for `for` loops over standard containers:
//!
//! - **Reversible views** walk one container forward or backward, with the
//!   direction picked at runtime.
//! - **Synchronized views** walk several containers in lockstep and yield one
//!   tuple per step, stopping at the shortest container.
//! - **Key/value views** walk an associative container as `(key, value)`
//!   pairs.
//!
//! ## Architecture
//!
//! The library is organized into two layers:
//!
//! 1. **Foundation Layer**: container capability traits, the
//!    direction-switching cursor, error handling and core types
//! 2. **Adapter Layer**: the three view families built on top of it
//!
//! Every view comes in a borrowing form, an owning form for temporaries, and
//! (where it makes sense) an explicitly mutating form. Which ones a container
//! supports is decided by the traits it implements, so misuse such as
//! mutating through a view over a temporary is a compile error rather than a
//! runtime one.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use rangekit_core::prelude::*;
//!
//! let values = vec![0, 1, 2, 3];
//! let backward = true;
//! let walked: Vec<_> = reversible(&values, backward).into_iter().copied().collect();
//! assert_eq!(walked, vec![3, 2, 1, 0]);
//!
//! let labels = vec!["zero", "one"];
//! let steps: Vec<_> = synchronized((&values, &labels)).into_iter().collect();
//! assert_eq!(steps, vec![(0, "zero"), (1, "one")]);
//!
//! let mut scores: BTreeMap<&str, u32> = [("ann", 3), ("bob", 5)].into_iter().collect();
//! for (_, score) in key_values_mut(&mut scores) {
//!     *score += 1;
//! }
//! assert_eq!(scores["bob"], 6);
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rustdoc::all
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]
#![forbid(unsafe_code)]

// Foundation layer modules
pub mod foundation {
    //! Foundation layer providing container traits and core abstractions.

    pub mod container;
    pub mod error;
    pub mod iterator;
    pub mod types;
}

// Adapter layer modules
pub mod adapters {
    //! Adapter layer: the reversible, synchronized and key/value views.

    pub mod key_value;
    pub mod reversible;
    pub mod synchronized;
}

// Re-exports for convenience
pub mod prelude {
    //! Common imports for users of the library.
    pub use crate::adapters::{
        key_value::{
            key_values, key_values_mut, key_values_owned, KeyValueIter, KeyValues, KeyValuesMut,
            OwnedKeyValues,
        },
        reversible::{
            reversed, reversible, reversible_mut, reversible_owned, OwnedReversible, Reversible,
            ReversibleMut,
        },
        synchronized::{synchronized, Detach, Synchronized, SynchronizedIter, SynchronizedRefs},
    };
    pub use crate::foundation::{
        container::{Associative, AssociativeMut, Traversable, TraversableMut},
        error::{Error, Result},
        iterator::{IteratorAdapter, IteratorExt, ReversibleIter},
        types::Direction,
    };
}

// Version information
/// The version of the rangekit Core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The minimum supported Rust version.
pub const MSRV: &str = "1.70.0";
