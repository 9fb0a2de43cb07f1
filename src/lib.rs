//! A bidirectional map: a one-to-one association between keys and values, searchable in both
//! directions.
//!
//! ```
//! use bimap::BiMap;
//!
//! let mut tokens = BiMap::new();
//! tokens.insert("+", 1);
//! tokens.insert("-", 2);
//!
//! assert_eq!(tokens.get("+"), Some(&1));
//! assert_eq!(tokens.get_inverse(&2), Some(&"-"));
//! ```
//!
//! The container does no synchronization. Share it across threads behind a lock that covers
//! every sequence of calls that has to look atomic: a single `insert` touches both sides.

pub mod bimap;

pub use crate::bimap::{BiMap, IntoIter, Iter, Keys, Values};
