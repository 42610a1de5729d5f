//! Distance lookup over the flat edge list.
//!
//! Provides a sparse per-origin keyed lookup for the planners.

mod lookup;

pub use lookup::{EdgeLookup, FromKey};
