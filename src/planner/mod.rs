//! Per-origin route planners.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor sequencing, O(n·e)
//! - [`astar`] — Branch-and-bound A* with an MST lower bound and a beam
//!   fallback for large instances

mod astar;
mod nearest_neighbor;
mod visit_set;

pub use astar::{astar, beam_active, BEAM_THRESHOLD, BEAM_WIDTH};
pub use nearest_neighbor::nearest_neighbor;
pub use visit_set::VisitSet;

use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Edge};

/// Planner selection.
///
/// Deserializing any unrecognized name falls back to
/// [`Algorithm::NearestNeighbor`], which is also the default.
///
/// # Examples
///
/// ```
/// use route_sequencer::planner::Algorithm;
///
/// assert_eq!(Algorithm::from_name("AStar"), Algorithm::AStar);
/// assert_eq!(Algorithm::from_name("simulated-annealing"), Algorithm::NearestNeighbor);
/// assert_eq!(Algorithm::default(), Algorithm::NearestNeighbor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Algorithm {
    /// Greedy nearest-neighbor sequencing.
    #[default]
    NearestNeighbor,
    /// Branch-and-bound A* with beam fallback.
    AStar,
}

impl Algorithm {
    /// Resolves an algorithm name, falling back to nearest-neighbor for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "AStar" | "astar" | "a-star" => Self::AStar,
            _ => Self::NearestNeighbor,
        }
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Address and coordinate of the designated origin, taken from its first
/// outbound edge in input order. Empty when the origin has no edge at all.
pub(crate) fn origin_anchor(edges: &[Edge], origin_index: usize) -> (String, Option<Coordinate>) {
    edges
        .iter()
        .find(|e| e.departs_from_origin(origin_index))
        .map_or((String::new(), None), |e| {
            (e.origin_address.clone(), e.origin_location)
        })
}
