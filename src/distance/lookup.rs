//! Sparse keyed edge lookup.

use std::collections::HashMap;

use crate::models::{Edge, PointKind};

/// Departure-side key: `None` means "at the designated origin itself",
/// `Some(d)` means "at destination `d`".
pub type FromKey = Option<usize>;

/// An O(1) map from `(departure point, destination)` to the edge connecting
/// them, built per origin from the flat input edge list.
///
/// Only traversable (`"OK"`) edges are kept. When several input edges map to
/// the same key, the first in input order wins and later duplicates are
/// silently dropped; this is a deliberate tie-break, not a merge. Lookups on
/// absent keys return `None` and the caller treats that as "no edge".
///
/// # Examples
///
/// ```
/// use route_sequencer::distance::EdgeLookup;
/// use route_sequencer::models::Edge;
///
/// let edges = vec![
///     Edge::from_origin(0, 0, 100, "10s"),
///     Edge::between_destinations(0, 1, 50, "5s"),
/// ];
/// let lookup = EdgeLookup::build(&edges, 0, 2);
/// assert_eq!(lookup.cost(None, 0), Some(100));
/// assert_eq!(lookup.cost(Some(0), 1), Some(50));
/// assert_eq!(lookup.cost(None, 1), None);
/// ```
#[derive(Debug)]
pub struct EdgeLookup<'a> {
    map: HashMap<(FromKey, usize), &'a Edge>,
}

impl<'a> EdgeLookup<'a> {
    /// Builds the lookup for one designated origin.
    ///
    /// Edges departing from other origins, non-traversable edges, and edges
    /// whose indices fall outside `destination_count` are skipped.
    pub fn build(edges: &'a [Edge], origin_index: usize, destination_count: usize) -> Self {
        let mut map = HashMap::new();
        for edge in edges {
            if !edge.is_traversable() || edge.destination_index >= destination_count {
                continue;
            }
            let from = match edge.origin_kind {
                PointKind::Origin => {
                    if edge.origin_index != origin_index {
                        continue;
                    }
                    None
                }
                PointKind::Destination => {
                    if edge.origin_index >= destination_count {
                        continue;
                    }
                    Some(edge.origin_index)
                }
            };
            map.entry((from, edge.destination_index)).or_insert(edge);
        }
        Self { map }
    }

    /// Returns the edge from `from` to destination `to`, if one exists.
    pub fn get(&self, from: FromKey, to: usize) -> Option<&'a Edge> {
        self.map.get(&(from, to)).copied()
    }

    /// Returns the edge cost in meters from `from` to destination `to`.
    pub fn cost(&self, from: FromKey, to: usize) -> Option<u64> {
        self.get(from, to).map(|e| e.distance_meters)
    }

    /// Number of distinct keyed edges.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no usable edge was found for this origin.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
