//! Nearest-neighbor greedy planner.
//!
//! Starting at the origin, repeatedly takes the cheapest traversable edge to
//! an unvisited destination until every destination is visited or no
//! candidate remains (a dead end, reported as a partial plan).
//!
//! Ties on distance are broken by input order: the first minimum encountered
//! while scanning the edge list wins. The scan works directly on the raw edge
//! slice rather than the keyed lookup so that this tie-break is exactly the
//! input order, not a hash-map iteration order.
//!
//! # Complexity
//!
//! O(n·e) where n = destination count and e = number of edges.

use super::{origin_anchor, VisitSet};
use crate::models::{Edge, OriginPlan, PointKind};

/// Plans one origin's route greedily.
///
/// Each emitted segment has its departure side relabeled to the current
/// location's address and coordinate, so consecutive segments chain even
/// though the underlying edge list stores them by raw index.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Edge;
/// use route_sequencer::planner::nearest_neighbor;
///
/// let edges = vec![
///     Edge::from_origin(0, 0, 100, "60s"),
///     Edge::from_origin(0, 1, 300, "120s"),
///     Edge::between_destinations(0, 1, 50, "30s"),
///     Edge::between_destinations(1, 0, 400, "240s"),
/// ];
/// let plan = nearest_neighbor(&edges, 0, 2);
/// assert_eq!(plan.destinations_visited, 2);
/// assert_eq!(plan.total_distance(), 150);
/// ```
pub fn nearest_neighbor(edges: &[Edge], origin_index: usize, destination_count: usize) -> OriginPlan {
    let (origin_address, origin_location) = origin_anchor(edges, origin_index);

    let mut plan = OriginPlan::empty(origin_index, &origin_address);
    let mut visited = VisitSet::new();
    let mut current_key: Option<usize> = None;
    let mut current_address = origin_address;
    let mut current_location = origin_location;

    while !visited.is_full(destination_count) {
        let mut best: Option<&Edge> = None;
        for edge in edges {
            if !edge.is_traversable()
                || edge.destination_index >= destination_count
                || visited.contains(edge.destination_index)
            {
                continue;
            }
            let at_current = match current_key {
                None => edge.departs_from_origin(origin_index),
                Some(key) => {
                    edge.origin_kind == PointKind::Destination && edge.origin_index == key
                }
            };
            if !at_current {
                continue;
            }
            // Strict < keeps the first minimum found on ties.
            if best.map_or(true, |b| edge.distance_meters < b.distance_meters) {
                best = Some(edge);
            }
        }

        let Some(edge) = best else {
            break; // dead end: partial plan
        };

        let mut segment = edge.clone();
        segment.origin_address = current_address.clone();
        segment.origin_location = current_location;

        current_key = Some(edge.destination_index);
        current_address = edge.destination_address.clone();
        current_location = edge.destination_location;
        visited = visited.with(edge.destination_index);
        plan.push_segment(segment);
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn triangle() -> Vec<Edge> {
        vec![
            Edge::from_origin(0, 0, 100, "60s").with_addresses("Origin", "A"),
            Edge::from_origin(0, 1, 300, "180s").with_addresses("Origin", "B"),
            Edge::between_destinations(0, 1, 50, "30s").with_addresses("A", "B"),
            Edge::between_destinations(1, 0, 400, "240s").with_addresses("B", "A"),
        ]
    }

    #[test]
    fn test_triangle_route() {
        let plan = nearest_neighbor(&triangle(), 0, 2);
        assert_eq!(plan.destinations_visited, 2);
        // Origin→A (100) then A→B (50).
        assert_eq!(plan.route[0].destination_index, 0);
        assert_eq!(plan.route[1].destination_index, 1);
        assert_eq!(plan.total_distance(), 150);
    }

    #[test]
    fn test_segments_relabeled_to_chain() {
        let mut edges = triangle();
        edges[0].destination_location = Some(Coordinate::new(1.0, 1.0));
        let plan = nearest_neighbor(&edges, 0, 2);
        assert_eq!(plan.route[0].origin_address, "Origin");
        // The second segment departs from where the first arrived.
        assert_eq!(plan.route[1].origin_address, "A");
        assert_eq!(plan.route[1].origin_location, Some(Coordinate::new(1.0, 1.0)));
    }

    #[test]
    fn test_dead_end_reports_partial() {
        let edges = vec![
            Edge::from_origin(0, 0, 100, "60s").with_status("NOT_FOUND"),
            Edge::from_origin(0, 1, 300, "180s").with_status("NOT_FOUND"),
        ];
        let plan = nearest_neighbor(&edges, 0, 2);
        assert_eq!(plan.destinations_visited, 0);
        assert!(plan.route.is_empty());
    }

    #[test]
    fn test_dead_end_mid_route() {
        // Origin reaches A but nothing departs from A.
        let edges = vec![
            Edge::from_origin(0, 0, 100, "60s"),
            Edge::from_origin(0, 1, 300, "180s"),
        ];
        let plan = nearest_neighbor(&edges, 0, 2);
        // Greedy takes Origin→A (100) and then has no A-outbound edge; the
        // remaining Origin→B edge no longer matches the current location.
        assert_eq!(plan.destinations_visited, 1);
        assert_eq!(plan.route[0].destination_index, 0);
    }

    #[test]
    fn test_tie_broken_by_input_order() {
        let edges = vec![
            Edge::from_origin(0, 1, 100, "60s"),
            Edge::from_origin(0, 0, 100, "60s"),
        ];
        let plan = nearest_neighbor(&edges, 0, 2);
        assert_eq!(plan.route[0].destination_index, 1);
    }

    #[test]
    fn test_ignores_other_origins_edges() {
        let edges = vec![
            Edge::from_origin(1, 0, 10, "1s"),
            Edge::from_origin(0, 0, 100, "60s"),
        ];
        let plan = nearest_neighbor(&edges, 0, 1);
        assert_eq!(plan.total_distance(), 100);
    }

    #[test]
    fn test_same_numeric_index_different_kind_not_confused() {
        // While at the origin (key 0), a destination-to-destination edge
        // departing from destination 0 must not be a candidate.
        let edges = vec![
            Edge::between_destinations(0, 1, 1, "1s"),
            Edge::from_origin(0, 1, 100, "60s"),
        ];
        let plan = nearest_neighbor(&edges, 0, 2);
        assert_eq!(plan.route[0].distance_meters, 100);
    }
}
