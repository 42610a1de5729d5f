//! Branch-and-bound A* planner.
//!
//! Searches the `(current location, visited set)` state space with a
//! priority queue ordered by `f = g + h`. The heuristic is a lower bound on
//! the remaining cost: the cheapest edge from the current location to any
//! unvisited destination, plus a minimum spanning tree over the unvisited
//! destinations (Prim, treating each pair's cost as the cheaper of its two
//! directed edges).
//!
//! The search does not stop at the first complete state: a completion only
//! tightens the incumbent bound, and the queue keeps draining, because a
//! later-popped state can still yield a cheaper complete route. A cost table
//! keyed by `(location, visited set)` discards dominated re-explorations.
//!
//! Above [`BEAM_THRESHOLD`] destinations the search switches to a beam
//! regime: successors are buffered per generation depth, and when the queue
//! drains a depth level only the best [`BEAM_WIDTH`] buffered states by `f`
//! move on. This bounds memory and time for large instances at the cost of
//! provable optimality.

use std::collections::{BinaryHeap, HashMap};
use std::mem;

use tracing::debug;

use super::{origin_anchor, VisitSet};
use crate::distance::{EdgeLookup, FromKey};
use crate::models::{Edge, OriginPlan};

/// Destination count above which beam limiting kicks in.
pub const BEAM_THRESHOLD: usize = 12;

/// States kept per depth level under beam limiting.
pub const BEAM_WIDTH: usize = 1000;

/// Returns `true` if an instance of this size is planned under beam limiting.
pub fn beam_active(destination_count: usize) -> bool {
    destination_count > BEAM_THRESHOLD
}

/// A partial route under construction.
struct SearchState {
    visited: VisitSet,
    route: Vec<Edge>,
    cost: u64,
    current_key: FromKey,
}

/// Heap entry; min-ordered by `f`, then by insertion sequence so that ties
/// pop in a pinned, deterministic order.
struct QueueEntry {
    f: u64,
    seq: u64,
    state: SearchState,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the minimum (f, seq).
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Plans one origin's route by branch-and-bound A*.
///
/// Returns the cheapest complete route found, or an empty plan when no
/// complete route exists (including the degenerate case of an origin with no
/// outbound edge at all).
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Edge;
/// use route_sequencer::planner::astar;
///
/// let edges = vec![
///     Edge::from_origin(0, 0, 100, "60s"),
///     Edge::from_origin(0, 1, 300, "120s"),
///     Edge::between_destinations(0, 1, 50, "30s"),
///     Edge::between_destinations(1, 0, 400, "240s"),
/// ];
/// let plan = astar(&edges, 0, 2);
/// assert_eq!(plan.total_distance(), 150);
/// ```
pub fn astar(edges: &[Edge], origin_index: usize, destination_count: usize) -> OriginPlan {
    let lookup = EdgeLookup::build(edges, origin_index, destination_count);
    let (origin_address, _) = origin_anchor(edges, origin_index);
    let beam = beam_active(destination_count);

    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();
    // Successors buffered per generation depth, only used under beam.
    let mut pending: Vec<Vec<QueueEntry>> =
        (0..=destination_count).map(|_| Vec::new()).collect();
    let mut best_costs: HashMap<(FromKey, VisitSet), u64> = HashMap::new();
    let mut best_complete: Option<SearchState> = None;
    let mut seq: u64 = 0;
    let mut expanded: u64 = 0;

    let start = SearchState {
        visited: VisitSet::new(),
        route: Vec::new(),
        cost: 0,
        current_key: None,
    };
    let f = heuristic(&lookup, None, VisitSet::new(), destination_count);
    queue.push(QueueEntry { f, seq, state: start });

    loop {
        let Some(entry) = queue.pop() else {
            // Under beam limiting, moving past a drained depth level admits
            // only the best BEAM_WIDTH buffered successors of that level.
            if beam && flush_next_level(&mut pending, &mut queue) {
                continue;
            }
            break;
        };
        let state = entry.state;

        if state.visited.is_full(destination_count) {
            if best_complete.as_ref().map_or(true, |b| state.cost < b.cost) {
                best_complete = Some(state);
            }
            continue;
        }

        let key = (state.current_key, state.visited);
        if best_costs.get(&key).is_some_and(|&seen| seen <= state.cost) {
            continue; // dominated
        }
        best_costs.insert(key, state.cost);
        expanded += 1;

        let bound = best_complete.as_ref().map(|b| b.cost);
        for next in state.visited.unvisited(destination_count) {
            let Some(edge) = lookup.get(state.current_key, next) else {
                continue;
            };
            let cost = state.cost + edge.distance_meters;
            if bound.is_some_and(|b| cost >= b) {
                continue;
            }
            let visited = state.visited.with(next);
            let f = cost + heuristic(&lookup, Some(next), visited, destination_count);
            if bound.is_some_and(|b| f >= b) {
                continue;
            }

            let mut route = state.route.clone();
            route.push(edge.clone());
            seq += 1;
            let entry = QueueEntry {
                f,
                seq,
                state: SearchState {
                    visited,
                    route,
                    cost,
                    current_key: Some(next),
                },
            };
            if beam {
                pending[visited.len()].push(entry);
            } else {
                queue.push(entry);
            }
        }
    }

    debug!(
        origin = origin_index,
        expanded,
        complete = best_complete.is_some(),
        "a* search finished"
    );

    match best_complete {
        Some(state) => OriginPlan {
            origin_index,
            origin_address,
            destinations_visited: state.route.len(),
            route: state.route,
        },
        None => OriginPlan::empty(origin_index, &origin_address),
    }
}

/// Moves the shallowest buffered depth level into the queue, keeping only
/// the best [`BEAM_WIDTH`] states by `(f, seq)`. Returns `false` when no
/// buffered state remains.
fn flush_next_level(pending: &mut [Vec<QueueEntry>], queue: &mut BinaryHeap<QueueEntry>) -> bool {
    let Some(level) = pending.iter_mut().find(|level| !level.is_empty()) else {
        return false;
    };
    let mut entries = mem::take(level);
    entries.sort_by(|a, b| a.f.cmp(&b.f).then_with(|| a.seq.cmp(&b.seq)));
    entries.truncate(BEAM_WIDTH);
    queue.extend(entries);
    true
}

/// Lower bound on the cost of visiting every unvisited destination from the
/// current location.
///
/// Zero when everything is visited; the direct edge cost when one
/// destination remains; otherwise the cheapest outgoing edge into the
/// unvisited set plus an MST over it. Missing edges contribute zero, which
/// keeps the bound an underestimate on sparse lookups.
pub(crate) fn heuristic(
    lookup: &EdgeLookup<'_>,
    current: FromKey,
    visited: VisitSet,
    destination_count: usize,
) -> u64 {
    let remaining: Vec<usize> = visited.unvisited(destination_count).collect();
    match remaining.as_slice() {
        [] => 0,
        [only] => lookup.cost(current, *only).unwrap_or(0),
        _ => {
            let nearest = remaining
                .iter()
                .filter_map(|&d| lookup.cost(current, d))
                .min()
                .unwrap_or(0);
            nearest + mst_cost(lookup, &remaining)
        }
    }
}

/// Prim's algorithm over the given destinations, using the cheaper of the
/// two directed edges between each pair as an undirected approximation.
/// A node with no edge to the grown tree joins at cost zero.
fn mst_cost(lookup: &EdgeLookup<'_>, nodes: &[usize]) -> u64 {
    let mut in_tree = vec![false; nodes.len()];
    in_tree[0] = true;
    let mut total = 0;

    for _ in 1..nodes.len() {
        let mut best: Option<(usize, u64)> = None;
        for (i, &a) in nodes.iter().enumerate() {
            if !in_tree[i] {
                continue;
            }
            for (j, &b) in nodes.iter().enumerate() {
                if in_tree[j] {
                    continue;
                }
                let Some(cost) = pair_cost(lookup, a, b) else {
                    continue;
                };
                if best.map_or(true, |(_, c)| cost < c) {
                    best = Some((j, cost));
                }
            }
        }
        match best {
            Some((j, cost)) => {
                in_tree[j] = true;
                total += cost;
            }
            None => {
                // Disconnected: admit an unreached node for free.
                if let Some(j) = in_tree.iter().position(|&t| !t) {
                    in_tree[j] = true;
                }
            }
        }
    }
    total
}

/// Cheaper of the two directed costs between destinations `a` and `b`.
fn pair_cost(lookup: &EdgeLookup<'_>, a: usize, b: usize) -> Option<u64> {
    match (lookup.cost(Some(a), b), lookup.cost(Some(b), a)) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Edge> {
        vec![
            Edge::from_origin(0, 0, 100, "60s").with_addresses("Origin", "A"),
            Edge::from_origin(0, 1, 300, "180s").with_addresses("Origin", "B"),
            Edge::between_destinations(0, 1, 50, "30s").with_addresses("A", "B"),
            Edge::between_destinations(1, 0, 400, "240s").with_addresses("B", "A"),
        ]
    }

    #[test]
    fn test_triangle_optimal() {
        let plan = astar(&triangle(), 0, 2);
        assert_eq!(plan.destinations_visited, 2);
        assert_eq!(plan.total_distance(), 150);
        assert_eq!(plan.route[0].destination_index, 0);
        assert_eq!(plan.route[1].destination_index, 1);
    }

    #[test]
    fn test_beats_greedy_when_greedy_is_wrong() {
        // Greedy departs to the nearest destination first (O→A = 1) and pays
        // 100 for A→B. The optimal order is O→B→A = 3.
        let edges = vec![
            Edge::from_origin(0, 0, 1, "1s"),
            Edge::from_origin(0, 1, 2, "2s"),
            Edge::between_destinations(0, 1, 100, "100s"),
            Edge::between_destinations(1, 0, 1, "1s"),
        ];
        let plan = astar(&edges, 0, 2);
        assert_eq!(plan.total_distance(), 3);
        assert_eq!(plan.route[0].destination_index, 1);
    }

    #[test]
    fn test_no_outbound_edge_yields_empty_plan() {
        let edges = vec![Edge::between_destinations(0, 1, 10, "1s")];
        let plan = astar(&edges, 0, 2);
        assert_eq!(plan.destinations_visited, 0);
        assert!(plan.route.is_empty());
    }

    #[test]
    fn test_incomplete_graph_yields_empty_plan() {
        // B is reachable from the origin but nothing continues to A, and A
        // is a dead end; no complete route exists.
        let edges = vec![
            Edge::from_origin(0, 1, 10, "1s"),
            Edge::from_origin(0, 0, 10, "1s"),
        ];
        let plan = astar(&edges, 0, 2);
        assert_eq!(plan.destinations_visited, 0);
        assert!(plan.route.is_empty());
    }

    #[test]
    fn test_beam_cutoff_is_strictly_above_threshold() {
        assert!(!beam_active(12));
        assert!(beam_active(13));
    }

    #[test]
    fn test_beam_instance_completes() {
        // 13 destinations on a line: the only complete route is in index
        // order, and beam limiting must still find it.
        let n = 13;
        let mut edges = vec![Edge::from_origin(0, 0, 5, "5s")];
        for d in 0..n - 1 {
            edges.push(Edge::between_destinations(d, d + 1, 7, "7s"));
        }
        let plan = astar(&edges, 0, n);
        assert_eq!(plan.destinations_visited, n);
        assert_eq!(plan.total_distance(), 5 + 7 * (n as u64 - 1));
    }

    #[test]
    fn test_heuristic_single_remaining_is_direct_cost() {
        let edges = triangle();
        let lookup = EdgeLookup::build(&edges, 0, 2);
        let visited = VisitSet::new().with(0);
        assert_eq!(heuristic(&lookup, Some(0), visited, 2), 50);
        // No edge to the last destination: falls back to zero.
        let sparse = vec![Edge::from_origin(0, 0, 100, "60s")];
        let lookup = EdgeLookup::build(&sparse, 0, 2);
        assert_eq!(heuristic(&lookup, Some(0), visited, 2), 0);
    }

    #[test]
    fn test_heuristic_uses_undirected_mst() {
        let edges = triangle();
        let lookup = EdgeLookup::build(&edges, 0, 2);
        // From the origin with both destinations unvisited:
        // nearest = min(100, 300) = 100, MST(A, B) = min(50, 400) = 50.
        assert_eq!(heuristic(&lookup, None, VisitSet::new(), 2), 150);
    }

    fn permute(items: &mut Vec<usize>, k: usize, visit: &mut dyn FnMut(&[usize])) {
        if k == items.len() {
            visit(items);
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permute(items, k + 1, visit);
            items.swap(k, i);
        }
    }

    /// True minimum cost of visiting all of `remaining` from `current`.
    fn true_remaining_cost(
        lookup: &EdgeLookup<'_>,
        current: crate::distance::FromKey,
        remaining: &[usize],
    ) -> Option<u64> {
        let mut best: Option<u64> = None;
        let mut order = remaining.to_vec();
        permute(&mut order, 0, &mut |perm| {
            let Some(mut cost) = lookup.cost(current, perm[0]) else {
                return;
            };
            for pair in perm.windows(2) {
                let Some(step) = lookup.cost(Some(pair[0]), pair[1]) else {
                    return;
                };
                cost += step;
            }
            if best.map_or(true, |b| cost < b) {
                best = Some(cost);
            }
        });
        best
    }

    #[test]
    fn test_heuristic_never_overestimates() {
        // Complete asymmetric 4-destination graph with fixed uneven costs;
        // check every reachable (current, visited) state exhaustively.
        let n = 4;
        let mut edges = Vec::new();
        for d in 0..n {
            edges.push(Edge::from_origin(0, d, (17 * d as u64 + 23) % 40 + 1, "1s"));
        }
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let cost = (13 * i as u64 + 7 * j as u64 + 5) % 60 + 1;
                    edges.push(Edge::between_destinations(i, j, cost, "1s"));
                }
            }
        }
        let lookup = EdgeLookup::build(&edges, 0, n);

        for mask in 0u64..1 << n {
            let mut visited = VisitSet::new();
            for d in 0..n {
                if mask >> d & 1 == 1 {
                    visited = visited.with(d);
                }
            }
            let remaining: Vec<usize> = visited.unvisited(n).collect();
            if remaining.is_empty() {
                continue;
            }
            let currents: Vec<crate::distance::FromKey> = if visited.is_empty() {
                vec![None]
            } else {
                (0..n).filter(|&d| visited.contains(d)).map(Some).collect()
            };
            for current in currents {
                let h = heuristic(&lookup, current, visited, n);
                let truth = true_remaining_cost(&lookup, current, &remaining)
                    .expect("complete graph always has a continuation");
                assert!(h <= truth, "h = {h} overestimates true cost {truth}");
            }
        }
    }

    #[test]
    fn test_heuristic_admissible_on_triangle() {
        // On the triangle the true optimum from the origin is 150, which the
        // heuristic matches exactly and never exceeds.
        let edges = triangle();
        let lookup = EdgeLookup::build(&edges, 0, 2);
        assert!(heuristic(&lookup, None, VisitSet::new(), 2) <= 150);
    }
}
