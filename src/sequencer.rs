//! Per-origin planning and aggregation.
//!
//! Runs the selected planner once per origin and totals distance and travel
//! time across every planned segment. Origins are independent: they share
//! only the read-only edge list, and each gets its own distance lookup.
//!
//! Infeasible routing never errors: a dead end degrades to a partial plan
//! and a warning-level event. The only hard failures are structurally
//! invalid counts, rejected before any search begins.

use thiserror::Error;
use tracing::warn;

use crate::duration;
use crate::models::{Edge, PlanSummary};
use crate::planner::{self, Algorithm};

/// Maximum destinations per call, fixed by the visited-set bitmask width.
pub const MAX_DESTINATIONS: usize = 64;

/// Structurally invalid input, rejected before any search begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// `origin_count` was zero.
    #[error("origin count must be positive")]
    NoOrigins,
    /// `destination_count` was zero.
    #[error("destination count must be positive")]
    NoDestinations,
    /// `destination_count` exceeded [`MAX_DESTINATIONS`].
    #[error("destination count {count} exceeds the supported maximum of {max}")]
    TooManyDestinations {
        /// Requested destination count.
        count: usize,
        /// The supported maximum.
        max: usize,
    },
}

/// Plans one route per origin and aggregates the totals.
///
/// Edge order matters and is preserved: it drives the nearest-neighbor
/// tie-breaks and the first-wins lookup keying, so identical input yields
/// byte-identical output.
///
/// # Errors
///
/// Fails only on structurally invalid counts; unreachable destinations and
/// dead ends degrade to partial plans instead.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Edge;
/// use route_sequencer::planner::Algorithm;
/// use route_sequencer::sequencer::optimize;
///
/// let edges = vec![
///     Edge::from_origin(0, 0, 100, "120s"),
///     Edge::between_destinations(0, 1, 50, "45s"),
/// ];
/// let summary = optimize(&edges, 1, 2, Algorithm::NearestNeighbor).unwrap();
/// assert_eq!(summary.total_distance_meters, 150);
/// assert_eq!(summary.total_duration, "165s");
/// ```
pub fn optimize(
    edges: &[Edge],
    origin_count: usize,
    destination_count: usize,
    algorithm: Algorithm,
) -> Result<PlanSummary, InputError> {
    if origin_count == 0 {
        return Err(InputError::NoOrigins);
    }
    if destination_count == 0 {
        return Err(InputError::NoDestinations);
    }
    if destination_count > MAX_DESTINATIONS {
        return Err(InputError::TooManyDestinations {
            count: destination_count,
            max: MAX_DESTINATIONS,
        });
    }

    let mut plans = Vec::with_capacity(origin_count);
    for origin_index in 0..origin_count {
        let plan = match algorithm {
            Algorithm::NearestNeighbor => {
                planner::nearest_neighbor(edges, origin_index, destination_count)
            }
            Algorithm::AStar => planner::astar(edges, origin_index, destination_count),
        };
        if !plan.is_complete(destination_count) {
            warn!(
                origin = origin_index,
                visited = plan.destinations_visited,
                destinations = destination_count,
                "partial route: not every destination is reachable"
            );
        }
        plans.push(plan);
    }

    let segments = || plans.iter().flat_map(|p| p.route.iter());
    let total_distance_meters = segments().map(|e| e.distance_meters).sum();
    let total_seconds: f64 = segments().map(|e| duration::parse_seconds(&e.duration)).sum();

    Ok(PlanSummary {
        edges: edges.to_vec(),
        plans,
        total_distance_meters,
        total_duration: duration::format_seconds(total_seconds),
    })
}
