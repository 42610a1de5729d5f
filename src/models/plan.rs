//! Planned route and aggregate summary types.

use serde::{Deserialize, Serialize};

use super::Edge;

/// The planned visiting order for a single origin.
///
/// `route` holds one segment per visited destination, in visitation order.
/// `destinations_visited` may be less than the requested destination count
/// when the planner hit a dead end; that is a degraded result, not an error.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Edge, OriginPlan};
///
/// let mut plan = OriginPlan::empty(0, "Depot");
/// plan.push_segment(Edge::from_origin(0, 1, 150, "60s"));
/// assert_eq!(plan.destinations_visited, 1);
/// assert_eq!(plan.total_distance(), 150);
/// assert!(plan.is_complete(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginPlan {
    /// Index of the origin this plan belongs to.
    pub origin_index: usize,
    /// Human-readable address of the origin.
    pub origin_address: String,
    /// Route segments in visitation order.
    pub route: Vec<Edge>,
    /// Number of distinct destinations reached.
    pub destinations_visited: usize,
}

impl OriginPlan {
    /// Creates a plan with no segments.
    pub fn empty(origin_index: usize, origin_address: &str) -> Self {
        Self {
            origin_index,
            origin_address: origin_address.to_owned(),
            route: Vec::new(),
            destinations_visited: 0,
        }
    }

    /// Appends a segment and counts its destination as visited.
    pub fn push_segment(&mut self, segment: Edge) {
        self.route.push(segment);
        self.destinations_visited += 1;
    }

    /// Sum of segment distances in meters.
    pub fn total_distance(&self) -> u64 {
        self.route.iter().map(|e| e.distance_meters).sum()
    }

    /// Returns `true` if every destination was reached.
    pub fn is_complete(&self, destination_count: usize) -> bool {
        self.destinations_visited == destination_count
    }
}

/// Aggregate result of one optimization call.
///
/// Echoes the input edges for the presentation layer, carries one
/// [`OriginPlan`] per origin, and totals distance and duration across every
/// segment of every plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// The input edges, unmodified and in input order.
    pub edges: Vec<Edge>,
    /// One plan per origin, in origin-index order.
    pub plans: Vec<OriginPlan>,
    /// Sum of `distance_meters` over every planned segment.
    pub total_distance_meters: u64,
    /// Total planned travel time, formatted as `"Ns"`.
    pub total_duration: String,
}
