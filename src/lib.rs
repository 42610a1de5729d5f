//! # route-sequencer
//!
//! Per-origin route sequencing over a precomputed directed edge list: for
//! each origin, find the shortest-total-distance order in which to visit
//! every destination exactly once (a Hamiltonian path, no return leg).
//!
//! Edges arrive precomputed from an external routing service; this crate
//! neither geocodes nor computes travel costs. Two planners are provided: a
//! greedy nearest-neighbor baseline and a branch-and-bound A* search with an
//! MST-based lower bound, which degrades to beam search on large instances.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Edge, Coordinate, OriginPlan, PlanSummary)
//! - [`duration`] — Textual `"Ns"` seconds codec
//! - [`distance`] — Per-origin keyed edge lookup
//! - [`planner`] — Nearest-neighbor and A* planners
//! - [`sequencer`] — Per-origin orchestration, validation, and aggregation
//!
//! ## Example
//!
//! ```
//! use route_sequencer::models::Edge;
//! use route_sequencer::planner::Algorithm;
//! use route_sequencer::sequencer::optimize;
//!
//! let edges = vec![
//!     Edge::from_origin(0, 0, 100, "60s"),
//!     Edge::from_origin(0, 1, 300, "180s"),
//!     Edge::between_destinations(0, 1, 50, "30s"),
//!     Edge::between_destinations(1, 0, 400, "240s"),
//! ];
//! let summary = optimize(&edges, 1, 2, Algorithm::AStar).unwrap();
//! assert_eq!(summary.total_distance_meters, 150);
//! ```

pub mod distance;
pub mod duration;
pub mod models;
pub mod planner;
pub mod sequencer;
