//! Domain model types for route sequencing.
//!
//! Provides the core records: directed weighted edges with traversal status,
//! coordinates with a same-place tolerance, per-origin plans, and the
//! aggregate summary returned to the caller.

mod edge;
mod plan;

pub use edge::{Coordinate, Edge, PointKind, STATUS_OK};
pub use plan::{OriginPlan, PlanSummary};
