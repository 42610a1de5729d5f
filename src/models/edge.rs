//! Edge and coordinate types.

use serde::{Deserialize, Serialize};

/// Status value marking an edge as traversable.
///
/// Edges arrive from an external routing service that reports a status per
/// origin/destination pair; anything other than `"OK"` (not found, zero
/// results, ...) means the pair has no usable route.
pub const STATUS_OK: &str = "OK";

/// A WGS84 point.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Coordinate;
///
/// let a = Coordinate::new(52.52, 13.405);
/// let b = Coordinate::new(52.52003, 13.40501);
/// assert!(a.same_place(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components differ by less than 1e-4 degrees,
    /// the tolerance under which two coordinates denote the same physical
    /// place (roughly 10 m at the equator).
    pub fn same_place(&self, other: &Coordinate) -> bool {
        (self.lat - other.lat).abs() < 1e-4 && (self.lng - other.lng).abs() < 1e-4
    }
}

/// Which index space an edge's departure point belongs to.
///
/// Origin and destination indices live in separate spaces, so a bare index on
/// the departure side of an edge is ambiguous: `0` could mean "origin 0" or
/// "destination 0". This discriminator carries the identity explicitly, so
/// planners never have to fall back on coordinate comparison to tell an
/// origin's outbound edges apart from destination-to-destination edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointKind {
    /// The edge departs from one of the configured origins.
    #[default]
    Origin,
    /// The edge departs from one of the destinations.
    Destination,
}

/// A directed, weighted connection between two points.
///
/// Field names serialize in camelCase to match the wire format of the
/// external edge-fetching collaborator. `origin_kind` defaults to
/// [`PointKind::Origin`] when absent, so plain origin-row records need no
/// extra field.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Edge, PointKind};
///
/// let edge = Edge::from_origin(0, 1, 1200, "300s");
/// assert!(edge.is_traversable());
/// assert!(edge.departs_from_origin(0));
/// assert_eq!(edge.origin_kind, PointKind::Origin);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Departure-side index, interpreted per `origin_kind`.
    pub origin_index: usize,
    /// Arrival-side destination index.
    pub destination_index: usize,
    /// Index space of the departure side.
    #[serde(default)]
    pub origin_kind: PointKind,
    /// Human-readable departure address.
    #[serde(default)]
    pub origin_address: String,
    /// Human-readable arrival address.
    #[serde(default)]
    pub destination_address: String,
    /// Edge cost in meters.
    pub distance_meters: u64,
    /// Advisory travel time, textual `"Ns"` form (see [`crate::duration`]).
    #[serde(default)]
    pub duration: String,
    /// Routing service status; only [`STATUS_OK`] edges are traversable.
    pub status: String,
    /// Departure coordinate, when the collaborator supplied one.
    #[serde(default)]
    pub origin_location: Option<Coordinate>,
    /// Arrival coordinate, when the collaborator supplied one.
    #[serde(default)]
    pub destination_location: Option<Coordinate>,
}

impl Edge {
    /// Creates an OK-status edge departing from origin `origin_index`.
    pub fn from_origin(
        origin_index: usize,
        destination_index: usize,
        distance_meters: u64,
        duration: &str,
    ) -> Self {
        Self {
            origin_index,
            destination_index,
            origin_kind: PointKind::Origin,
            origin_address: String::new(),
            destination_address: String::new(),
            distance_meters,
            duration: duration.to_owned(),
            status: STATUS_OK.to_owned(),
            origin_location: None,
            destination_location: None,
        }
    }

    /// Creates an OK-status edge between two destinations.
    pub fn between_destinations(
        from: usize,
        to: usize,
        distance_meters: u64,
        duration: &str,
    ) -> Self {
        Self {
            origin_kind: PointKind::Destination,
            ..Self::from_origin(from, to, distance_meters, duration)
        }
    }

    /// Replaces the status, consuming and returning the edge.
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_owned();
        self
    }

    /// Replaces both addresses, consuming and returning the edge.
    pub fn with_addresses(mut self, origin: &str, destination: &str) -> Self {
        self.origin_address = origin.to_owned();
        self.destination_address = destination.to_owned();
        self
    }

    /// Returns `true` if the routing service marked this edge usable.
    pub fn is_traversable(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Returns `true` if this edge departs from the given origin.
    pub fn departs_from_origin(&self, origin_index: usize) -> bool {
        self.origin_kind == PointKind::Origin && self.origin_index == origin_index
    }
}
