//! Routing input locations.
//!
//! A [`Location`] is what the outside world hands the routing engine: a
//! coordinate the route must pass through, plus routing intent and whatever
//! address data came with it. The grid index never reads this type; it only
//! exists so query callers can attach results back to the record they
//! searched for, typically via [`Location::search_bounds`].

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::point::Point2D;

/// What kind of stop a location is.
///
/// Determines whether a route may double back through the point to find
/// the most efficient path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopType {
    /// A hard stop; the route ends a leg here and may not revisit.
    #[default]
    Break,
    /// A via point the route passes through and may revisit.
    Through,
}

/// A start, middle, destination or via point through which the route must
/// pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Coordinates of the location as used for searching the graph.
    pub latlng: Point2D,
    /// Type of location for routing.
    pub stop_type: StopType,

    /// Free-form name ("Zoo", "Main St 5", ...).
    pub name: Option<String>,
    /// Street component of the address.
    pub street: Option<String>,
    /// City component of the address.
    pub city: Option<String>,
    /// State or region component of the address.
    pub state: Option<String>,
    /// Postal code component of the address.
    pub postal_code: Option<String>,
    /// Country component of the address.
    pub country: Option<String>,

    /// Preferred heading at the location, degrees clockwise from north.
    pub heading: Option<u32>,
    /// Id of the way the location snapped to, when already known.
    pub way_id: Option<u64>,
}

impl Location {
    /// Create a location at the given coordinate with [`StopType::Break`].
    pub fn new(latlng: Point2D) -> Self {
        Self {
            latlng,
            ..Default::default()
        }
    }

    /// Create a location with an explicit stop type.
    pub fn with_stop_type(latlng: Point2D, stop_type: StopType) -> Self {
        Self {
            latlng,
            stop_type,
            ..Default::default()
        }
    }

    /// The rectangle to hand to a grid query when searching for edges
    /// near this location.
    ///
    /// `radius` is in the same planar units as the coordinate.
    pub fn search_bounds(&self, radius: f32) -> Bounds {
        Bounds::from_point(self.latlng).expand(radius)
    }
}
