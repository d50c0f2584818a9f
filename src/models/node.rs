//! Geographic node type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point of interest: a caller identifier and a WGS84 position in degrees.
///
/// # Examples
///
/// ```
/// use u_aco::models::Node;
///
/// let n = Node::new(3, 51.4988, -0.1749).unwrap();
/// assert_eq!(n.id(), 3);
/// assert_eq!(n.lat(), 51.4988);
///
/// assert!(Node::new(0, 91.0, 0.0).is_err());
/// assert!(Node::new(0, f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    id: usize,
    lat: f64,
    lon: f64,
}

/// Unchecked wire form of [`Node`].
#[derive(Deserialize)]
struct RawNode {
    id: usize,
    lat: f64,
    lon: f64,
}

impl TryFrom<RawNode> for Node {
    type Error = Error;

    fn try_from(raw: RawNode) -> Result<Self> {
        Node::new(raw.id, raw.lat, raw.lon)
    }
}

impl Node {
    /// Creates a node.
    ///
    /// Fails if latitude is outside [-90, 90], longitude outside
    /// [-180, 180], or either is non-finite.
    pub fn new(id: usize, lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::invalid_input(format!(
                "node {id}: latitude {lat} outside [-90, 90]"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::invalid_input(format!(
                "node {id}: longitude {lon} outside [-180, 180]"
            )));
        }
        Ok(Self { id, lat, lon })
    }

    /// Builds nodes from `(lat, lon)` pairs, numbering them 0..N-1 in order.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Vec<Self>> {
        coordinates
            .iter()
            .enumerate()
            .map(|(id, &(lat, lon))| Self::new(id, lat, lon))
            .collect()
    }

    /// Caller identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `(lat, lon)` in degrees.
    pub fn position(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Great-circle distance to another node, in kilometers.
    pub fn distance_to(&self, other: &Node) -> f64 {
        crate::distance::haversine_km(self.position(), other.position())
    }
}
