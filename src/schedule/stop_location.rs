use crate::network::Crs;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a stop identifier with its point geometry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopLocation {
    pub stop_id: String,
    pub geometry: Point<f64>,
}

/// keyed collection of stop point geometries for one agency, in a fixed
/// reference frame.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopLocations {
    pub stops: Vec<StopLocation>,
    pub crs: Crs,
}

impl StopLocations {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
