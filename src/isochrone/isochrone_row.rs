use crate::network::Crs;
use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

/// one accessibility polygon: everything reachable within `trip_time`
/// minutes of any of the requested center nodes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IsochroneRow {
    pub trip_time: u32,
    pub geometry: MultiPolygon<f64>,
}

/// isochrone polygons grouped per travel-time threshold, sorted descending
/// by threshold so that larger areas draw underneath smaller ones.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IsochroneTable {
    pub rows: Vec<IsochroneRow>,
    pub crs: Crs,
}

impl IsochroneTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
