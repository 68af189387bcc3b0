use serde::{Deserialize, Serialize};

/// a row of a GTFS-style `stops.txt` table. only the identifier and the
/// geographic position are consumed; any further columns are ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopRow {
    pub stop_id: String,
    pub stop_lon: f64,
    pub stop_lat: f64,
}
