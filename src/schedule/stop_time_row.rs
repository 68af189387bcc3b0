use serde::{Deserialize, Serialize};

/// a row of a GTFS-style `stop_times.txt` table. the arrival time is kept
/// as text here and parsed during graph construction, so a malformed value
/// only fails the operation that consumes it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopTimeRow {
    pub trip_id: String,
    pub stop_id: String,
    pub arrival_time: String,
}
