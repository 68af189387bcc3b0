use crate::network::{Crs, TransitGraph};
use crate::schedule::{ScheduleError, StopRow, StopTimeRow};
use chrono::NaiveTime;
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub const STOPS_FILE: &str = "stops.txt";
pub const STOP_TIMES_FILE: &str = "stop_times.txt";

const ARRIVAL_TIME_FORMAT: &str = "%H:%M:%S";

pub fn read_stop_rows(path: &Path) -> Result<Vec<StopRow>, ScheduleError> {
    read_rows::<StopRow>(path)
}

pub fn read_stop_time_rows(path: &Path) -> Result<Vec<StopTimeRow>, ScheduleError> {
    read_rows::<StopTimeRow>(path)
}

fn read_rows<R: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<R>, ScheduleError> {
    let filename = path.to_string_lossy().to_string();
    let reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| ScheduleError::FeedReadError(filename.clone(), e.to_string()))?;
    reader
        .into_deserialize::<R>()
        .map(|row| row.map_err(|e| ScheduleError::MalformedRowError(filename.clone(), e.to_string())))
        .collect()
}

/// keeps only the first row per stop_id across the whole table, in file
/// row order. the scope is deliberately dataset-wide rather than per-trip:
/// a stop revisited by a later trip contributes no further rows. the seen
/// set is created per invocation by the caller and returned alongside the
/// surviving rows.
pub fn first_occurrence_filter(
    rows: Vec<StopTimeRow>,
    mut seen: HashSet<String>,
) -> (Vec<StopTimeRow>, HashSet<String>) {
    let filtered = rows
        .into_iter()
        .filter(|row| seen.insert(row.stop_id.clone()))
        .collect();
    (filtered, seen)
}

/// collapses a stops table into a position lookup. the first row per
/// stop_id wins, matching the first-occurrence rule of the stop-times
/// filter.
pub fn stop_positions(rows: &[StopRow]) -> HashMap<String, (f64, f64)> {
    let mut positions = HashMap::new();
    for row in rows {
        positions
            .entry(row.stop_id.clone())
            .or_insert((row.stop_lon, row.stop_lat));
    }
    positions
}

/// builds an undirected transit graph from (already filtered) stop-time
/// rows. trips are walked in order of first appearance; each consecutive
/// pair of rows within a trip yields an edge weighted by the absolute
/// arrival-time difference in minutes, computed with same-day arithmetic
/// (an overnight trip wraps and under-counts; feeds here do not span
/// midnight). node positions come from the stops table and a stop-times
/// stop absent from it is an error.
pub fn build_trip_graph(
    rows: &[StopTimeRow],
    positions: &HashMap<String, (f64, f64)>,
) -> Result<TransitGraph, ScheduleError> {
    let mut graph = TransitGraph::new(Crs::Epsg4326);

    let mut trip_order: Vec<&str> = vec![];
    let mut trips: HashMap<&str, Vec<&StopTimeRow>> = HashMap::new();
    for row in rows {
        let entry = trips.entry(row.trip_id.as_str()).or_default();
        if entry.is_empty() {
            trip_order.push(row.trip_id.as_str());
        }
        entry.push(row);
    }

    for trip_id in trip_order {
        let trip_rows = &trips[trip_id];
        let first = trip_rows[0];
        let mut last_time = parse_arrival_time(&first.arrival_time)?;
        let (x, y) = stop_position(positions, &first.stop_id)?;
        let mut last_node = graph.add_stop(&first.stop_id, x, y);

        for row in trip_rows[1..].iter() {
            let time = parse_arrival_time(&row.arrival_time)?;
            let minutes = (time - last_time).num_seconds().abs() as f64 / 60.0;
            let (x, y) = stop_position(positions, &row.stop_id)?;
            let node = graph.add_stop(&row.stop_id, x, y);
            graph.upsert_edge(last_node, node, minutes);
            last_time = time;
            last_node = node;
        }
    }
    Ok(graph)
}

fn parse_arrival_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, ARRIVAL_TIME_FORMAT)
        .map_err(|_| ScheduleError::ArrivalTimeFormatError(value.to_string()))
}

fn stop_position(
    positions: &HashMap<String, (f64, f64)>,
    stop_id: &str,
) -> Result<(f64, f64), ScheduleError> {
    positions
        .get(stop_id)
        .copied()
        .ok_or_else(|| ScheduleError::MissingStopLocationError(stop_id.to_string()))
}
