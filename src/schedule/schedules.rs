use crate::cache::{DownloadCache, Fetcher};
use crate::network::{Crs, TransitGraph};
use crate::schedule::schedule_ops::{self, STOPS_FILE, STOP_TIMES_FILE};
use crate::schedule::{ScheduleError, StopLocation, StopLocations};
use geo::Point;
use std::collections::{HashMap, HashSet};

/// loader for per-agency schedule feeds. construction downloads every
/// source in the manifest (respecting cache freshness); the accessors then
/// read the cached tables on demand.
pub struct Schedules<F: Fetcher> {
    sources: HashMap<String, String>,
    cache: DownloadCache<F>,
}

impl<F: Fetcher> Schedules<F> {
    pub fn new(
        sources: HashMap<String, String>,
        mut cache: DownloadCache<F>,
    ) -> Result<Schedules<F>, ScheduleError> {
        cache.download(&sources)?;
        Ok(Schedules { sources, cache })
    }

    /// point geometries for every stop of one agency, in EPSG:4326.
    pub fn get_stop_locations(&self, name: &str) -> Result<StopLocations, ScheduleError> {
        let rows = schedule_ops::read_stop_rows(&self.cache.get_path(&[name, STOPS_FILE]))?;
        let stops = rows
            .into_iter()
            .map(|row| StopLocation {
                stop_id: row.stop_id,
                geometry: Point::new(row.stop_lon, row.stop_lat),
            })
            .collect();
        Ok(StopLocations {
            stops,
            crs: Crs::Epsg4326,
        })
    }

    pub fn get_all_stop_locations(&self) -> Result<HashMap<String, StopLocations>, ScheduleError> {
        self.sources
            .keys()
            .map(|name| Ok((name.clone(), self.get_stop_locations(name)?)))
            .collect()
    }

    /// the transit graph of one agency: stops as nodes, consecutive-trip
    /// travel times in minutes as undirected edge weights.
    pub fn get_trip_graph(&self, name: &str) -> Result<TransitGraph, ScheduleError> {
        let stop_times =
            schedule_ops::read_stop_time_rows(&self.cache.get_path(&[name, STOP_TIMES_FILE]))?;
        let (filtered, _seen) = schedule_ops::first_occurrence_filter(stop_times, HashSet::new());
        let stops = schedule_ops::read_stop_rows(&self.cache.get_path(&[name, STOPS_FILE]))?;
        let positions = schedule_ops::stop_positions(&stops);
        schedule_ops::build_trip_graph(&filtered, &positions)
    }

    pub fn get_all_trip_graphs(&self) -> Result<HashMap<String, TransitGraph>, ScheduleError> {
        self.sources
            .keys()
            .map(|name| Ok((name.clone(), self.get_trip_graph(name)?)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cache::CacheError;
    use crate::test_ops;
    use std::path::Path;

    /// serves a canned zip archive for every requested source.
    struct ZipFetcher {
        payload: Vec<u8>,
    }

    impl Fetcher for ZipFetcher {
        fn fetch(&self, _url: &str, dest: &Path) -> Result<(), CacheError> {
            std::fs::write(dest, &self.payload)?;
            Ok(())
        }
    }

    fn feed_fixture() -> Vec<u8> {
        test_ops::zip_payload(&[
            (
                "stops.txt",
                "stop_id,stop_lon,stop_lat\ns1,-3.70,40.42\ns2,-3.68,40.43\ns3,-3.66,40.44\n",
            ),
            (
                "stop_times.txt",
                "trip_id,stop_id,arrival_time\nt1,s1,08:00:00\nt1,s2,08:05:00\nt1,s3,08:12:00\n",
            ),
        ])
    }

    fn open_schedules(label: &str) -> (Schedules<ZipFetcher>, std::path::PathBuf) {
        let dir = test_ops::scratch_dir(label);
        let cache = DownloadCache::open(
            dir.clone(),
            ZipFetcher {
                payload: feed_fixture(),
            },
        )
        .expect("open should succeed");
        let sources = HashMap::from([(
            "metro".to_string(),
            "https://example.com/metro".to_string(),
        )]);
        let schedules = Schedules::new(sources, cache).expect("construction should download");
        (schedules, dir)
    }

    #[test]
    fn test_stop_locations_from_cached_feed() {
        let (schedules, dir) = open_schedules("schedules-stops");
        let locations = schedules
            .get_stop_locations("metro")
            .expect("should read stops");
        assert_eq!(locations.len(), 3);
        assert_eq!(locations.crs, Crs::Epsg4326);
        let s1 = &locations.stops[0];
        assert_eq!(s1.stop_id, "s1");
        assert_eq!(s1.geometry, Point::new(-3.70, 40.42));
        test_ops::remove_scratch_dir(&dir);
    }

    #[test]
    fn test_trip_graph_from_cached_feed() {
        let (schedules, dir) = open_schedules("schedules-graph");
        let graph = schedules.get_trip_graph("metro").expect("should build");
        assert_eq!(graph.stop_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let a = graph.node_index("s1").expect("s1 node");
        let b = graph.node_index("s2").expect("s2 node");
        let edge = graph.graph.find_edge(a, b).expect("edge should exist");
        assert_eq!(graph.graph[edge].time, 5.0);
        test_ops::remove_scratch_dir(&dir);
    }

    #[test]
    fn test_all_accessors_cover_every_source() {
        let (schedules, dir) = open_schedules("schedules-all");
        let locations = schedules.get_all_stop_locations().expect("should read");
        let graphs = schedules.get_all_trip_graphs().expect("should build");
        assert_eq!(locations.len(), 1);
        assert_eq!(graphs.len(), 1);
        assert!(graphs.contains_key("metro"));
        test_ops::remove_scratch_dir(&dir);
    }
}
