use crate::algorithm::{reachable_subgraph, Buffer};
use crate::isochrone::{IsochroneError, IsochroneRow, IsochroneTable};
use crate::network::StreetNetwork;
use geo::{unary_union, LineString, MultiPolygon, Polygon};
use itertools::Itertools;
use petgraph::graph::NodeIndex;
use rayon::prelude::*;

/// fixed size of the isochrone worker pool.
pub const ISOCHRONE_WORKERS: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct IsochroneOptions {
    /// buffer radius around reachable edges, in network CRS units.
    pub buffer: f64,
}

impl Default for IsochroneOptions {
    fn default() -> Self {
        IsochroneOptions { buffer: 25.0 }
    }
}

/// computes one isochrone polygon per requested travel-time threshold.
///
/// every (threshold, center) pair becomes a task on a dedicated pool of
/// [`ISOCHRONE_WORKERS`] threads: extract the subgraph reachable within
/// the threshold, buffer its edge geometries, and union the buffers into
/// a polygon (interior rings are discarded). the pool joins before
/// results are re-sorted, so no ordering is assumed from the parallel
/// stage; polygons for the same threshold are then unioned across center
/// nodes and rows are returned sorted descending by threshold, one row
/// per distinct value. a failing task fails the whole batch.
pub fn make_isochrones(
    network: &StreetNetwork,
    trip_times: &[u32],
    center_nodes: &[NodeIndex],
    options: &IsochroneOptions,
) -> Result<IsochroneTable, IsochroneError> {
    let tasks = trip_times
        .iter()
        .flat_map(|trip_time| center_nodes.iter().map(move |center| (*trip_time, *center)))
        .collect::<Vec<_>>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ISOCHRONE_WORKERS)
        .build()
        .map_err(|e| IsochroneError::WorkerPoolError(e.to_string()))?;
    let results: Vec<(u32, MultiPolygon<f64>)> = pool.install(|| {
        tasks
            .par_iter()
            .map(|(trip_time, center)| isochrone_task(network, *trip_time, *center, options.buffer))
            .collect::<Result<Vec<_>, IsochroneError>>()
    })?;

    let mut rows = results
        .into_iter()
        .into_group_map()
        .into_iter()
        .map(|(trip_time, geometries)| {
            let polygons = geometries
                .into_iter()
                .flat_map(|geometry| geometry.0)
                .collect::<Vec<_>>();
            IsochroneRow {
                trip_time,
                geometry: union_all(&polygons),
            }
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| b.trip_time.cmp(&a.trip_time));

    Ok(IsochroneTable {
        rows,
        crs: network.crs,
    })
}

fn isochrone_task(
    network: &StreetNetwork,
    trip_time: u32,
    center: NodeIndex,
    buffer: f64,
) -> Result<(u32, MultiPolygon<f64>), IsochroneError> {
    let subgraph = reachable_subgraph(network, center, trip_time as f64)?;
    if subgraph.is_empty() {
        // isolated center: emit an empty polygon rather than failing
        log::debug!(
            "empty reachable subgraph for center {} at {} minutes",
            center.index(),
            trip_time
        );
        return Ok((trip_time, MultiPolygon::new(vec![])));
    }

    let mut buffered: Vec<Polygon<f64>> = vec![];
    for (src, dst) in subgraph.edges.iter() {
        let a = network.node(*src)?;
        let b = network.node(*dst)?;
        let line = LineString::from(vec![(a.x, a.y), (b.x, b.y)]);
        buffered.extend(line.buffer(buffer).0);
    }

    let shells = union_all(&buffered)
        .0
        .into_iter()
        .map(|polygon| Polygon::new(polygon.exterior().clone(), vec![]))
        .collect::<Vec<_>>();
    Ok((trip_time, MultiPolygon::new(shells)))
}

fn union_all(polygons: &[Polygon<f64>]) -> MultiPolygon<f64> {
    if polygons.is_empty() {
        return MultiPolygon::new(vec![]);
    }
    unary_union(polygons.iter())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::network::{Crs, StreetEdge};
    use geo::Area;

    /// a chain of nodes 500 meters apart, 5 minutes per segment, with
    /// edges in both directions.
    fn chain_network(n: usize) -> (StreetNetwork, Vec<NodeIndex>) {
        let mut network = StreetNetwork::new(Crs::Epsg3857);
        let nodes = (0..n)
            .map(|i| network.add_node(i as f64 * 500.0, 0.0))
            .collect::<Vec<_>>();
        for pair in nodes.windows(2) {
            network.add_edge(pair[0], pair[1], StreetEdge::with_time(5.0));
            network.add_edge(pair[1], pair[0], StreetEdge::with_time(5.0));
        }
        (network, nodes)
    }

    #[test]
    fn test_rows_sorted_descending_one_per_threshold() {
        let (network, nodes) = chain_network(3);
        let table = make_isochrones(
            &network,
            &[5, 10],
            &[nodes[0], nodes[1]],
            &IsochroneOptions::default(),
        )
        .expect("should compute");
        let thresholds = table.rows.iter().map(|r| r.trip_time).collect::<Vec<_>>();
        assert_eq!(thresholds, vec![10, 5]);
    }

    #[test]
    fn test_nested_isochrones_grow_with_budget() {
        let (network, nodes) = chain_network(3);
        let table = make_isochrones(
            &network,
            &[5, 10],
            &[nodes[0]],
            &IsochroneOptions::default(),
        )
        .expect("should compute");
        assert_eq!(table.len(), 2);
        let larger = table.rows[0].geometry.unsigned_area();
        let smaller = table.rows[1].geometry.unsigned_area();
        assert!(larger >= smaller);
        assert!(smaller > 0.0);
        assert_eq!(table.crs, Crs::Epsg3857);
    }

    #[test]
    fn test_isolated_center_yields_empty_geometry() {
        let mut network = StreetNetwork::new(Crs::Epsg3857);
        let isolated = network.add_node(0.0, 0.0);
        let table = make_isochrones(&network, &[5], &[isolated], &IsochroneOptions::default())
            .expect("should compute");
        assert_eq!(table.len(), 1);
        assert!(table.rows[0].geometry.0.is_empty());
    }

    #[test]
    fn test_multiple_centers_union_per_threshold() {
        let (network, nodes) = chain_network(5);
        let single = make_isochrones(&network, &[5], &[nodes[0]], &IsochroneOptions::default())
            .expect("should compute");
        let both = make_isochrones(
            &network,
            &[5],
            &[nodes[0], nodes[4]],
            &IsochroneOptions::default(),
        )
        .expect("should compute");
        assert_eq!(both.len(), 1);
        assert!(
            both.rows[0].geometry.unsigned_area() > single.rows[0].geometry.unsigned_area(),
            "a second center should widen the merged polygon"
        );
    }

    #[test]
    fn test_unknown_center_fails_batch() {
        let (network, _) = chain_network(2);
        let result = make_isochrones(
            &network,
            &[5],
            &[NodeIndex::new(99)],
            &IsochroneOptions::default(),
        );
        assert!(result.is_err());
    }
}
