use crate::network::{NetworkError, StreetEdge, StreetNetwork, TransitGraph};
use geo::Point;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use std::collections::HashMap;

type IndexedPosition = GeomWithData<[f64; 2], NodeIndex>;

/// injects the edges of a transit graph into a street network. every stop
/// is projected into the network CRS and snapped to its nearest street
/// node by planar distance; each transit edge then becomes a street edge
/// between the snapped endpoints, carrying the schedule travel time.
///
/// no nodes are added: transit connectivity rides on existing street
/// nodes. multiple transit edges snapping onto the same node pair are kept
/// as parallel edges.
pub fn merge_schedules(
    network: &mut StreetNetwork,
    schedules: &TransitGraph,
) -> Result<(), NetworkError> {
    if network.graph.node_count() == 0 {
        return Err(NetworkError::EmptyNetworkError);
    }
    let tree: RTree<IndexedPosition> = RTree::bulk_load(
        network
            .graph
            .node_indices()
            .map(|index| {
                let node = &network.graph[index];
                GeomWithData::new([node.x, node.y], index)
            })
            .collect(),
    );

    let mut snapped: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    for stop_index in schedules.graph.node_indices() {
        let stop = &schedules.graph[stop_index];
        let position = schedules
            .crs
            .project_point(&Point::new(stop.x, stop.y), &network.crs);
        let nearest = tree
            .nearest_neighbor(&[position.x(), position.y()])
            .ok_or(NetworkError::EmptyNetworkError)?;
        snapped.insert(stop_index, nearest.data);
    }

    let mut added = 0;
    for edge in schedules.graph.edge_references() {
        let src = snapped
            .get(&edge.source())
            .ok_or(NetworkError::UnknownNodeError(edge.source().index()))?;
        let dst = snapped
            .get(&edge.target())
            .ok_or(NetworkError::UnknownNodeError(edge.target().index()))?;
        network.add_edge(*src, *dst, StreetEdge::with_time(edge.weight().time));
        added += 1;
    }
    log::info!(
        "merged {} schedule edges onto {} street nodes",
        added,
        snapped.len()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::network::Crs;

    fn street_pair() -> (StreetNetwork, NodeIndex, NodeIndex) {
        let mut network = StreetNetwork::new(Crs::Epsg4326);
        let a = network.add_node(0.0, 0.0);
        let b = network.add_node(1.0, 0.0);
        network.add_edge(a, b, StreetEdge::with_time(10.0));
        (network, a, b)
    }

    #[test]
    fn test_merge_adds_edges_not_nodes() {
        let (mut network, a, b) = street_pair();
        let mut transit = TransitGraph::new(Crs::Epsg4326);
        let s1 = transit.add_stop("s1", 0.01, 0.01);
        let s2 = transit.add_stop("s2", 0.99, 0.01);
        transit.upsert_edge(s1, s2, 7.0);

        let nodes_before = network.node_count();
        let edges_before = network.edge_count();
        merge_schedules(&mut network, &transit).expect("merge should succeed");

        assert_eq!(network.node_count(), nodes_before);
        assert_eq!(network.edge_count(), edges_before + 1);
        let merged = network
            .graph
            .edges_connecting(a, b)
            .chain(network.graph.edges_connecting(b, a))
            .find(|e| e.weight().time == 7.0);
        assert!(merged.is_some(), "schedule edge should join snapped nodes");
    }

    #[test]
    fn test_merge_preserves_parallel_edges() {
        let (mut network, _, _) = street_pair();
        let mut transit = TransitGraph::new(Crs::Epsg4326);
        // two distinct stop pairs snapping onto the same street node pair
        let s1 = transit.add_stop("s1", 0.01, 0.01);
        let s2 = transit.add_stop("s2", 0.99, 0.01);
        let s3 = transit.add_stop("s3", 0.02, -0.01);
        let s4 = transit.add_stop("s4", 0.98, -0.01);
        transit.upsert_edge(s1, s2, 7.0);
        transit.upsert_edge(s3, s4, 9.0);

        let edges_before = network.edge_count();
        merge_schedules(&mut network, &transit).expect("merge should succeed");
        assert_eq!(network.edge_count(), edges_before + 2);
    }

    #[test]
    fn test_merge_projects_schedule_into_network_crs() {
        let mut network = StreetNetwork::new(Crs::Epsg3857);
        // street nodes at the mercator positions of lon 0 and lon 1
        let a = network.add_node(0.0, 0.0);
        let b = network.add_node(111_319.49, 0.0);
        network.add_edge(a, b, StreetEdge::with_time(10.0));

        let mut transit = TransitGraph::new(Crs::Epsg4326);
        let s1 = transit.add_stop("s1", 0.001, 0.0);
        let s2 = transit.add_stop("s2", 0.999, 0.0);
        transit.upsert_edge(s1, s2, 4.0);

        merge_schedules(&mut network, &transit).expect("merge should succeed");
        let merged = network
            .graph
            .edges_connecting(a, b)
            .chain(network.graph.edges_connecting(b, a))
            .find(|e| e.weight().time == 4.0);
        assert!(merged.is_some(), "stops should snap after reprojection");
    }

    #[test]
    fn test_merge_into_empty_network_fails() {
        let mut network = StreetNetwork::new(Crs::Epsg4326);
        let transit = TransitGraph::new(Crs::Epsg4326);
        let result = merge_schedules(&mut network, &transit);
        assert!(matches!(result, Err(NetworkError::EmptyNetworkError)));
    }
}
