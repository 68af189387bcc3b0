use crate::network::{NetworkError, StreetNetwork};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// assigns a traversal time in minutes to every edge of the network from
/// its length and a constant travel speed in km/h. edges injected from
/// transit schedules have no length and are an error here; travel times
/// should be assigned before schedules are merged in.
pub fn add_travel_times(
    network: &mut StreetNetwork,
    travel_speed_km_h: f64,
) -> Result<(), NetworkError> {
    if travel_speed_km_h <= 0.0 {
        return Err(NetworkError::InvalidSpeedError(travel_speed_km_h));
    }
    let meters_per_min = travel_speed_km_h * 1000.0 / 60.0;
    for edge in network.graph.edge_indices() {
        let (src, dst) = network
            .graph
            .edge_endpoints(edge)
            .ok_or(NetworkError::UnknownNodeError(edge.index()))?;
        let weight = &mut network.graph[edge];
        let length = weight
            .length_meters
            .ok_or(NetworkError::MissingEdgeLengthError {
                src: src.index(),
                dst: dst.index(),
            })?;
        weight.time = length / meters_per_min;
    }
    Ok(())
}

/// single-source shortest path times in minutes from a center node along
/// the edge `time` weights. unreachable nodes are absent from the result.
pub fn times_from_center(
    network: &StreetNetwork,
    center: NodeIndex,
) -> Result<HashMap<NodeIndex, f64>, NetworkError> {
    network.node(center)?;
    Ok(dijkstra(&network.graph, center, None, |e| e.weight().time))
}
