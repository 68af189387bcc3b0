use crate::network::{NetworkError, StreetNetwork};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// the portion of a street network reachable from a center node within a
/// travel time budget: the nodes within the budget along shortest paths,
/// and the edges induced among them.
pub struct ReachableSubgraph {
    pub center: NodeIndex,
    pub nodes: HashSet<NodeIndex>,
    pub edges: Vec<(NodeIndex, NodeIndex)>,
}

impl ReachableSubgraph {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// extracts the subgraph of nodes whose shortest-path time from `center`
/// is within `max_time` minutes, together with all edges whose endpoints
/// both fall inside that node set.
pub fn reachable_subgraph(
    network: &StreetNetwork,
    center: NodeIndex,
    max_time: f64,
) -> Result<ReachableSubgraph, NetworkError> {
    network.node(center)?;
    let times = dijkstra(&network.graph, center, None, |e| e.weight().time);
    let nodes = times
        .into_iter()
        .filter(|(_, time)| *time <= max_time)
        .map(|(node, _)| node)
        .collect::<HashSet<_>>();
    let edges = network
        .graph
        .edge_references()
        .filter(|e| nodes.contains(&e.source()) && nodes.contains(&e.target()))
        .map(|e| (e.source(), e.target()))
        .collect::<Vec<_>>();
    Ok(ReachableSubgraph {
        center,
        nodes,
        edges,
    })
}
