use crate::network::{Crs, NetworkError};
use geo::Point;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::Directed;

/// a street network node with planar coordinates in the network CRS.
#[derive(Debug, Clone, Copy)]
pub struct StreetNode {
    pub x: f64,
    pub y: f64,
}

impl StreetNode {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

/// attributes of a street network edge. `length_meters` is present for
/// edges imported from a street dataset and absent for edges injected from
/// transit schedules, which carry a travel time directly.
#[derive(Debug, Clone, Copy)]
pub struct StreetEdge {
    pub length_meters: Option<f64>,
    /// traversal time in minutes.
    pub time: f64,
}

impl StreetEdge {
    /// an edge imported from a street dataset, lengths known up front and
    /// travel time assigned later from a travel speed.
    pub fn with_length(length_meters: f64) -> StreetEdge {
        StreetEdge {
            length_meters: Some(length_meters),
            time: 0.0,
        }
    }

    /// an edge injected from a transit schedule, carrying only a time.
    pub fn with_time(time: f64) -> StreetEdge {
        StreetEdge {
            length_meters: None,
            time,
        }
    }
}

/// directed street multigraph produced upstream of this crate. parallel
/// edges between the same node pair are allowed and preserved.
pub struct StreetNetwork {
    pub graph: Graph<StreetNode, StreetEdge, Directed>,
    pub crs: Crs,
}

impl StreetNetwork {
    pub fn new(crs: Crs) -> StreetNetwork {
        StreetNetwork {
            graph: Graph::new(),
            crs,
        }
    }

    pub fn add_node(&mut self, x: f64, y: f64) -> NodeIndex {
        self.graph.add_node(StreetNode { x, y })
    }

    pub fn add_edge(&mut self, src: NodeIndex, dst: NodeIndex, edge: StreetEdge) -> EdgeIndex {
        self.graph.add_edge(src, dst, edge)
    }

    pub fn node(&self, index: NodeIndex) -> Result<&StreetNode, NetworkError> {
        self.graph
            .node_weight(index)
            .ok_or(NetworkError::UnknownNodeError(index.index()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
