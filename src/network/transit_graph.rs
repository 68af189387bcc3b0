use crate::network::Crs;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// a transit stop with its identifier and position in the graph CRS.
#[derive(Debug, Clone)]
pub struct TransitStop {
    pub stop_id: String,
    pub x: f64,
    pub y: f64,
}

/// an undirected connection between two consecutive stops of a trip.
#[derive(Debug, Clone, Copy)]
pub struct TransitEdge {
    /// inter-stop travel time in minutes.
    pub time: f64,
}

/// undirected weighted graph of transit stops, keyed by stop identifier.
/// node positions are fixed at first insertion; repeated edges between the
/// same stop pair overwrite the travel time, latest value wins.
pub struct TransitGraph {
    pub graph: UnGraph<TransitStop, TransitEdge>,
    index: HashMap<String, NodeIndex>,
    pub crs: Crs,
}

impl TransitGraph {
    pub fn new(crs: Crs) -> TransitGraph {
        TransitGraph {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
            crs,
        }
    }

    /// inserts a stop if its identifier has not been seen, returning the
    /// node index either way. positions of already-present stops are kept.
    pub fn add_stop(&mut self, stop_id: &str, x: f64, y: f64) -> NodeIndex {
        match self.index.get(stop_id) {
            Some(index) => *index,
            None => {
                let index = self.graph.add_node(TransitStop {
                    stop_id: stop_id.to_string(),
                    x,
                    y,
                });
                self.index.insert(stop_id.to_string(), index);
                index
            }
        }
    }

    /// adds an undirected edge between two stops, overwriting the time of
    /// an existing edge between the same pair.
    pub fn upsert_edge(&mut self, src: NodeIndex, dst: NodeIndex, time: f64) {
        match self.graph.find_edge(src, dst) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    weight.time = time;
                }
            }
            None => {
                self.graph.add_edge(src, dst, TransitEdge { time });
            }
        }
    }

    pub fn node_index(&self, stop_id: &str) -> Option<NodeIndex> {
        self.index.get(stop_id).copied()
    }

    pub fn stop_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_stop_first_position_wins() {
        let mut g = TransitGraph::new(Crs::Epsg4326);
        let a = g.add_stop("a", 1.0, 2.0);
        let same = g.add_stop("a", 9.0, 9.0);
        assert_eq!(a, same);
        assert_eq!(g.stop_count(), 1);
        let stop = &g.graph[a];
        assert_eq!(stop.x, 1.0);
        assert_eq!(stop.y, 2.0);
    }

    #[test]
    fn test_upsert_edge_overwrites_time() {
        let mut g = TransitGraph::new(Crs::Epsg4326);
        let a = g.add_stop("a", 0.0, 0.0);
        let b = g.add_stop("b", 1.0, 0.0);
        g.upsert_edge(a, b, 5.0);
        // reverse direction matches the same undirected edge
        g.upsert_edge(b, a, 8.0);
        assert_eq!(g.edge_count(), 1);
        let edge = g.graph.find_edge(a, b).expect("edge should exist");
        assert_eq!(g.graph[edge].time, 8.0);
    }
}
