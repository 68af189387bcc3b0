mod crs;
mod merge_ops;
mod network_error;
mod network_ops;
mod street_network;
mod transit_graph;

pub use crs::Crs;
pub use merge_ops::merge_schedules;
pub use network_error::NetworkError;
pub use network_ops::{add_travel_times, times_from_center};
pub use street_network::{StreetEdge, StreetNetwork, StreetNode};
pub use transit_graph::{TransitEdge, TransitGraph, TransitStop};
